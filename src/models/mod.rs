//! Domain models for the article service.
//!
//! - [`Article`]: an append-only text record with an id, tags and creation time.
//! - [`CreateArticleInput`] / [`SearchQuery`]: request payloads.
//! - Response envelopes mirror the JSON shapes served by the HTTP API.

mod article;

pub use article::*;
