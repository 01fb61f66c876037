//! Runtime configuration.
//!
//! Values come from CLI flags, then environment variables, then defaults:
//! - `ARTICLE_SEARCH_HOST` (default `127.0.0.1`)
//! - `ARTICLE_SEARCH_PORT` (default `1234`)
//! - `ARTICLE_SEARCH_DATA_FILE` (default `articles.json`)

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_DATA_FILE: &str = "articles.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON file the store is loaded from and rewritten on every insert.
    pub data_file: PathBuf,
}

/// Values given on the command line. `None` falls through to the environment.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        Self::from_vars(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment.
    pub fn from_vars(
        overrides: Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let host = overrides
            .host
            .or_else(|| lookup("ARTICLE_SEARCH_HOST"))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match overrides.port {
            Some(port) => port,
            None => match lookup("ARTICLE_SEARCH_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("Invalid ARTICLE_SEARCH_PORT: {raw}"))?,
                None => DEFAULT_PORT,
            },
        };

        let data_file = overrides
            .data_file
            .or_else(|| lookup("ARTICLE_SEARCH_DATA_FILE").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Ok(Self {
            host,
            port,
            data_file,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
