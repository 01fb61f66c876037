use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text record held by the store.
///
/// Articles are append-only: once accepted they are never edited or removed.
/// The `id` is assigned by the store and is strictly increasing in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Free-form labels, matched exactly by tag search.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an article.
///
/// Every field is optional on the wire so that a missing title or content is
/// reported by the store's own presence check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateArticleInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateArticleInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            tags: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Query parameters for `GET /articles/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Case-sensitive substring matched against title and content.
    pub keyword: Option<String>,
    /// Exact tag label.
    pub tag: Option<String>,
    /// `"relevance"` (default) or anything else for insertion order.
    pub sort_by: Option<String>,
}

impl SearchQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// The keyword, treating an empty string as absent.
    pub fn keyword_term(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    /// The tag, treating an empty string as absent.
    pub fn tag_term(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    pub fn sort_order(&self) -> SortBy {
        SortBy::from_param(self.sort_by.as_deref())
    }
}

/// Ordering applied to search results.
///
/// - `Relevance`: descending keyword occurrence count (only when a keyword is given)
/// - `Insertion`: store order, no sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Relevance,
    Insertion,
}

impl SortBy {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("relevance") => Self::Relevance,
            Some(_) => Self::Insertion,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleResponse {
    pub message: String,
    pub article: Article,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Article>,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
