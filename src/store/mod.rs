pub mod persist;
pub mod search;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::error::StoreError;
use crate::models::*;
use persist::JsonFile;

pub const TITLE_AND_CONTENT_REQUIRED: &str = "Title and content are required";
pub const KEYWORD_OR_TAG_REQUIRED: &str = "Keyword or tag is required for search";

struct Inner {
    articles: Vec<Article>,
    next_id: u64,
}

/// In-memory article store, optionally mirrored to a JSON file.
///
/// Cloning is cheap and every clone shares the same articles. All writers go
/// through one mutex, so "take id, append, persist" never interleaves.
#[derive(Clone)]
pub struct ArticleStore {
    inner: Arc<Mutex<Inner>>,
    file: Option<JsonFile>,
}

impl ArticleStore {
    /// Open a store backed by `path`, loading existing articles if the file is there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file = JsonFile::new(path);
        let articles = file
            .load()
            .with_context(|| format!("Failed to load articles from {}", file.path().display()))?;

        // max + 1 rather than len + 1: ids burned by failed writes or removed
        // by hand-editing the file must not be handed out again.
        let next_id = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner { articles, next_id })),
            file: Some(file),
        })
    }

    /// A store with nothing on disk. Used by tests.
    pub fn open_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                articles: Vec::new(),
                next_id: 1,
            })),
            file: None,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("store lock poisoned").articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every article in insertion order.
    pub fn all(&self) -> Vec<Article> {
        self.inner
            .lock()
            .expect("store lock poisoned")
            .articles
            .clone()
    }

    pub fn insert(&self, input: CreateArticleInput) -> Result<Article, StoreError> {
        let title = input.title.filter(|t| !t.is_empty());
        let content = input.content.filter(|c| !c.is_empty());
        let (Some(title), Some(content)) = (title, content) else {
            return Err(StoreError::validation(TITLE_AND_CONTENT_REQUIRED));
        };

        let mut inner = self.inner.lock().expect("store lock poisoned");
        let article = Article {
            id: inner.next_id,
            title,
            content,
            tags: input.tags.unwrap_or_default(),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.articles.push(article.clone());

        if let Some(file) = &self.file {
            // Memory follows disk: undo the append, but the id stays consumed.
            if let Err(e) = file.save(&inner.articles) {
                inner.articles.pop();
                return Err(e.into());
            }
        }

        tracing::info!(id = article.id, "Article added: {}", article.title);
        Ok(article)
    }

    pub fn get(&self, id: u64) -> Result<Article, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Article>, StoreError> {
        let keyword = query.keyword_term();
        let tag = query.tag_term();
        if keyword.is_none() && tag.is_none() {
            return Err(StoreError::validation(KEYWORD_OR_TAG_REQUIRED));
        }

        let inner = self.inner.lock().expect("store lock poisoned");
        let results = search::filter_and_rank(&inner.articles, keyword, tag, query.sort_order());
        tracing::debug!(
            keyword = keyword.unwrap_or_default(),
            tag = tag.unwrap_or_default(),
            "Search matched {} of {} articles",
            results.len(),
            inner.articles.len()
        );
        Ok(results)
    }
}
