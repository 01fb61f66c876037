//! Flat JSON file holding every article.

use std::path::{Path, PathBuf};

use crate::error::PersistError;
use crate::models::Article;

/// The on-disk copy of the store: one pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all articles. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Article>, PersistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        let articles = serde_json::from_str(&data)?;
        Ok(articles)
    }

    /// Rewrite the whole file. Goes through a `.tmp` sibling and a rename so a
    /// crash mid-write leaves the previous contents intact.
    pub fn save(&self, articles: &[Article]) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(articles)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
