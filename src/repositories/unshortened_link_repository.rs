// src/repositories/unshortened_link_repository.rs
//
// Admin-only audit trail: original watch links as they were before the
// shortener rewrote them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppResult;
use crate::repositories::json_collection::JsonCollection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnshortenedLink {
    /// Movie name the link belongs to
    pub name: String,
    pub link: String,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

pub trait UnshortenedLinkRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<UnshortenedLink>>;
    fn add(&self, name: &str, link: &str) -> AppResult<UnshortenedLink>;
}

pub struct JsonUnshortenedLinkRepository {
    collection: JsonCollection,
}

impl JsonUnshortenedLinkRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }
}

impl UnshortenedLinkRepository for JsonUnshortenedLinkRepository {
    fn list_all(&self) -> AppResult<Vec<UnshortenedLink>> {
        Ok(self.collection.load())
    }

    fn add(&self, name: &str, link: &str) -> AppResult<UnshortenedLink> {
        let mut links: Vec<UnshortenedLink> = self.collection.load();
        let record = UnshortenedLink {
            name: name.to_string(),
            link: link.to_string(),
            added_at: Utc::now(),
        };
        links.push(record.clone());
        self.collection.save(&links)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_appends() {
        let dir = tempdir().unwrap();
        let repo = JsonUnshortenedLinkRepository::new(dir.path().join("unshortened.json"));

        repo.add("Dune", "https://example.com/a").unwrap();
        repo.add("Dune", "https://example.com/b").unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].link, "https://example.com/b");
    }
}
