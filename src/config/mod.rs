// src/config/mod.rs
//
// Bot configuration, loaded from a JSON file. Every field has a default so
// a partial config file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Directory holding the JSON collections
    #[serde(default = "default_data_dir", rename = "dataDir")]
    pub data_dir: PathBuf,

    /// Users allowed to run admin-only operations (save/update/delete,
    /// reject, cleanup)
    #[serde(default, rename = "adminUserIds")]
    pub admin_user_ids: Vec<String>,

    /// TMDB API key; metadata lookup is disabled when absent
    #[serde(default, rename = "tmdbApiKey")]
    pub tmdb_api_key: Option<String>,

    /// GPLinks API token; shortening is disabled when absent
    #[serde(default, rename = "gplinksApiToken")]
    pub gplinks_api_token: Option<String>,

    /// Channel where new requests are announced to admins
    #[serde(default, rename = "globalRequestChannelId")]
    pub global_request_channel_id: Option<String>,

    /// Age threshold for the stale-request sweep
    #[serde(default = "default_purge_days", rename = "requestPurgeDays")]
    pub request_purge_days: i64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_purge_days() -> i64 {
    30
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            admin_user_ids: Vec::new(),
            tmdb_api_key: None,
            gplinks_api_token: None,
            global_request_channel_id: None,
            request_purge_days: default_purge_days(),
        }
    }
}

impl BotConfig {
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admin_user_ids.iter().any(|id| id == user_id)
    }

    pub fn movies_path(&self) -> PathBuf {
        self.data_dir.join("movies.json")
    }

    pub fn requests_path(&self) -> PathBuf {
        self.data_dir.join("requests.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn unshortened_links_path(&self) -> PathBuf {
        self.data_dir.join("unshortened_links.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"adminUserIds": ["42"]}}"#).unwrap();

        let config = BotConfig::load(file.path()).unwrap();
        assert!(config.is_admin("42"));
        assert!(!config.is_admin("43"));
        assert_eq!(config.request_purge_days, 30);
        assert_eq!(config.movies_path(), PathBuf::from("data/movies.json"));
    }
}
