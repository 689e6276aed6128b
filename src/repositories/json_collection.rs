// src/repositories/json_collection.rs
//
// Whole-file JSON persistence for one collection.
//
// A missing or unreadable file loads as the default value (self-healing on
// the next save). Write failures propagate to the caller; there is no
// write-ahead buffer, so an in-memory mutation preceding a failed write is
// lost on restart.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct JsonCollection {
    path: PathBuf,
}

impl JsonCollection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the whole collection.
    ///
    /// Returns `T::default()` when the file does not exist or cannot be
    /// read/parsed. Corruption is logged, never surfaced to the caller.
    pub fn load<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("failed to read {}: {}", self.path.display(), err);
                }
                return T::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to parse {}: {}", self.path.display(), err);
                T::default()
            }
        }
    }

    /// Serialize and overwrite the whole collection.
    ///
    /// The write is atomic from this process's perspective: a subsequent
    /// `load` within the same process never observes a partial state.
    pub fn save<T>(&self, value: &T) -> AppResult<()>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
