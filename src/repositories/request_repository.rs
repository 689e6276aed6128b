// src/repositories/request_repository.rs
//
// Request persistence over a single JSON file.

use std::path::PathBuf;

use crate::domain::request::MovieRequest;
use crate::error::{AppError, AppResult};
use crate::repositories::json_collection::JsonCollection;

pub trait RequestRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<MovieRequest>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<MovieRequest>>;
    fn insert(&self, request: MovieRequest) -> AppResult<MovieRequest>;
    /// Replace the stored record with the same id
    fn update(&self, request: &MovieRequest) -> AppResult<()>;
    /// Physically remove a record. Errors with `NotFound` when absent.
    fn remove(&self, id: &str) -> AppResult<()>;
    fn replace_all(&self, requests: &[MovieRequest]) -> AppResult<()>;
}

pub struct JsonRequestRepository {
    collection: JsonCollection,
}

impl JsonRequestRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }
}

impl RequestRepository for JsonRequestRepository {
    fn list_all(&self) -> AppResult<Vec<MovieRequest>> {
        Ok(self.collection.load())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<MovieRequest>> {
        let requests: Vec<MovieRequest> = self.collection.load();
        Ok(requests.into_iter().find(|r| r.id == id))
    }

    fn insert(&self, request: MovieRequest) -> AppResult<MovieRequest> {
        let mut requests: Vec<MovieRequest> = self.collection.load();
        requests.push(request.clone());
        self.collection.save(&requests)?;
        Ok(request)
    }

    fn update(&self, request: &MovieRequest) -> AppResult<()> {
        let mut requests: Vec<MovieRequest> = self.collection.load();
        let slot = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(AppError::NotFound)?;
        *slot = request.clone();
        self.collection.save(&requests)?;
        Ok(())
    }

    fn remove(&self, id: &str) -> AppResult<()> {
        let requests: Vec<MovieRequest> = self.collection.load();
        let original_len = requests.len();
        let remaining: Vec<MovieRequest> =
            requests.into_iter().filter(|r| r.id != id).collect();
        if remaining.len() == original_len {
            return Err(AppError::NotFound);
        }
        self.collection.save(&remaining)?;
        Ok(())
    }

    fn replace_all(&self, requests: &[MovieRequest]) -> AppResult<()> {
        self.collection.save(&requests)
    }
}
