// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Crate-level failure taxonomy.
///
/// The lookup/validation variants (`NotFound`, `DuplicateRequest`,
/// `AlreadyCataloged`, `AlreadyProcessed`, `InvalidInput`) are expected
/// control flow and are returned to the command layer as typed results.
/// Only `Store` and `Serialization` represent operational errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store IO error: {0}")]
    Store(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Resource not found")]
    NotFound,

    #[error("A pending request for \"{movie_name}\" already exists (requested by {requested_by})")]
    DuplicateRequest {
        movie_name: String,
        requested_by: String,
    },

    #[error("\"{0}\" is already in the catalog")]
    AlreadyCataloged(String),

    #[error("Request {id} has already been processed (status: {status})")]
    AlreadyProcessed { id: String, status: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Metadata lookup failed: {0}")]
    MetadataUnavailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Other(format!("UUID error: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Other(format!("Date parse error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
