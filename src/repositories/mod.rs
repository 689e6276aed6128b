// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Whole-file read-modify-write only: every query re-reads the backing
//   file, every mutation rewrites the full collection. Readers always
//   observe the latest successfully saved state.
//
// There are no transactions across collections. A caller sequencing two
// saves (movie insert, then request fulfillment) accepts that a crash in
// between leaves a valid-but-inconsistent pair of files.

pub mod json_collection;
pub mod memory;
pub mod movie_repository;
pub mod request_repository;
pub mod settings_repository;
pub mod unshortened_link_repository;

pub use json_collection::JsonCollection;
pub use memory::{InMemoryMovieRepository, InMemoryRequestRepository};
pub use movie_repository::{JsonMovieRepository, MovieRepository};
pub use request_repository::{JsonRequestRepository, RequestRepository};
pub use settings_repository::{JsonSettingsRepository, SettingsRepository};
pub use unshortened_link_repository::{
    JsonUnshortenedLinkRepository, UnshortenedLink, UnshortenedLinkRepository,
};
