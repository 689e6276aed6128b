pub mod client;

use async_trait::async_trait;

use crate::domain::movie::{MediaType, TmdbDetails};
use crate::error::AppResult;

/// External metadata lookup. Each call is an independent attempt; the
/// retry policy lives in the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up a title (or a numeric TMDB id) and return its metadata,
    /// or `None` when nothing matches.
    async fn lookup(
        &self,
        query: &str,
        media_type_hint: Option<MediaType>,
    ) -> AppResult<Option<TmdbDetails>>;
}

pub use client::TmdbClient;
