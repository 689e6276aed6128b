pub mod client;

use async_trait::async_trait;

/// URL shortening, best-effort. Implementations must return the original
/// URL unchanged on any failure; a save never fails because shortening did.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkShortener: Send + Sync {
    async fn shorten(&self, url: &str) -> String;
}

pub use client::GpLinksShortener;
