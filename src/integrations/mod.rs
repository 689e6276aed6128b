// src/integrations/mod.rs
//
// External Integrations Module
//
// Collaborators the core treats as opaque, fallible services. None of
// them may fail a core operation: metadata lookup is retried by the
// caller, shortening falls back to the original URL, notification
// failures are logged and dropped.

pub mod gplinks;
pub mod notifier;
pub mod tmdb;

pub use gplinks::client::GpLinksShortener;
pub use gplinks::LinkShortener;
pub use notifier::{NotificationEvent, Notifier, NullNotifier};
pub use tmdb::client::TmdbClient;
pub use tmdb::MetadataProvider;
