// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod request_service;
pub mod resolver_service;
pub mod validation;

#[cfg(test)]
mod catalog_service_tests;

// Re-export all services and their types
pub use catalog_service::{
    CatalogService,
    SaveMovieOutcome,
    SaveMovieRequest,
    UpdateMovieRequest,
    ALLOWED_LANGUAGES,
};

pub use request_service::{
    PurgeReport,
    RequestService,
};

pub use resolver_service::{
    Resolution,
    ResolverService,
};

pub use validation::{parse_list, parse_screenshot_links, parse_watch_links, validate_url};
