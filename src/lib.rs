// src/lib.rs
// MovieHub - Movie catalog and request-workflow core for a chat bot
//
// Architecture:
// - Domain-centric: business rules live in domain entities and invariants
// - Flat-file persistence: each collection is one JSON file, re-read on
//   every query and rewritten whole on every mutation
// - Explicit: no implicit behavior, no ambient globals; stores take an
//   injected file path, services take injected repositories
// - The chat gateway, command registration, and rendering sit ABOVE this
//   crate and consume typed results; the core never formats user-facing
//   text

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_movie,
    validate_request,
    // Settings
    BotSettings,
    Genre,
    GuildSettings,
    MediaType,
    // Movie
    Movie,
    // Request
    MovieRequest,
    RequestOrigin,
    RequestStatus,
    TmdbDetails,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::BotConfig;

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    InMemoryMovieRepository,
    InMemoryRequestRepository,
    JsonMovieRepository,
    JsonRequestRepository,
    JsonSettingsRepository,
    JsonUnshortenedLinkRepository,
    MovieRepository,
    RequestRepository,
    SettingsRepository,
    UnshortenedLink,
    UnshortenedLinkRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Catalog Service
    CatalogService,
    PurgeReport,
    // Request Lifecycle Manager
    RequestService,
    Resolution,
    // Movie Resolver
    ResolverService,
    SaveMovieOutcome,
    SaveMovieRequest,
    UpdateMovieRequest,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    GpLinksShortener,
    LinkShortener,
    MetadataProvider,
    NotificationEvent,
    Notifier,
    NullNotifier,
    TmdbClient,
};
