use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents a cataloged movie or web series.
/// This is the root entity for all catalog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Immutable identifier. TMDB id when metadata resolved at save time,
    /// otherwise assigned by the store (max numeric id + 1). Always a
    /// string internally; numeric external input is coerced at the boundary.
    pub id: String,

    /// Display title, used for exact matching (case-insensitive)
    pub name: String,

    /// Alternative titles, searched case-insensitively
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Available audio languages (lowercase, deduplicated)
    #[serde(default)]
    pub languages: Vec<String>,

    /// Quality label ("1080p", "4k", ...) to watch/download URL
    #[serde(default, rename = "watchLinks")]
    pub watch_links: BTreeMap<String, String>,

    /// Screenshot URLs
    #[serde(default, rename = "screenshotLinks")]
    pub screenshot_links: Vec<String>,

    /// Fallback poster image when TMDB has none
    #[serde(default, rename = "customPosterUrl")]
    pub custom_poster_url: Option<String>,

    /// Metadata fetched from TMDB at save time, if the lookup succeeded
    #[serde(default, rename = "tmdbDetails")]
    pub tmdb_details: Option<TmdbDetails>,

    /// Creation timestamp
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// External metadata block. Every sub-field is individually optional;
/// absence must not break any operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbDetails {
    #[serde(default)]
    pub tmdb_id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub overview: Option<String>,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub backdrop_path: Option<String>,

    #[serde(default)]
    pub genres: Vec<Genre>,

    /// TMDB rating, 0-10
    #[serde(default)]
    pub vote_average: Option<f64>,

    #[serde(default)]
    pub media_type: Option<MediaType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl Movie {
    /// Create a new Movie entity.
    ///
    /// An empty `id` means "let the store assign one" on insert.
    pub fn new(name: String, languages: Vec<String>) -> Self {
        Self {
            id: String::new(),
            name,
            aliases: Vec::new(),
            languages,
            watch_links: BTreeMap::new(),
            screenshot_links: Vec::new(),
            custom_poster_url: None,
            tmdb_details: None,
            added_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Title from the external metadata block, if it carries one
    pub fn tmdb_title(&self) -> Option<&str> {
        self.tmdb_details
            .as_ref()
            .and_then(|d| d.title.as_deref())
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
        }
    }
}
