// src/integrations/tmdb/client.rs
//
// TMDB API Integration
//
// ARCHITECTURE:
// - REST client for api.themoviedb.org/v3
// - Maps external data → TmdbDetails (NO domain mutation)
// - Used by CatalogService through the MetadataProvider trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates or modifies domain entities directly
// - A numeric query is treated as a direct id lookup (movie endpoint
//   first, then TV), anything else goes through /search/multi

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::movie::{Genre, MediaType, TmdbDetails};
use crate::error::{AppError, AppResult};
use crate::integrations::tmdb::MetadataProvider;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TmdbClient {
    http: Client,
    api_key: String,
    base_url: String,
}

/// Raw detail payload from /movie/{id}, /tv/{id} or a search hit
#[derive(Debug, Deserialize)]
struct RawDetails {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    /// TV shows carry `name` instead of `title`
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    /// TV shows carry `first_air_date` instead of `release_date`
    #[serde(default)]
    first_air_date: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    genres: Vec<RawGenre>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: i64,
    #[serde(default)]
    media_type: Option<String>,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, TMDB_BASE_URL)
    }

    /// Base-url override for tests against a local stub server
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_details(&self, kind: MediaType, id: &str) -> AppResult<Option<TmdbDetails>> {
        let url = format!("{}/{}/{}", self.base_url, kind, id);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Other(format!("TMDB request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AppError::Other(format!(
                "TMDB returned {} for {}",
                response.status(),
                url
            )));
        }

        let raw: RawDetails = response
            .json()
            .await
            .map_err(|e| AppError::Other(format!("TMDB response parse failed: {}", e)))?;
        Ok(Some(map_details(raw, Some(kind))))
    }

    async fn search_multi(&self, query: &str) -> AppResult<Option<TmdbDetails>> {
        let url = format!("{}/search/multi", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("include_adult", "false"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Other(format!("TMDB search failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Other(format!(
                "TMDB returned {} for search",
                response.status()
            )));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Other(format!("TMDB response parse failed: {}", e)))?;

        // First movie/tv hit wins; people and other media kinds are skipped
        let hit = search.results.into_iter().find_map(|hit| {
            let kind = match hit.media_type.as_deref() {
                Some("movie") => MediaType::Movie,
                Some("tv") => MediaType::Tv,
                _ => return None,
            };
            Some((kind, hit.id))
        });

        match hit {
            Some((kind, id)) => self.fetch_details(kind, &id.to_string()).await,
            None => Ok(None),
        }
    }
}

fn map_details(raw: RawDetails, kind: Option<MediaType>) -> TmdbDetails {
    let media_type = kind.or_else(|| match raw.media_type.as_deref() {
        Some("movie") => Some(MediaType::Movie),
        Some("tv") => Some(MediaType::Tv),
        _ => None,
    });
    TmdbDetails {
        tmdb_id: Some(raw.id),
        title: raw.title.or(raw.name),
        overview: raw.overview,
        release_date: raw.release_date.or(raw.first_air_date),
        poster_path: raw.poster_path,
        backdrop_path: raw.backdrop_path,
        genres: raw
            .genres
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect(),
        vote_average: raw.vote_average,
        media_type,
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn lookup(
        &self,
        query: &str,
        media_type_hint: Option<MediaType>,
    ) -> AppResult<Option<TmdbDetails>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let is_numeric_id = !query.is_empty() && query.chars().all(|c| c.is_ascii_digit());
        if is_numeric_id {
            // Honor the hint when given, otherwise try movie then TV
            let order = match media_type_hint {
                Some(kind) => vec![kind],
                None => vec![MediaType::Movie, MediaType::Tv],
            };
            for kind in order {
                match self.fetch_details(kind, query).await {
                    Ok(Some(details)) => return Ok(Some(details)),
                    Ok(None) => continue,
                    Err(err) => {
                        log::warn!("TMDB id lookup failed for {} {}: {}", kind, query, err);
                        continue;
                    }
                }
            }
            return Ok(None);
        }

        self.search_multi(query).await
    }
}
