// src/services/catalog_service.rs
//
// Catalog Service
//
// Admin-facing mutations of the movie collection: save with optional TMDB
// metadata lookup, partial update, and delete. Request fulfillment after a
// save is a separate orchestration step: the command layer calls
// `RequestService::fulfill_matching` with the returned movie, keeping the
// two components decoupled and individually testable. A crash between the
// two writes leaves a movie saved and a request still pending, which is
// acceptable best-effort consistency.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::movie::{validate_movie, MediaType, Movie, TmdbDetails};
use crate::error::{AppError, AppResult};
use crate::integrations::gplinks::LinkShortener;
use crate::integrations::tmdb::MetadataProvider;
use crate::repositories::{MovieRepository, UnshortenedLinkRepository};
use crate::services::resolver_service::ResolverService;

/// Languages the update command accepts. Storage itself is free-form; the
/// closed set is enforced on mutation only.
pub const ALLOWED_LANGUAGES: [&str; 4] = ["hindi", "english", "tamil", "telugu"];

const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const MAX_RETRY_ATTEMPTS: u32 = 5;

pub struct CatalogService {
    movie_repo: Arc<dyn MovieRepository>,
    unshortened_repo: Arc<dyn UnshortenedLinkRepository>,
    resolver: Arc<ResolverService>,
    metadata: Arc<dyn MetadataProvider>,
    shortener: Arc<dyn LinkShortener>,
}

#[derive(Debug, Clone)]
pub struct SaveMovieRequest {
    /// Display name, or a numeric TMDB id to look up
    pub name: String,
    pub watch_links: BTreeMap<String, String>,
    pub languages: Vec<String>,
    pub screenshot_links: Vec<String>,
    pub custom_poster_url: Option<String>,
    pub media_type_hint: Option<MediaType>,
    /// Save even when every metadata lookup attempt failed
    pub force_save: bool,
    /// Metadata lookup attempts, clamped to 1..=5
    pub retry_attempts: u32,
}

impl SaveMovieRequest {
    pub fn new(name: String, watch_links: BTreeMap<String, String>, languages: Vec<String>) -> Self {
        Self {
            name,
            watch_links,
            languages,
            screenshot_links: Vec::new(),
            custom_poster_url: None,
            media_type_hint: None,
            force_save: false,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMovieRequest {
    /// Name, alias, or id of the movie to update
    pub search: String,
    pub new_name: Option<String>,
    pub set_watch_links: Option<BTreeMap<String, String>>,
    /// Replaces the whole language list
    pub languages: Option<Vec<String>>,
    pub add_languages: Vec<String>,
    pub remove_languages: Vec<String>,
    pub custom_poster_url: Option<String>,
    pub add_screenshot_links: Vec<String>,
    pub remove_screenshot_links: Vec<String>,
    pub add_aliases: Vec<String>,
    pub remove_aliases: Vec<String>,
}

/// What a save actually did, so the command layer can surface warnings
/// ("saved, but poster lookup failed") next to the success.
#[derive(Debug, Clone)]
pub struct SaveMovieOutcome {
    pub movie: Movie,
    pub metadata_resolved: bool,
    pub links_shortened: usize,
    pub links_shortening_failed: usize,
}

impl CatalogService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        unshortened_repo: Arc<dyn UnshortenedLinkRepository>,
        resolver: Arc<ResolverService>,
        metadata: Arc<dyn MetadataProvider>,
        shortener: Arc<dyn LinkShortener>,
    ) -> Self {
        Self {
            movie_repo,
            unshortened_repo,
            resolver,
            metadata,
            shortener,
        }
    }

    /// Save a new movie.
    ///
    /// Metadata lookup is retried up to `retry_attempts` times; when every
    /// attempt fails the save errors with `MetadataUnavailable` unless
    /// `force_save` is set. 1080p links (and only those) are shortened
    /// best-effort, with the originals kept in the unshortened-link audit
    /// store.
    pub async fn save_movie(&self, request: SaveMovieRequest) -> AppResult<SaveMovieOutcome> {
        if let Some(existing) = self.resolver.resolve_exact(&request.name)? {
            return Err(AppError::AlreadyCataloged(existing.name));
        }
        if request.languages.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one language is required".to_string(),
            ));
        }
        if request.watch_links.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one watch link is required".to_string(),
            ));
        }

        let details = self.lookup_metadata(&request).await;
        if details.is_none() && !request.force_save {
            return Err(AppError::MetadataUnavailable(format!(
                "no TMDB result for \"{}\"",
                request.name
            )));
        }

        let (watch_links, shortened, failed, originals) =
            self.shorten_watch_links(request.watch_links).await;

        // TMDB title wins over the typed name; TMDB id becomes the record
        // id, otherwise the store assigns one
        let name = details
            .as_ref()
            .and_then(|d| d.title.clone())
            .unwrap_or_else(|| request.name.trim().to_string());
        let id = details
            .as_ref()
            .and_then(|d| d.tmdb_id)
            .map(|id| id.to_string())
            .unwrap_or_default();

        let mut movie = Movie::new(name, request.languages);
        movie.id = id;
        movie.watch_links = watch_links;
        movie.screenshot_links = request.screenshot_links;
        movie.custom_poster_url = request.custom_poster_url;
        movie.tmdb_details = details.clone();

        validate_movie(&movie)?;
        let movie = self.movie_repo.insert(movie)?;

        // Audit rows only for a save that actually landed
        for original in &originals {
            if let Err(err) = self.unshortened_repo.add(&movie.name, original) {
                log::warn!(
                    "failed to archive unshortened link for {}: {}",
                    movie.name,
                    err
                );
            }
        }

        Ok(SaveMovieOutcome {
            movie,
            metadata_resolved: details.is_some(),
            links_shortened: shortened,
            links_shortening_failed: failed,
        })
    }

    /// Partial update of an existing movie, found by name, alias, or id.
    pub fn update_movie(&self, request: UpdateMovieRequest) -> AppResult<Movie> {
        let mut movie = self
            .resolver
            .resolve_exact(&request.search)?
            .ok_or(AppError::NotFound)?;

        if let Some(languages) = &request.languages {
            validate_allowed_languages(languages)?;
            if languages.is_empty() {
                return Err(AppError::InvalidInput(
                    "cannot replace languages with an empty list".to_string(),
                ));
            }
            movie.languages = languages.clone();
        }
        if !request.add_languages.is_empty() {
            validate_allowed_languages(&request.add_languages)?;
            for language in &request.add_languages {
                if !movie.languages.contains(language) {
                    movie.languages.push(language.clone());
                }
            }
        }
        if !request.remove_languages.is_empty() {
            validate_allowed_languages(&request.remove_languages)?;
            let remaining: Vec<String> = movie
                .languages
                .iter()
                .filter(|l| !request.remove_languages.contains(l))
                .cloned()
                .collect();
            if remaining.is_empty() {
                return Err(AppError::InvalidInput(
                    "cannot remove all languages from a movie".to_string(),
                ));
            }
            movie.languages = remaining;
        }

        if let Some(links) = request.set_watch_links {
            movie.watch_links = links;
        }
        if let Some(name) = request.new_name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::InvalidInput(
                    "new name cannot be empty".to_string(),
                ));
            }
            movie.name = name;
        }
        if let Some(poster_url) = request.custom_poster_url {
            movie.custom_poster_url = Some(poster_url);
        }

        for link in request.add_screenshot_links {
            if !movie.screenshot_links.contains(&link) {
                movie.screenshot_links.push(link);
            }
        }
        movie
            .screenshot_links
            .retain(|l| !request.remove_screenshot_links.contains(l));

        for alias in request.add_aliases {
            let alias = alias.trim().to_lowercase();
            if !alias.is_empty() && !movie.aliases.iter().any(|a| a.eq_ignore_ascii_case(&alias)) {
                movie.aliases.push(alias);
            }
        }
        movie
            .aliases
            .retain(|a| !request.remove_aliases.iter().any(|r| a.eq_ignore_ascii_case(r)));

        movie.touch();
        validate_movie(&movie)?;
        self.movie_repo.update(&movie)?;
        Ok(movie)
    }

    /// Remove a movie by exact id
    pub fn delete_movie(&self, id: &str) -> AppResult<()> {
        self.movie_repo.delete(id)
    }

    pub fn get_movie(&self, id: &str) -> AppResult<Option<Movie>> {
        self.movie_repo.get_by_id(id)
    }

    pub fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_all()
    }

    async fn lookup_metadata(&self, request: &SaveMovieRequest) -> Option<TmdbDetails> {
        let attempts = request.retry_attempts.clamp(1, MAX_RETRY_ATTEMPTS);
        for attempt in 1..=attempts {
            match self
                .metadata
                .lookup(&request.name, request.media_type_hint)
                .await
            {
                Ok(Some(details)) => return Some(details),
                Ok(None) => return None,
                Err(err) => {
                    log::warn!(
                        "metadata lookup attempt {}/{} for \"{}\" failed: {}",
                        attempt,
                        attempts,
                        request.name,
                        err
                    );
                }
            }
        }
        None
    }

    /// Shorten 1080p links only; 4k and everything else pass through.
    /// Returns the rewritten map plus the originals of rewritten links,
    /// so the caller can archive them once the save lands.
    async fn shorten_watch_links(
        &self,
        links: BTreeMap<String, String>,
    ) -> (BTreeMap<String, String>, usize, usize, Vec<String>) {
        let mut shortened_count = 0;
        let mut failed_count = 0;
        let mut originals = Vec::new();
        let mut result = BTreeMap::new();

        for (quality, link) in links {
            let eligible = {
                let q = quality.to_lowercase();
                q.contains("1080p") && !q.contains("4k")
            };
            if !eligible {
                result.insert(quality, link);
                continue;
            }

            let short = self.shortener.shorten(&link).await;
            if short != link {
                shortened_count += 1;
                originals.push(link);
            } else {
                failed_count += 1;
            }
            result.insert(quality, short);
        }

        (result, shortened_count, failed_count, originals)
    }
}

fn validate_allowed_languages(languages: &[String]) -> AppResult<()> {
    let invalid: Vec<&str> = languages
        .iter()
        .filter(|l| !ALLOWED_LANGUAGES.contains(&l.as_str()))
        .map(String::as_str)
        .collect();
    if !invalid.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "invalid language(s): {}. Available languages are: {}",
            invalid.join(", "),
            ALLOWED_LANGUAGES.join(", ")
        )));
    }
    Ok(())
}
