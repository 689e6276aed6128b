// src/services/resolver_service.rs
//
// Movie Resolver
//
// Maps free-text queries to catalog entries, either by exact resolution
// (name, then alias, then id) or by ranked candidate search.
//
// CRITICAL RULES:
// - Read-only: inspects the movie repository, never mutates it
// - Deterministic: same collection + query -> same result order
// - "Not found" is a value, never an error; only store I/O failures
//   propagate

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::movie::Movie;
use crate::error::AppResult;
use crate::repositories::MovieRepository;

pub struct ResolverService {
    movie_repo: Arc<dyn MovieRepository>,
}

/// Outcome of a combined lookup: exact hit, ranked suggestions, or nothing
#[derive(Debug, Clone)]
pub enum Resolution {
    Exact(Movie),
    Candidates(Vec<Movie>),
    NotFound,
}

impl ResolverService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// Exact resolution. Checks, in order: case-insensitive name equality,
    /// case-insensitive alias equality, id equality. First match wins.
    ///
    /// Ids are strings internally; numeric external input must be coerced
    /// to string by the caller, so a plain equality check suffices here.
    pub fn resolve_exact(&self, query: &str) -> AppResult<Option<Movie>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }
        let needle = query.to_lowercase();
        let movies = self.movie_repo.list_all()?;

        if let Some(movie) = movies.iter().find(|m| m.name.to_lowercase() == needle) {
            return Ok(Some(movie.clone()));
        }
        if let Some(movie) = movies
            .iter()
            .find(|m| m.aliases.iter().any(|a| a.to_lowercase() == needle))
        {
            return Ok(Some(movie.clone()));
        }
        Ok(movies.into_iter().find(|m| m.id == query))
    }

    /// Ranked candidate search.
    ///
    /// The candidate set is the union of movies whose name contains the
    /// query, whose alias contains it, or whose TMDB title contains it
    /// (TMDB title only counts when it differs from the display name).
    ///
    /// Candidates are sorted by a strict tie-break chain:
    ///   1. exact name match first
    ///   2. name starts with the query
    ///   3. earlier first occurrence of the query within the name; alias
    ///      and TMDB-title matches carry no occurrence and sort first
    ///   4. shorter name
    /// The sort is stable, so movies equal under all four rules keep their
    /// input order.
    ///
    /// An empty or whitespace-only query never matches anything.
    pub fn resolve_candidates(&self, query: &str) -> AppResult<Vec<Movie>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let movies = self.movie_repo.list_all()?;
        let mut candidates: Vec<Movie> = movies
            .into_iter()
            .filter(|m| Self::is_candidate(m, &needle))
            .collect();

        candidates.sort_by(|a, b| Self::rank(a, b, &needle));
        Ok(candidates)
    }

    /// Exact resolution with ranked fallback, the shape lookup commands
    /// consume: a single best hit when one exists, suggestions otherwise.
    pub fn resolve(&self, query: &str) -> AppResult<Resolution> {
        if let Some(movie) = self.resolve_exact(query)? {
            return Ok(Resolution::Exact(movie));
        }
        let candidates = self.resolve_candidates(query)?;
        if candidates.is_empty() {
            Ok(Resolution::NotFound)
        } else {
            Ok(Resolution::Candidates(candidates))
        }
    }

    fn is_candidate(movie: &Movie, needle: &str) -> bool {
        let name = movie.name.to_lowercase();
        if name.contains(needle) {
            return true;
        }
        if movie
            .aliases
            .iter()
            .any(|a| a.to_lowercase().contains(needle))
        {
            return true;
        }
        // TMDB title only counts when it differs from the display name,
        // otherwise it would duplicate the name rule
        if let Some(title) = movie.tmdb_title() {
            let title = title.to_lowercase();
            if title != name && title.contains(needle) {
                return true;
            }
        }
        false
    }

    fn rank(a: &Movie, b: &Movie, needle: &str) -> Ordering {
        let a_name = a.name.to_lowercase();
        let b_name = b.name.to_lowercase();

        // Exact matches first
        let a_exact = a_name == needle;
        let b_exact = b_name == needle;
        if a_exact != b_exact {
            return if a_exact { Ordering::Less } else { Ordering::Greater };
        }

        // Starts with the query
        let a_starts = a_name.starts_with(needle);
        let b_starts = b_name.starts_with(needle);
        if a_starts != b_starts {
            return if a_starts { Ordering::Less } else { Ordering::Greater };
        }

        // Earlier occurrence of the query within the name. Alias and
        // TMDB-title matches carry no occurrence in the name and rank as
        // an index of -1 would, ahead of any name substring match.
        let a_idx = a_name.find(needle);
        let b_idx = b_name.find(needle);
        let idx_order = match (a_idx, b_idx) {
            (Some(a_idx), Some(b_idx)) => a_idx.cmp(&b_idx),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if idx_order != Ordering::Equal {
            return idx_order;
        }

        // Shorter names first
        a_name.len().cmp(&b_name.len())
    }
}
