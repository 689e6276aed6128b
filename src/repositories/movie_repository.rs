// src/repositories/movie_repository.rs
//
// Movie persistence over a single JSON file.

use std::path::PathBuf;

use crate::domain::movie::Movie;
use crate::error::{AppError, AppResult};
use crate::repositories::json_collection::JsonCollection;

pub trait MovieRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Movie>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Movie>>;
    /// Insert a movie, assigning an id when the caller left it empty.
    /// Returns the record as persisted.
    fn insert(&self, movie: Movie) -> AppResult<Movie>;
    /// Replace the stored record with the same id. Errors with `NotFound`
    /// when no such record exists.
    fn update(&self, movie: &Movie) -> AppResult<()>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn replace_all(&self, movies: &[Movie]) -> AppResult<()>;
}

pub struct JsonMovieRepository {
    collection: JsonCollection,
}

impl JsonMovieRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Best-effort unique id: one past the highest numeric id already in
    /// the collection. Non-numeric ids (TMDB-assigned or manual edits) are
    /// skipped rather than rejected.
    fn next_id(movies: &[Movie]) -> String {
        let max = movies
            .iter()
            .filter_map(|m| m.id.trim().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }
}

impl MovieRepository for JsonMovieRepository {
    fn list_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.collection.load())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Movie>> {
        let movies: Vec<Movie> = self.collection.load();
        Ok(movies.into_iter().find(|m| m.id == id))
    }

    fn insert(&self, mut movie: Movie) -> AppResult<Movie> {
        let mut movies: Vec<Movie> = self.collection.load();
        if movie.id.trim().is_empty() {
            movie.id = Self::next_id(&movies);
        }
        movies.push(movie.clone());
        self.collection.save(&movies)?;
        Ok(movie)
    }

    fn update(&self, movie: &Movie) -> AppResult<()> {
        let mut movies: Vec<Movie> = self.collection.load();
        let slot = movies
            .iter_mut()
            .find(|m| m.id == movie.id)
            .ok_or(AppError::NotFound)?;
        *slot = movie.clone();
        self.collection.save(&movies)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let movies: Vec<Movie> = self.collection.load();
        let original_len = movies.len();
        let remaining: Vec<Movie> = movies.into_iter().filter(|m| m.id != id).collect();
        if remaining.len() == original_len {
            return Err(AppError::NotFound);
        }
        self.collection.save(&remaining)?;
        Ok(())
    }

    fn replace_all(&self, movies: &[Movie]) -> AppResult<()> {
        self.collection.save(&movies)
    }
}
