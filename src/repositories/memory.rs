// src/repositories/memory.rs
//
// In-memory repository implementations conforming to the same contracts
// as the JSON-backed ones. Service tests substitute these for the file
// store; they are also useful for embedding the core without a data
// directory.

use std::sync::Mutex;

use crate::domain::movie::Movie;
use crate::domain::request::MovieRequest;
use crate::error::{AppError, AppResult};
use crate::repositories::{MovieRepository, RequestRepository};

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Mutex<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn list_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.lock().unwrap().clone())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Movie>> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    fn insert(&self, mut movie: Movie) -> AppResult<Movie> {
        let mut movies = self.movies.lock().unwrap();
        if movie.id.trim().is_empty() {
            let max = movies
                .iter()
                .filter_map(|m| m.id.trim().parse::<u64>().ok())
                .max()
                .unwrap_or(0);
            movie.id = (max + 1).to_string();
        }
        movies.push(movie.clone());
        Ok(movie)
    }

    fn update(&self, movie: &Movie) -> AppResult<()> {
        let mut movies = self.movies.lock().unwrap();
        let slot = movies
            .iter_mut()
            .find(|m| m.id == movie.id)
            .ok_or(AppError::NotFound)?;
        *slot = movie.clone();
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut movies = self.movies.lock().unwrap();
        let original_len = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() == original_len {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn replace_all(&self, replacement: &[Movie]) -> AppResult<()> {
        *self.movies.lock().unwrap() = replacement.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRequestRepository {
    requests: Mutex<Vec<MovieRequest>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(requests: Vec<MovieRequest>) -> Self {
        Self {
            requests: Mutex::new(requests),
        }
    }
}

impl RequestRepository for InMemoryRequestRepository {
    fn list_all(&self) -> AppResult<Vec<MovieRequest>> {
        Ok(self.requests.lock().unwrap().clone())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<MovieRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    fn insert(&self, request: MovieRequest) -> AppResult<MovieRequest> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    fn update(&self, request: &MovieRequest) -> AppResult<()> {
        let mut requests = self.requests.lock().unwrap();
        let slot = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(AppError::NotFound)?;
        *slot = request.clone();
        Ok(())
    }

    fn remove(&self, id: &str) -> AppResult<()> {
        let mut requests = self.requests.lock().unwrap();
        let original_len = requests.len();
        requests.retain(|r| r.id != id);
        if requests.len() == original_len {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn replace_all(&self, replacement: &[MovieRequest]) -> AppResult<()> {
        *self.requests.lock().unwrap() = replacement.to_vec();
        Ok(())
    }
}
