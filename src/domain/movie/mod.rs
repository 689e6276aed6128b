pub mod entity;
pub mod invariants;

pub use entity::{Genre, MediaType, Movie, TmdbDetails};
pub use invariants::validate_movie;
