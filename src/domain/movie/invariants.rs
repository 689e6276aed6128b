use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
/// These are the absolute rules that must hold for a Movie to be valid
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_name(&movie.name)?;
    validate_languages(&movie.languages)?;
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// At least one language must be present
fn validate_languages(languages: &[String]) -> DomainResult<()> {
    if languages.iter().all(|l| l.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(
            "Movie must have at least one language".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Name cannot be empty
/// 2. Languages are non-empty at creation
/// 3. Identity is immutable after creation
/// 4. External metadata is entirely optional
/// 5. Added timestamp never changes
