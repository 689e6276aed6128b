use super::entity::{MovieRequest, RequestStatus};
use crate::domain::{DomainError, DomainResult};

/// Validates all MovieRequest invariants
pub fn validate_request(request: &MovieRequest) -> DomainResult<()> {
    if request.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Request id cannot be empty".to_string(),
        ));
    }
    if request.movie_name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Requested movie name cannot be empty".to_string(),
        ));
    }
    if request.requested_by.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Request must carry a requester id".to_string(),
        ));
    }
    validate_fulfillment_fields(request)?;
    Ok(())
}

/// Fulfillment stamps only appear on fulfilled requests
fn validate_fulfillment_fields(request: &MovieRequest) -> DomainResult<()> {
    if request.status != RequestStatus::Fulfilled
        && (request.fulfilled_at.is_some() || request.fulfilled_with.is_some())
    {
        return Err(DomainError::InvariantViolation(format!(
            "Request {} carries fulfillment stamps but is {}",
            request.id, request.status
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Request domain:
///
/// 1. Id is globally unique and immutable
/// 2. Pending is the only initial state
/// 3. Fulfilled and Rejected are terminal
/// 4. At most one pending request per case-insensitive movie name
///    (enforced at creation by the lifecycle service)
/// 5. Fulfillment stamps appear only on fulfilled requests
