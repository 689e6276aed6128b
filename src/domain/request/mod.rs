pub mod entity;
pub mod invariants;

pub use entity::{MovieRequest, RequestOrigin, RequestStatus};
pub use invariants::validate_request;
