use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// A user's ask for a title not yet cataloged, tracked through a
/// pending -> fulfilled/rejected lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRequest {
    /// Globally unique identifier (generated, not derived)
    pub id: String,

    /// Requested title as free text; not necessarily a cataloged name
    #[serde(rename = "movieName")]
    pub movie_name: String,

    /// Opaque user identifier of the requester
    #[serde(rename = "requestedBy")]
    pub requested_by: String,

    #[serde(rename = "requestedAt")]
    pub requested_at: DateTime<Utc>,

    /// Where the request came from
    #[serde(flatten)]
    pub origin: RequestOrigin,

    pub status: RequestStatus,

    #[serde(default, rename = "fulfilledAt")]
    pub fulfilled_at: Option<DateTime<Utc>>,

    /// Name of the catalog entry that fulfilled this request
    #[serde(default, rename = "fulfilledWith")]
    pub fulfilled_with: Option<String>,

    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Origin context of a request: a guild, or a direct/private conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestOrigin {
    Guild {
        #[serde(rename = "guildId")]
        guild_id: String,
        #[serde(rename = "guildName")]
        guild_name: String,
    },
    Direct {
        /// Sentinel, always `true` when present
        #[serde(rename = "directMessage")]
        direct_message: bool,
    },
}

impl RequestOrigin {
    pub fn guild(guild_id: impl Into<String>, guild_name: impl Into<String>) -> Self {
        RequestOrigin::Guild {
            guild_id: guild_id.into(),
            guild_name: guild_name.into(),
        }
    }

    pub fn direct() -> Self {
        RequestOrigin::Direct {
            direct_message: true,
        }
    }
}

/// Request lifecycle state.
///
/// `Pending` is the only initial state. `Fulfilled` and `Rejected` are
/// terminal; there is no transition out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Fulfilled,
    Rejected,
}

impl MovieRequest {
    /// Create a new pending request with a fresh unique id
    pub fn new(movie_name: String, requested_by: String, origin: RequestOrigin) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            movie_name,
            requested_by,
            requested_at: Utc::now(),
            origin,
            status: RequestStatus::Pending,
            fulfilled_at: None,
            fulfilled_with: None,
            updated_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Transition pending -> fulfilled, stamping the fulfillment time and
    /// the name of the catalog entry that satisfied it.
    pub fn fulfill(&mut self, fulfilled_with: String) -> DomainResult<()> {
        if !self.is_pending() {
            return Err(DomainError::InvalidStateTransition(format!(
                "cannot fulfill request {} in state {}",
                self.id, self.status
            )));
        }
        let now = Utc::now();
        self.status = RequestStatus::Fulfilled;
        self.fulfilled_at = Some(now);
        self.fulfilled_with = Some(fulfilled_with);
        self.updated_at = Some(now);
        Ok(())
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Fulfilled => write!(f, "fulfilled"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_pending() {
        let request = MovieRequest::new(
            "Dune".to_string(),
            "user1".to_string(),
            RequestOrigin::direct(),
        );
        assert!(request.is_pending());
        assert!(!request.id.is_empty());
    }

    #[test]
    fn test_fulfill_pending() {
        let mut request = MovieRequest::new(
            "Dune".to_string(),
            "user1".to_string(),
            RequestOrigin::guild("g1", "Movie Server"),
        );
        request.fulfill("Dune".to_string()).unwrap();
        assert_eq!(request.status, RequestStatus::Fulfilled);
        assert_eq!(request.fulfilled_with.as_deref(), Some("Dune"));
        assert!(request.fulfilled_at.is_some());
    }

    #[test]
    fn test_fulfill_is_terminal() {
        let mut request = MovieRequest::new(
            "Dune".to_string(),
            "user1".to_string(),
            RequestOrigin::direct(),
        );
        request.fulfill("Dune".to_string()).unwrap();
        assert!(request.fulfill("Dune Part Two".to_string()).is_err());
    }
}
