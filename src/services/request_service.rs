// src/services/request_service.rs
//
// Request Lifecycle Manager
//
// State machine: pending -> fulfilled, pending -> rejected. Both end
// states are terminal. Rejection is destructive: the record is removed
// from the collection, not flipped.
//
// CRITICAL RULES:
// - At most one PENDING request per case-insensitive movie name,
//   compared exactly (not by substring) at creation time
// - Fulfillment matching is substring-based, in either direction
// - Notification is advisory: a notifier failure never rolls back a
//   state change, and one requester's failure never blocks the others

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::movie::Movie;
use crate::domain::request::{validate_request, MovieRequest, RequestOrigin, RequestStatus};
use crate::error::{AppError, AppResult};
use crate::integrations::notifier::{NotificationEvent, Notifier};
use crate::repositories::RequestRepository;
use crate::services::resolver_service::ResolverService;

pub struct RequestService {
    request_repo: Arc<dyn RequestRepository>,
    resolver: Arc<ResolverService>,
    notifier: Arc<dyn Notifier>,
    /// Channel where new requests are announced to admins, when configured
    global_request_channel_id: Option<String>,
}

/// Result of the stale-request sweep, for audit display
#[derive(Debug, Clone)]
pub struct PurgeReport {
    pub purged_count: usize,
    pub purged: Vec<MovieRequest>,
}

impl RequestService {
    pub fn new(
        request_repo: Arc<dyn RequestRepository>,
        resolver: Arc<ResolverService>,
        notifier: Arc<dyn Notifier>,
        global_request_channel_id: Option<String>,
    ) -> Self {
        Self {
            request_repo,
            resolver,
            notifier,
            global_request_channel_id,
        }
    }

    /// Create a new pending request.
    ///
    /// Fails with `AlreadyCataloged` when the title resolves exactly to an
    /// existing movie, and with `DuplicateRequest` when another PENDING
    /// request carries the same name (case-insensitive exact comparison).
    /// Requests in terminal states never block a new one.
    pub async fn create(
        &self,
        movie_name: &str,
        requested_by: &str,
        origin: RequestOrigin,
    ) -> AppResult<MovieRequest> {
        let movie_name = movie_name.trim();
        if movie_name.is_empty() {
            return Err(AppError::InvalidInput(
                "movie name cannot be empty".to_string(),
            ));
        }
        if let Some(existing) = self.resolver.resolve_exact(movie_name)? {
            return Err(AppError::AlreadyCataloged(existing.name));
        }

        let needle = movie_name.to_lowercase();
        let requests = self.request_repo.list_all()?;
        if let Some(duplicate) = requests
            .iter()
            .find(|r| r.is_pending() && r.movie_name.to_lowercase() == needle)
        {
            return Err(AppError::DuplicateRequest {
                movie_name: duplicate.movie_name.clone(),
                requested_by: duplicate.requested_by.clone(),
            });
        }

        let request = MovieRequest::new(
            movie_name.to_string(),
            requested_by.to_string(),
            origin,
        );
        validate_request(&request)?;
        let request = self.request_repo.insert(request)?;

        // Advisory admin announcement; failure never rolls back creation
        if let Some(channel_id) = &self.global_request_channel_id {
            if let Err(err) = self
                .notifier
                .notify_channel(channel_id, NotificationEvent::RequestSubmitted(request.clone()))
                .await
            {
                log::warn!(
                    "failed to announce request {} to channel {}: {}",
                    request.id,
                    channel_id,
                    err
                );
            }
        }

        Ok(request)
    }

    /// Reject a pending request, removing it from the collection.
    ///
    /// Returns the pre-removal snapshot so the caller can display it.
    pub async fn reject(&self, request_id: &str, rejected_by: &str) -> AppResult<MovieRequest> {
        let request = self
            .request_repo
            .get_by_id(request_id)?
            .ok_or(AppError::NotFound)?;
        if !request.is_pending() {
            return Err(AppError::AlreadyProcessed {
                id: request.id,
                status: request.status.to_string(),
            });
        }

        self.request_repo.remove(request_id)?;
        log::debug!("request {} rejected by {}", request_id, rejected_by);

        if let Err(err) = self
            .notifier
            .notify_user(
                &request.requested_by,
                NotificationEvent::RequestRejected(request.clone()),
            )
            .await
        {
            log::warn!(
                "failed to notify {} about rejected request {}: {}",
                request.requested_by,
                request.id,
                err
            );
        }

        Ok(request)
    }

    /// Fulfill every pending request matching a newly saved movie.
    ///
    /// A request matches when its name case-insensitively contains the
    /// movie name or vice versa ("dune" matches a saved "Dune Part Two",
    /// "dune part two extended" matches a saved "Dune Part Two"). All
    /// matches flip to fulfilled in one persisted write; requester
    /// notifications are fanned out afterwards with per-requester failure
    /// isolation.
    pub async fn fulfill_matching(&self, movie: &Movie) -> AppResult<Vec<MovieRequest>> {
        let movie_name = movie.name.to_lowercase();
        let mut requests = self.request_repo.list_all()?;
        let mut fulfilled = Vec::new();

        for request in requests.iter_mut() {
            if !request.is_pending() {
                continue;
            }
            let requested = request.movie_name.to_lowercase();
            if requested.contains(&movie_name) || movie_name.contains(&requested) {
                request.fulfill(movie.name.clone())?;
                fulfilled.push(request.clone());
            }
        }

        if fulfilled.is_empty() {
            return Ok(fulfilled);
        }
        self.request_repo.replace_all(&requests)?;

        for request in &fulfilled {
            if let Err(err) = self
                .notifier
                .notify_user(
                    &request.requested_by,
                    NotificationEvent::RequestFulfilled {
                        request: request.clone(),
                        movie: movie.clone(),
                    },
                )
                .await
            {
                log::warn!(
                    "failed to notify {} about fulfilled request {}: {}",
                    request.requested_by,
                    request.id,
                    err
                );
            }
        }

        Ok(fulfilled)
    }

    pub fn list_pending(&self) -> AppResult<Vec<MovieRequest>> {
        Ok(self
            .request_repo
            .list_all()?
            .into_iter()
            .filter(|r| r.is_pending())
            .collect())
    }

    pub fn list_all(&self) -> AppResult<Vec<MovieRequest>> {
        self.request_repo.list_all()
    }

    pub fn get(&self, request_id: &str) -> AppResult<Option<MovieRequest>> {
        self.request_repo.get_by_id(request_id)
    }

    /// Remove non-pending requests older than `max_age_days`, measured
    /// from `requested_at`. Pending requests are never purged by age.
    pub fn purge_stale(&self, max_age_days: i64) -> AppResult<PurgeReport> {
        let cutoff = Utc::now() - Duration::days(max_age_days);
        let requests = self.request_repo.list_all()?;

        let (purged, kept): (Vec<MovieRequest>, Vec<MovieRequest>) = requests
            .into_iter()
            .partition(|r| r.status != RequestStatus::Pending && r.requested_at < cutoff);

        if !purged.is_empty() {
            self.request_repo.replace_all(&kept)?;
        }

        Ok(PurgeReport {
            purged_count: purged.len(),
            purged,
        })
    }
}
