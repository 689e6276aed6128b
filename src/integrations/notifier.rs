// src/integrations/notifier.rs
//
// Notification boundary. The chat gateway implements this trait; the core
// only hands over structured events and never formats user-facing text.

use async_trait::async_trait;

use crate::domain::movie::Movie;
use crate::domain::request::MovieRequest;
use crate::error::AppResult;

/// Structured notification payload. Rendering (embeds, buttons, copy) is
/// the command layer's job.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    /// A new request was submitted and admins should review it
    RequestSubmitted(MovieRequest),
    /// A requester's pending request was rejected
    RequestRejected(MovieRequest),
    /// A requester's pending request was fulfilled by a new catalog entry
    RequestFulfilled {
        request: MovieRequest,
        movie: Movie,
    },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Direct-message a user. Fire-and-forget from the core's perspective.
    async fn notify_user(&self, user_id: &str, event: NotificationEvent) -> AppResult<()>;

    /// Post to a channel. Fire-and-forget from the core's perspective.
    async fn notify_channel(&self, channel_id: &str, event: NotificationEvent) -> AppResult<()>;
}

/// Notifier that drops every event. Used when no gateway is wired up.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify_user(&self, _user_id: &str, _event: NotificationEvent) -> AppResult<()> {
        Ok(())
    }

    async fn notify_channel(&self, _channel_id: &str, _event: NotificationEvent) -> AppResult<()> {
        Ok(())
    }
}
