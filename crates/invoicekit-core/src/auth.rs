//! Auth-state events
//!
//! Provides:
//! - Event types for sign-in and sign-out
//! - A dispatcher that fans events out to every subscriber

use crate::data::User;
use tokio::sync::broadcast;

/// Auth-state change
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// A session was established for this user
    SignedIn(User),
    /// The current session ended
    SignedOut,
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthEvent::SignedIn(user) => write!(f, "Signed in as {}", user.email),
            AuthEvent::SignedOut => write!(f, "Signed out"),
        }
    }
}

/// Publishes auth-state changes to subscribers
#[derive(Clone)]
pub struct AuthDispatcher {
    tx: broadcast::Sender<AuthEvent>,
}

impl AuthDispatcher {
    /// Create a dispatcher holding up to `buffer_size` undelivered events.
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.tx.subscribe()
    }

    /// Publish an event, returning how many subscribers received it.
    ///
    /// Having no subscribers is not an error.
    pub fn publish(&self, event: AuthEvent) -> usize {
        tracing::debug!(%event, "auth state changed");
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AuthDispatcher {
    fn default() -> Self {
        Self::new(16)
    }
}
