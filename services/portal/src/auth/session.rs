//! services/portal/src/auth/session.rs
//!
//! The process-wide cache of the authenticated user. An explicit, injectable
//! store (constructed once at startup, no module-level singleton) whose state
//! is observable through a watch channel.

use std::sync::Arc;

use taskhive_core::domain::{SessionState, SessionStatus};
use taskhive_core::ports::{CredentialStore, PortResult, UserGateway};
use tokio::sync::watch;
use tracing::debug;

//=========================================================================================
// SessionStore
//=========================================================================================

/// Holds the single "current user" value, driven by `fetch_user`.
///
/// Overlapping fetches are not de-duplicated or cancelled: a second dispatch
/// re-enters `Loading` and whichever resolves last wins.
pub struct SessionStore {
    gateway: Arc<dyn UserGateway>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Creates a new store in the `Idle` state.
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { gateway, state }
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// The current state, cloned.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Fetches the user record keyed by id and token.
    ///
    /// The status flips to `Loading` synchronously, before any network I/O.
    /// On success the full `User` record replaces the previous one and the
    /// status becomes `Succeeded`; on failure the error message is stored and
    /// the status becomes `Failed`.
    pub async fn fetch_user(&self, user_id: &str, token: &str) {
        self.state.send_modify(|state| {
            state.status = SessionStatus::Loading;
        });

        match self.gateway.fetch_user(user_id, token).await {
            Ok(user) => {
                debug!("Fetched user record for {user_id}");
                self.state.send_modify(|state| {
                    state.status = SessionStatus::Succeeded;
                    state.user = Some(user);
                    state.error = None;
                });
            }
            Err(err) => {
                debug!("User fetch for {user_id} failed: {err}");
                self.state.send_modify(|state| {
                    state.status = SessionStatus::Failed;
                    state.error = Some(err.message);
                });
            }
        }
    }
}

//=========================================================================================
// Application-start Bootstrap
//=========================================================================================

/// Restores a returning visitor's session from durable storage.
///
/// Reads the persisted token/user-id pair; when both are present, dispatches
/// the user fetch. Returns whether a stored session existed.
pub async fn restore_session(
    store: &SessionStore,
    credentials: &dyn CredentialStore,
) -> PortResult<bool> {
    match credentials.load().await? {
        Some(session) => {
            store.fetch_user(&session.user_id, &session.token).await;
            Ok(true)
        }
        None => Ok(false),
    }
}
