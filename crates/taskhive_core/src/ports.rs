//! crates/taskhive_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the authentication flow.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the HTTP
//! API, durable storage, or the UI's toast and routing facilities.

use async_trait::async_trait;

use crate::domain::{AuthSession, Credentials, RegistrationRequest, User, VerificationRequest};

//=========================================================================================
// Gateway Error and Result Types
//=========================================================================================

/// A normalized failure from the remote user-management API.
///
/// `message` is the server-supplied message when one was present, otherwise a
/// generic substitute. `status_code` is `None` for transport failures that
/// never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    pub status_code: Option<u16>,
}

impl GatewayError {
    /// Failure for a response with a status other than 200.
    #[must_use]
    pub fn from_status(status_code: u16, message: Option<String>) -> Self {
        Self {
            message: message.unwrap_or_else(|| "An error occurred".to_string()),
            status_code: Some(status_code),
        }
    }

    /// Failure for a transport error or a malformed response.
    #[must_use]
    pub fn unexpected() -> Self {
        Self {
            message: "An unexpected error occurred".to_string(),
            status_code: None,
        }
    }
}

/// A convenience type alias for `Result<T, GatewayError>`.
pub type GatewayResult<T> = Result<T, GatewayError>;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for non-gateway port operations (durable storage).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The HTTP boundary to the remote user-management API.
///
/// Each method issues exactly one outbound call and returns a tagged outcome;
/// implementations never panic and never let a raw transport error escape.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Creates a new user account.
    async fn create_user(&self, request: &RegistrationRequest) -> GatewayResult<()>;

    /// Authenticates and returns the issued token plus the user's id.
    async fn login_user(&self, credentials: &Credentials) -> GatewayResult<AuthSession>;

    /// Confirms an email verification code.
    async fn verify_user(&self, request: &VerificationRequest) -> GatewayResult<()>;

    /// Fetches the full user record by id, authenticated with the token.
    async fn fetch_user(&self, user_id: &str, token: &str) -> GatewayResult<User>;
}

/// Durable client-side storage for the session token and user id.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persists the pair written at login success.
    async fn save(&self, session: &AuthSession) -> PortResult<()>;

    /// Loads the stored pair, `None` when no complete session is stored.
    async fn load(&self) -> PortResult<Option<AuthSession>>;
}

/// Transient user-facing notices (toasts). A pure side-effect sink.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, title: &str, body: &str);
    fn notify_error(&self, title: &str, body: &str);
}

/// Route transitions. A pure side-effect sink.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}
