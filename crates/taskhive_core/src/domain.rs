//! crates/taskhive_core/src/domain.rs
//!
//! Defines the core data structures for the authentication flow.
//! Form payloads are what the user typed; accepted values are what the
//! validators produce and the gateway sends over the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Form Payloads (pre-validation)
//=========================================================================================

/// Raw login form input, validated into [`Credentials`].
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// The phone field of the signup form: an ISO 3166-1 alpha-2 country
/// selection plus the nationally formatted number the user typed.
#[derive(Debug, Clone, Default)]
pub struct PhoneField {
    pub country: String,
    pub number: String,
}

/// Raw signup form input, validated into [`RegistrationRequest`].
///
/// `confirm_password` is form-local and never sent to the server.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub full_name: String,
    pub username: String,
    pub phone: PhoneField,
    pub password: String,
    pub confirm_password: String,
    pub company_name: String,
}

/// Raw verification form input, validated into [`VerificationRequest`].
/// `id` is supplied by the verification link and is immutable for the
/// life of the form.
#[derive(Debug, Clone, Default)]
pub struct VerificationForm {
    pub id: String,
    pub code: String,
}

//=========================================================================================
// Accepted Values (post-validation, wire shapes)
//=========================================================================================

/// Validated login credentials, constructed per submission and discarded
/// after the request resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated signup payload in the server's field names.
///
/// `country_code` is the numeric calling code derived from the selected
/// country (e.g. `"44"`), `phone_number` the national significant digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub country_code: String,
    pub phone_number: String,
    pub company_name: String,
}

/// Validated email-verification payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    pub id: String,
    #[serde(rename = "emailVerificationOTP")]
    pub email_verification_otp: String,
}

//=========================================================================================
// Session Data
//=========================================================================================

/// The opaque bearer token and user id issued at login success.
///
/// This is both the normalized login response and the record persisted in
/// durable storage; it is never refreshed or expired by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
}

/// Per-user settings as returned by the user resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub theme: String,
    pub notifications: bool,
}

/// One entry of the user's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub user_id: String,
    pub action: String,
    #[serde(default)]
    pub details: Option<String>,
    pub action_type: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// The client-side projection of an authenticated user.
///
/// Owned exclusively by the session store and replaced wholesale on each
/// successful fetch; never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub country_code: String,
    pub phone_number: String,
    pub email_verified: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub settings: Option<UserSettings>,
    #[serde(default)]
    pub activity_log: Vec<ActivityLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

//=========================================================================================
// Session Store State
//=========================================================================================

/// Progress of the current user fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The session store's observable state.
///
/// Invariants: `Succeeded` implies `user` is set; `Failed` implies `error`
/// is set. Transitions per fetch are `* -> Loading -> (Succeeded | Failed)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub status: SessionStatus,
    pub error: Option<String>,
}
