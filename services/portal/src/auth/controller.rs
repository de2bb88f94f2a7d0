//! services/portal/src/auth/controller.rs
//!
//! The submission controller for the login, signup, and verification forms.
//! Each submission runs validate -> gateway call -> side effects; every
//! gateway failure is caught here and surfaced as a notice, never propagated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use taskhive_core::domain::{LoginForm, SignupForm, VerificationForm};
use taskhive_core::ports::{CredentialStore, Navigator, Notifier, UserGateway};
use taskhive_core::validation::{
    validate_login, validate_signup, validate_verification, ValidationErrors,
};
use tracing::warn;

use crate::auth::session::SessionStore;

/// Route shown after a successful login.
pub const HOME_ROUTE: &str = "/";
/// Route shown after signup and verification.
pub const LOGIN_ROUTE: &str = "/login";

//=========================================================================================
// Redirect Delays
//=========================================================================================

/// The fixed pauses between a success notice and the scheduled navigation,
/// giving the user time to read the toast.
#[derive(Debug, Clone, Copy)]
pub struct RedirectDelays {
    pub login: Duration,
    pub signup: Duration,
    pub verify: Duration,
}

impl Default for RedirectDelays {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(2000),
            signup: Duration::from_millis(3000),
            verify: Duration::from_millis(2000),
        }
    }
}

//=========================================================================================
// Submission Outcome
//=========================================================================================

/// What a completed submission attempt looked like to the caller.
///
/// Notices have already been shown in the `Succeeded` and `Failed` cases; the
/// outcome only lets the form decide whether to reset its fields.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation blocked the submission; no network call was issued.
    Rejected(ValidationErrors),
    /// The API accepted the submission.
    Succeeded,
    /// The API or the transport rejected the submission.
    Failed { message: String },
}

//=========================================================================================
// SubmissionController
//=========================================================================================

/// Drives one form submission at a time through the gateway and fans out the
/// side effects: storage writes, the session-store fetch, notices, and the
/// delayed navigation.
pub struct SubmissionController {
    gateway: Arc<dyn UserGateway>,
    /// Durable storage may be absent in some environments; the login flow
    /// then skips persistence but still fetches the user.
    credentials: Option<Arc<dyn CredentialStore>>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    delays: RedirectDelays,
    submitting: AtomicBool,
}

impl SubmissionController {
    pub fn new(
        gateway: Arc<dyn UserGateway>,
        credentials: Option<Arc<dyn CredentialStore>>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            credentials,
            session,
            notifier,
            navigator,
            delays: RedirectDelays::default(),
            submitting: AtomicBool::new(false),
        }
    }

    /// Overrides the fixed redirect delays. Intended for tests.
    #[must_use]
    pub fn with_redirect_delays(mut self, delays: RedirectDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Whether a submission is currently in flight. This only mirrors the
    /// submit control's disabled state; it does not mutually exclude a second
    /// submission, and a scheduled redirect outlives it.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Submits the login form.
    ///
    /// On success: persist the token/user-id pair (when storage is present),
    /// dispatch the asynchronous user fetch, show the success notice, and
    /// schedule navigation to `/`. On failure: show the error notice only.
    pub async fn submit_login(&self, form: &LoginForm) -> SubmitOutcome {
        let credentials = match validate_login(form) {
            Ok(credentials) => credentials,
            Err(errors) => return SubmitOutcome::Rejected(errors),
        };

        self.submitting.store(true, Ordering::Release);
        let outcome = match self.gateway.login_user(&credentials).await {
            Ok(session) => {
                if let Some(store) = &self.credentials {
                    // A failed storage write must not fail the login.
                    if let Err(err) = store.save(&session).await {
                        warn!("Failed to persist session credentials: {err}");
                    }
                }

                let session_store = Arc::clone(&self.session);
                let auth = session.clone();
                tokio::spawn(async move {
                    session_store.fetch_user(&auth.user_id, &auth.token).await;
                });

                self.notifier
                    .notify_success("Login successful", "Redirecting to dashboard");
                self.schedule_redirect(HOME_ROUTE, self.delays.login);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.notifier.notify_error("Error", &err.message);
                SubmitOutcome::Failed {
                    message: err.message,
                }
            }
        };
        self.submitting.store(false, Ordering::Release);
        outcome
    }

    /// Submits the signup form. The validated request already carries the
    /// derived calling code and canonical phone number.
    pub async fn submit_signup(&self, form: &SignupForm) -> SubmitOutcome {
        let request = match validate_signup(form) {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Rejected(errors),
        };

        self.submitting.store(true, Ordering::Release);
        let outcome = match self.gateway.create_user(&request).await {
            Ok(()) => {
                self.notifier.notify_success(
                    "Account created",
                    "Check your email to verify your account",
                );
                self.schedule_redirect(LOGIN_ROUTE, self.delays.signup);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.notifier.notify_error("Error", &err.message);
                SubmitOutcome::Failed {
                    message: err.message,
                }
            }
        };
        self.submitting.store(false, Ordering::Release);
        outcome
    }

    /// Submits the verification form with the page's fixed `id` and the
    /// entered code.
    pub async fn submit_verification(&self, form: &VerificationForm) -> SubmitOutcome {
        let request = match validate_verification(form) {
            Ok(request) => request,
            Err(errors) => return SubmitOutcome::Rejected(errors),
        };

        self.submitting.store(true, Ordering::Release);
        let outcome = match self.gateway.verify_user(&request).await {
            Ok(()) => {
                self.notifier
                    .notify_success("Email verified successfully", "Redirecting to dashboard");
                self.schedule_redirect(LOGIN_ROUTE, self.delays.verify);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.notifier.notify_error("Error", &err.message);
                SubmitOutcome::Failed {
                    message: err.message,
                }
            }
        };
        self.submitting.store(false, Ordering::Release);
        outcome
    }

    /// Schedules the post-success navigation: a fire-and-forget task chained
    /// after the response resolved, deliberately not tied to the Submitting
    /// flag (the submit control re-enables before the redirect fires).
    fn schedule_redirect(&self, route: &'static str, delay: Duration) {
        let navigator = Arc::clone(&self.navigator);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(route);
        });
    }
}
