//! services/portal/src/bin/portal.rs

use portal_lib::{
    adapters::{
        console::{ConsoleNavigator, ConsoleNotifier},
        gateway::HttpUserGateway,
        storage::FileCredentialStore,
    },
    auth::{restore_session, RedirectDelays, SessionStore, SubmissionController, SubmitOutcome},
    config::Config,
    error::PortalError,
};
use std::sync::Arc;
use std::time::Duration;
use taskhive_core::domain::{LoginForm, SessionStatus};
use taskhive_core::ports::{CredentialStore, UserGateway};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. API base URL: {}", config.api_base_url);

    // --- 2. Initialize Adapters ---
    let gateway = Arc::new(HttpUserGateway::new(&config.api_base_url));
    let credential_store = Arc::new(FileCredentialStore::new(&config.storage_path));
    let notifier = Arc::new(ConsoleNotifier);
    let navigator = Arc::new(ConsoleNavigator);

    // --- 3. Restore a Returning Visitor's Session ---
    let session_store = Arc::new(SessionStore::new(
        Arc::clone(&gateway) as Arc<dyn UserGateway>
    ));
    let had_stored_session = restore_session(&session_store, credential_store.as_ref()).await?;
    if had_stored_session {
        return report_entry_point(&session_store);
    }

    // --- 4. Headless Login for New Sessions ---
    let (Some(email), Some(password)) = (
        config.login_email.clone(),
        config.login_password.clone(),
    ) else {
        info!("No stored session found; set TASKHIVE_EMAIL and TASKHIVE_PASSWORD to sign in");
        return Ok(());
    };

    let delays = RedirectDelays::default();
    let controller = SubmissionController::new(
        gateway,
        Some(credential_store as Arc<dyn CredentialStore>),
        Arc::clone(&session_store),
        notifier,
        navigator,
    )
    .with_redirect_delays(delays);

    let form = LoginForm { email, password };
    match controller.submit_login(&form).await {
        SubmitOutcome::Succeeded => {
            // Let the scheduled redirect and the dispatched user fetch land
            // before the process exits.
            tokio::time::sleep(delays.login + Duration::from_millis(100)).await;
            report_entry_point(&session_store)?;
        }
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                warn!("{field}: {message}");
            }
        }
        // The error notice has already been shown.
        SubmitOutcome::Failed { .. } => {}
    }

    Ok(())
}

/// A returning visitor with a verified account gets the authenticated entry
/// point; everyone else starts at signup.
fn report_entry_point(session_store: &SessionStore) -> Result<(), PortalError> {
    let state = session_store.snapshot();
    match state.status {
        SessionStatus::Succeeded => {
            let user = state
                .user
                .ok_or_else(|| PortalError::Internal("Session succeeded without a user".to_string()))?;
            if user.email_verified {
                info!("Welcome back, {}; entry point is /dashboard", user.username);
            } else {
                info!("Account {} is not verified yet; entry point is /signup", user.username);
            }
        }
        _ => {
            info!(
                "Stored session could not be refreshed ({}); entry point is /signup",
                state.error.unwrap_or_else(|| "no error recorded".to_string())
            );
        }
    }
    Ok(())
}
