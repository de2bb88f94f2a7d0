//! Shared fixtures and recording test doubles for the flow tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use portal_lib::adapters::gateway::HttpUserGateway;
use portal_lib::auth::{RedirectDelays, SessionStore, SubmissionController};
use serde_json::{json, Value};
use taskhive_core::domain::AuthSession;
use taskhive_core::ports::{CredentialStore, Navigator, Notifier, PortResult, UserGateway};
use url::Url;

/// Redirect delay used by every harness; short enough to keep tests fast.
pub const TEST_REDIRECT_DELAY: Duration = Duration::from_millis(25);

/// A representative `{ user: ... }` payload body for `GET /user/{id}`,
/// including fields this client does not project (they must be ignored).
pub fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "email": "bee@taskhive.io",
        "username": "beekeeper",
        "fullName": "Bee Keeper",
        "companyName": "Hive Inc",
        "countryCode": "1",
        "phoneNumber": "5551234567",
        "emailVerified": true,
        "bio": null,
        "avatar": null,
        "settings": { "id": "s1", "theme": "light", "notifications": true },
        "activityLog": [{
            "id": "a1",
            "userId": id,
            "action": "login",
            "details": null,
            "actionType": "auth",
            "color": "amber",
            "createdAt": "2024-01-01T00:00:00.000Z"
        }],
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z",
        "lastLogin": null,
        "stripe_customer_id": "cus_123",
        "emailVerificationOTP": "000000",
        "userSettingsId": "s1"
    })
}

//=========================================================================================
// Recording Doubles
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// Captures every toast the controller shows.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    fn record(&self, kind: NoticeKind, title: &str, body: &str) {
        self.notices.lock().unwrap().push(Notice {
            kind,
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, title: &str, body: &str) {
        self.record(NoticeKind::Success, title, body);
    }

    fn notify_error(&self, title: &str, body: &str) {
        self.record(NoticeKind::Error, title, body);
    }
}

/// Captures every route transition the controller schedules.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// An in-memory `CredentialStore` standing in for durable storage.
#[derive(Default)]
pub struct MemoryCredentialStore {
    session: Mutex<Option<AuthSession>>,
}

impl MemoryCredentialStore {
    pub fn saved(&self) -> Option<AuthSession> {
        self.session.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn save(&self, session: &AuthSession) -> PortResult<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> PortResult<Option<AuthSession>> {
        Ok(self.session.lock().unwrap().clone())
    }
}

//=========================================================================================
// Harness
//=========================================================================================

/// A fully wired controller with recording collaborators.
pub struct Harness {
    pub controller: Arc<SubmissionController>,
    pub session: Arc<SessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub credentials: Arc<MemoryCredentialStore>,
}

pub fn harness(base_url: &str) -> Harness {
    let url = Url::parse(base_url).expect("harness base url");
    let gateway: Arc<dyn UserGateway> = Arc::new(HttpUserGateway::new(&url));

    let session = Arc::new(SessionStore::new(Arc::clone(&gateway)));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let credentials = Arc::new(MemoryCredentialStore::default());

    let controller = SubmissionController::new(
        gateway,
        Some(Arc::clone(&credentials) as Arc<dyn CredentialStore>),
        Arc::clone(&session),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    )
    .with_redirect_delays(RedirectDelays {
        login: TEST_REDIRECT_DELAY,
        signup: TEST_REDIRECT_DELAY,
        verify: TEST_REDIRECT_DELAY,
    });

    Harness {
        controller: Arc::new(controller),
        session,
        notifier,
        navigator,
        credentials,
    }
}

/// Polls `cond` until it holds or roughly a second has passed.
pub async fn eventually(cond: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}

/// Long enough for any scheduled redirect in a harness to have fired.
pub async fn settle() {
    tokio::time::sleep(TEST_REDIRECT_DELAY * 4).await;
}
