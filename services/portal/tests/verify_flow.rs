//! Integration tests for the email-verification submission flow.

mod support;

use serde_json::json;
use support::{eventually, harness, settle, NoticeKind};
use taskhive_core::domain::VerificationForm;
use portal_lib::auth::SubmitOutcome;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn verification_form() -> VerificationForm {
    VerificationForm {
        id: "abc123".to_string(),
        code: "123456".to_string(),
    }
}

#[tokio::test]
async fn test_verification_success_notifies_and_schedules_login_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/user/verify-email"))
        .and(body_json(json!({"id": "abc123", "emailVerificationOTP": "123456"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"verified": true})))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let outcome = h.controller.submit_verification(&verification_form()).await;

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    let notice = h.notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Email verified successfully");

    assert!(eventually(|| h.navigator.routes() == vec!["/login".to_string()]).await);
}

#[tokio::test]
async fn test_wrong_length_code_is_rejected_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/user/verify-email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    for code in ["12345", "1234567", ""] {
        let form = VerificationForm {
            id: "abc123".to_string(),
            code: code.to_string(),
        };
        let outcome = h.controller.submit_verification(&form).await;
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected a validation rejection for {code:?}");
        };
        assert_eq!(
            errors.get("emailVerificationOTP"),
            Some("Enter a valid 6-digit code")
        );
    }
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_verification_failure_surfaces_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/user/verify-email"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid verification code"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let outcome = h.controller.submit_verification(&verification_form()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Invalid verification code".to_string(),
        }
    );
    let notice = h.notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.body, "Invalid verification code");

    settle().await;
    assert!(h.navigator.routes().is_empty());
}
