//! Integration tests for the signup submission flow.

mod support;

use serde_json::json;
use support::{eventually, harness, settle, NoticeKind};
use taskhive_core::domain::{PhoneField, SessionStatus, SignupForm};
use portal_lib::auth::SubmitOutcome;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signup_form() -> SignupForm {
    SignupForm {
        email: "bee@taskhive.io".to_string(),
        full_name: "Bee Keeper".to_string(),
        username: "beekeeper".to_string(),
        phone: PhoneField {
            country: "US".to_string(),
            number: "(555) 123-4567".to_string(),
        },
        password: "password1".to_string(),
        confirm_password: "password1".to_string(),
        company_name: "Hive Inc".to_string(),
    }
}

#[tokio::test]
async fn test_signup_success_sends_the_transformed_payload() {
    let server = MockServer::start().await;
    // The wire payload carries the derived calling code and the national
    // digits, in the server's field names. confirmPassword is never sent.
    Mock::given(method("POST"))
        .and(path("/user/create"))
        .and(body_json(json!({
            "email": "bee@taskhive.io",
            "username": "beekeeper",
            "password": "password1",
            "fullName": "Bee Keeper",
            "countryCode": "1",
            "phoneNumber": "5551234567",
            "companyName": "Hive Inc"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let outcome = h.controller.submit_signup(&signup_form()).await;

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    let notice = h.notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "Account created");
    assert_eq!(notice.body, "Check your email to verify your account");

    // Signup never logs the user in.
    assert_eq!(h.credentials.saved(), None);
    assert_eq!(h.session.snapshot().status, SessionStatus::Idle);

    assert!(eventually(|| h.navigator.routes() == vec!["/login".to_string()]).await);
}

#[tokio::test]
async fn test_mismatched_passwords_block_the_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/create"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let mut form = signup_form();
    form.confirm_password = "password2".to_string();
    let outcome = h.controller.submit_signup(&form).await;

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected a validation rejection, got {outcome:?}");
    };
    // The mismatch is attached to confirmPassword, not password.
    assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    assert_eq!(errors.get("password"), None);

    assert!(h.notifier.notices().is_empty());
    settle().await;
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_invalid_phone_for_region_blocks_the_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/create"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let mut form = signup_form();
    form.phone.number = "12345".to_string();
    let outcome = h.controller.submit_signup(&form).await;

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected a validation rejection, got {outcome:?}");
    };
    assert_eq!(errors.get("phone.number"), Some("Enter a phone number"));
}

#[tokio::test]
async fn test_signup_failure_surfaces_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/create"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Email already registered"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let outcome = h.controller.submit_signup(&signup_form()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Email already registered".to_string(),
        }
    );
    let notice = h.notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.body, "Email already registered");

    settle().await;
    assert!(h.navigator.routes().is_empty());
}
