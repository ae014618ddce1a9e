use newsletter_signup::form::SubmissionState;
use newsletter_signup::types::EmailAddress;
use wiremock::{
    matchers::{any, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::spawn_form;

#[tokio::test]
async fn test_signup_works_end_to_end() {
    let mut app = spawn_form().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/challenges/newsletter"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.server)
        .await;

    app.form.update_field("not-an-email".to_string());
    assert!(!app.form.can_submit());

    app.form.update_field("a@b.co".to_string());
    assert!(app.form.can_submit());

    app.form.submit().await;

    let expected = EmailAddress::parse("a@b.co".to_string()).unwrap();
    assert_eq!(app.form.state(), &SubmissionState::Success(expected));
    assert_eq!(app.form.field(), "");

    app.form.reset();
    assert_eq!(app.form.state(), &SubmissionState::Idle);
    assert_eq!(app.form.field(), "");
}

#[tokio::test]
async fn test_signup_blocks_invalid_values_with_a_reason() {
    let mut app = spawn_form().await;

    // The server verifies on drop that no request ever left the controller
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let cases = vec![
        ("", "Email address is required.", "empty value"),
        ("ursula", "Please enter a valid email address.", "missing @"),
        (
            "ursula@gmail",
            "Please enter a valid email address.",
            "missing dot in domain",
        ),
        (
            "ursula le guin@gmail.com",
            "Please enter a valid email address.",
            "whitespace",
        ),
    ];

    for (value, reason, description) in cases {
        app.form.update_field(value.to_string());

        assert!(
            !app.form.can_submit(),
            "The form did not block submission when the value was: {}",
            description
        );
        assert_eq!(
            app.form
                .validation_error()
                .expect("Expected a validation error")
                .to_string(),
            reason
        );
    }
}

#[tokio::test]
async fn test_signup_recovers_from_a_rejected_email() {
    let mut app = spawn_form().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"message": "Email already subscribed"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.server)
        .await;

    app.form.update_field("a@b.co".to_string());
    app.form.submit().await;

    assert_eq!(
        app.form.state(),
        &SubmissionState::Failed("Email already subscribed".to_string())
    );
    // Still editable and resubmittable without any reload
    assert!(app.form.can_submit());

    app.form.submit().await;

    let expected = EmailAddress::parse("a@b.co".to_string()).unwrap();
    assert_eq!(app.form.state(), &SubmissionState::Success(expected));
}
