use std::time::Duration;

use claims::{assert_err, assert_ok};

use serde_json::json;

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use registration_form::error::SubmitError;
use registration_form::form::{Field, SubmissionState, SUBMISSION_FAILED};

use crate::helpers::{Registrant, TestForm};

#[tokio::test]
async fn register_posts_valid_form() {
    let mut app = TestForm::spawn().await;

    Mock::given(path("/api/registrations"))
        .and(method("POST"))
        .and(body_json(json!({
            "givenName": "Ana",
            "familyName": "Popescu",
            "age": 25,
            "fiscalCode": "RSSMRA85M01H501Z",
            "email": "a@b.com",
            "phone": "+1 555-123-4567",
        })))
        .respond_with(ResponseTemplate::new(201))
        // Exactly one request per submit
        .expect(1)
        .mount(&app.api_server)
        .await;

    app.fill(&Registrant::valid());

    assert_ok!(app.form.submit().await);
    assert_eq!(SubmissionState::Succeeded, app.form.state());
}

#[tokio::test]
async fn register_sends_nothing_for_missing_data() {
    let mut app = TestForm::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;

    for field in Field::ALL {
        app.form.reset();
        app.fill(&Registrant::valid().without(field));

        let result = app.form.submit().await;

        assert!(
            matches!(result, Err(SubmitError::Invalid(ref e)) if e.field == field),
            "Form did not fail when {} was missing",
            field
        );
        assert!(app.form.is_touched(field));
        assert_eq!(
            "Questo campo è obbligatorio",
            app.form.error_message_for(field)
        );
        assert_eq!(SubmissionState::Idle, app.form.state());
    }
}

#[tokio::test]
async fn register_sends_nothing_for_malformed_data() {
    let mut app = TestForm::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;

    let test_cases = vec![
        ("under age", Field::Age, "17"),
        ("over age", Field::Age, "121"),
        ("short fiscal code", Field::FiscalCode, "RSSMRA85M01H501"),
        ("lowercase bad fiscal code", Field::FiscalCode, "rssmr185m01h501z"),
        ("malformed email", Field::Email, "bad email address"),
        ("malformed phone", Field::Phone, "55-12"),
        ("short name", Field::GivenName, "A"),
    ];

    for (desc, field, value) in test_cases {
        app.form.reset();
        app.fill(&Registrant::valid().with(field, value));

        assert_err!(app.form.submit().await, "Form did not fail for {}", desc);
        assert_ne!("", app.form.error_message_for(field), "No message for {}", desc);
    }
}

#[tokio::test]
async fn register_accepts_boundary_ages_and_lowercase_fiscal_code() {
    let mut app = TestForm::spawn().await;

    Mock::given(path("/api/registrations"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&app.api_server)
        .await;

    let registrants = vec![
        Registrant::valid().with(Field::Age, "18"),
        Registrant::valid().with(Field::Age, "120"),
        Registrant::valid().with(Field::FiscalCode, "rssmra85m01h501z"),
    ];

    for registrant in registrants {
        app.fill(&registrant);
        assert_ok!(app.form.submit().await);
    }
}

#[tokio::test]
async fn register_clears_form_on_success() {
    let mut app = TestForm::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.api_server)
        .await;

    app.fill(&Registrant::valid());
    assert_ok!(app.form.submit().await);

    for field in Field::ALL {
        assert_eq!("", app.form.value(field));
        assert_eq!("", app.form.error_message_for(field));
    }
}

#[tokio::test]
async fn register_reports_server_failure_and_keeps_values() {
    let mut app = TestForm::spawn().await;

    Mock::given(path("/api/registrations"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    app.fill(&Registrant::valid());

    let result = app.form.submit().await;

    assert!(matches!(result, Err(SubmitError::Submission(_))));
    assert_eq!(
        SubmissionState::Failed(SUBMISSION_FAILED.to_string()),
        app.form.state()
    );
    assert_eq!("Popescu", app.form.value(Field::FamilyName));
}

#[tokio::test]
async fn register_returns_to_idle_after_display_window() {
    let display_window = Duration::from_millis(100);
    let mut app = TestForm::spawn_with_display_window(display_window).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.api_server)
        .await;

    app.fill(&Registrant::valid());
    assert_err!(app.form.submit().await);

    let mut state = app.form.subscribe();
    tokio::time::timeout(Duration::from_secs(5), state.changed())
        .await
        .expect("State never returned to idle")
        .expect("State sender dropped");

    assert_eq!(SubmissionState::Idle, app.form.state());
}
