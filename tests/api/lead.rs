use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn lead_body() -> serde_json::Value {
    json!({
        "pharmacyName": "Main St Pharmacy",
        "contactName": "Jane Doe",
        "email": "JANE@Pharmacy.com",
        "phone": "555-0100",
        "state": "TX",
        "locations": "1",
        "challenge": "No online presence"
    })
}

#[tokio::test]
async fn a_valid_lead_is_accepted_and_appended_to_the_ledger() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/lead"))
        .and(body_partial_json(json!({
            "email": "jane@pharmacy.com",
            "pharmacyName": "Main St Pharmacy"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.ledger_server)
        .await;

    let response = app.post_json("/api/lead", &lead_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json!({"success": true}), body);
}

#[tokio::test]
async fn a_repeated_submission_within_the_cooldown_is_rejected() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/lead"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.ledger_server)
        .await;

    let first = app.post_json("/api/lead", &lead_body()).await;
    assert_eq!(200, first.status().as_u16());

    let second = app.post_json("/api/lead", &lead_body()).await;

    assert_eq!(429, second.status().as_u16());
    let body: serde_json::Value = second.json().await.expect("Failed to parse body.");
    assert_eq!(
        json!({
            "success": false,
            "error": "You've already submitted recently. Please try again later."
        }),
        body
    );
}

#[tokio::test]
async fn leads_with_missing_required_fields_are_rejected() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ledger_server)
        .await;

    for field in [
        "pharmacyName",
        "contactName",
        "email",
        "state",
        "locations",
        "challenge",
    ] {
        let mut body = lead_body();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post_json("/api/lead", &body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "a payload without `{field}` was not rejected"
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
        assert_eq!("All required fields must be filled.", body["error"]);
    }
}

#[tokio::test]
async fn a_lead_with_a_malformed_email_is_rejected() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ledger_server)
        .await;

    let mut body = lead_body();
    body["email"] = json!("jane pharmacy.com");

    let response = app.post_json("/api/lead", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!("Please enter a valid email address.", body["error"]);
}

#[tokio::test]
async fn a_malformed_body_gets_the_generic_failure_envelope() {
    let app = spawn_app().await;

    let response = app.post_raw("/api/lead", "{not json").await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(
        json!({
            "success": false,
            "error": "Something went wrong. Please try again."
        }),
        body
    );
}
