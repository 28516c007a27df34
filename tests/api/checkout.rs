use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with, unreachable_smtp};

fn checkout_body() -> serde_json::Value {
    json!({
        "ownerName": "Jane Doe",
        "email": "jane@pharmacy.com",
        "phone": "555-0100",
        "role": "Owner",
        "pharmacyName": "Main St Pharmacy",
        "pharmacyType": "Independent",
        "npiNumber": "1234567890",
        "state": "TX",
        "locations": "2",
        "currentWebsite": "https://mainstrx.example.com"
    })
}

#[tokio::test]
async fn a_valid_intake_is_accepted_and_appended_to_the_ledger() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/checkout"))
        .and(body_partial_json(json!({
            "email": "jane@pharmacy.com",
            "pharmacyType": "Independent"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.ledger_server)
        .await;

    let response = app.post_json("/api/checkout", &checkout_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json!({"success": true}), body);
}

#[tokio::test]
async fn a_blank_owner_name_is_rejected() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ledger_server)
        .await;

    let mut body = checkout_body();
    body["ownerName"] = json!("   ");

    let response = app.post_json("/api/checkout", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!("All required fields must be filled.", body["error"]);
}

#[tokio::test]
async fn email_failures_are_reported_without_failing_the_request() {
    let app = spawn_app_with(|settings| {
        settings.email.smtp = Some(unreachable_smtp());
    })
    .await;
    Mock::given(method("POST"))
        .and(path("/checkout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.ledger_server)
        .await;

    let response = app.post_json("/api/checkout", &checkout_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json!(true), body["success"]);

    let errors: Vec<String> = body["errors"]
        .as_array()
        .expect("The response should carry delivery errors.")
        .iter()
        .map(|entry| entry.as_str().unwrap_or_default().to_owned())
        .collect();
    assert!(errors.iter().any(|entry| entry.starts_with("notifyEmail:")));
    assert!(errors.iter().any(|entry| entry.starts_with("welcomeEmail:")));
}
