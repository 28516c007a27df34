use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn onboarding_body() -> serde_json::Value {
    json!({
        "businessLegalName": "Main St Pharmacy LLC",
        "address": "100 Main St",
        "city": "Austin",
        "state": "TX",
        "zip": "78701",
        "phone": "555-0100",
        "deaNumber": "AB1234567",
        "stateLicenseNumber": "TX-99881",
        "preferredDomain": "mainstrx",
        "storeName": "Main St Pharmacy",
        "tagline": "Your neighborhood pharmacy",
        "primaryColor": "#2563eb",
        "template": "classic",
        "servicesOffered": ["Delivery", "Vaccinations"],
        "operatingHours": "Mon-Fri 9-6",
        "acceptedInsurance": "Most major plans",
        "specialNotes": ""
    })
}

#[tokio::test]
async fn a_valid_submission_is_accepted_without_touching_the_ledger() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ledger_server)
        .await;

    let response = app.post_json("/api/onboarding", &onboarding_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json!({"success": true}), body);
}

#[tokio::test]
async fn a_submission_without_services_is_rejected() {
    let app = spawn_app().await;

    let mut body = onboarding_body();
    body["servicesOffered"] = json!([]);

    let response = app.post_json("/api/onboarding", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!("All required fields must be filled.", body["error"]);
}
