use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

fn preferences_body() -> serde_json::Value {
    json!({
        "email": "Owner@Pharmacy.com",
        "storeName": "My Pharmacy",
        "preferredDomain": "My Pharmacy!",
        "tagline": "Care you can trust",
        "template": "modern",
        "primaryColor": "#2563eb",
        "servicesOffered": ["Delivery", "Vaccinations"],
        "operatingHours": "Mon-Sat 8-8",
        "specialNotes": ""
    })
}

#[tokio::test]
async fn saved_preferences_land_in_the_ledger_with_a_slugged_domain() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/waitlist-onboarding"))
        .and(body_partial_json(json!({
            "email": "owner@pharmacy.com",
            "preferredDomain": "mypharmacy",
            "type": "waitlist-onboarding",
            "servicesOffered": "Delivery, Vaccinations"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.ledger_server)
        .await;

    let response = app
        .post_json("/api/waitlist-onboarding", &preferences_body())
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json!({"success": true}), body);
}

#[tokio::test]
async fn preferences_without_a_template_are_rejected() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.ledger_server)
        .await;

    let mut body = preferences_body();
    body.as_object_mut().unwrap().remove("template");

    let response = app.post_json("/api/waitlist-onboarding", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!("All required fields must be filled.", body["error"]);
}
