use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::configuration::EmailSettings;
use crate::dispatch::settle_one;
use crate::domain::{OnboardingIntake, OnboardingPayload};
use crate::email_client::EmailClient;
use crate::ledger::iso_timestamp;
use crate::templating;

use super::{ApiResponse, IntakeError};

// Post-payment onboarding only notifies the team; there is no confirmation
// email and no spreadsheet row for this intake.
#[tracing::instrument(
    name = "Recording a post-payment onboarding submission",
    skip_all,
    fields(request_id = %Uuid::new_v4())
)]
pub async fn submit_onboarding(
    payload: web::Json<OnboardingPayload>,
    email_client: web::Data<EmailClient>,
    email_settings: web::Data<EmailSettings>,
) -> Result<HttpResponse, IntakeError> {
    let intake = OnboardingIntake::try_from(payload.into_inner())?;

    let submitted_at = iso_timestamp(Utc::now());
    tracing::info!(
        store = %intake.store_name,
        business = %intake.business_legal_name,
        "Onboarding submission recorded."
    );

    settle_one(("notifyEmail", async {
        let message = templating::onboarding_notification(&intake, &submitted_at)?;
        email_client
            .send(
                &email_settings.lifetime_from(),
                None,
                &email_settings.onboarding_notify,
                &message,
            )
            .await
    }))
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::submitted()))
}
