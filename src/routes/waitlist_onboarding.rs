use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::configuration::{ApplicationSettings, EmailSettings};
use crate::dispatch::settle_three;
use crate::domain::{WaitlistOnboardingIntake, WaitlistOnboardingPayload};
use crate::email_client::EmailClient;
use crate::ledger::{iso_timestamp, LedgerClient, WaitlistOnboardingRow};
use crate::templating;

use super::{ApiResponse, IntakeError};

#[tracing::instrument(
    name = "Saving waitlist store preferences",
    skip_all,
    fields(request_id = %Uuid::new_v4())
)]
pub async fn submit_waitlist_onboarding(
    payload: web::Json<WaitlistOnboardingPayload>,
    email_client: web::Data<EmailClient>,
    ledger: web::Data<LedgerClient>,
    email_settings: web::Data<EmailSettings>,
    application: web::Data<ApplicationSettings>,
) -> Result<HttpResponse, IntakeError> {
    let intake = WaitlistOnboardingIntake::try_from(payload.into_inner())?;

    let submitted_at = iso_timestamp(Utc::now());
    tracing::info!(
        email = %intake.email,
        store = %intake.store_name,
        "Waitlist store preferences saved."
    );

    let row = WaitlistOnboardingRow::new(&intake, &submitted_at);
    let report = settle_three(
        ("notifyEmail", async {
            let message =
                templating::waitlist_onboarding_notification(&intake, &application, &submitted_at)?;
            email_client
                .send(
                    &email_settings.waitlist_from(),
                    None,
                    &email_settings.lead_notify,
                    &message,
                )
                .await
        }),
        ("confirmEmail", async {
            let message = templating::preferences_saved(&intake, &application)?;
            email_client
                .send(
                    &email_settings.waitlist_from(),
                    Some(&email_settings.waitlist_sender),
                    intake.email.as_ref(),
                    &message,
                )
                .await
        }),
        (
            "googleSheet",
            ledger.append(&ledger.webhooks.waitlist_onboarding, &row),
        ),
    )
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::submitted_with(report.delivery_errors())))
}
