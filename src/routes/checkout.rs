use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::configuration::{ApplicationSettings, EmailSettings};
use crate::dispatch::settle_three;
use crate::domain::{CheckoutIntake, CheckoutPayload};
use crate::email_client::EmailClient;
use crate::ledger::{iso_timestamp, CheckoutRow, LedgerClient};
use crate::templating;

use super::{ApiResponse, IntakeError};

#[tracing::instrument(
    name = "Recording a lifetime access intake",
    skip_all,
    fields(request_id = %Uuid::new_v4())
)]
pub async fn submit_checkout(
    payload: web::Json<CheckoutPayload>,
    email_client: web::Data<EmailClient>,
    ledger: web::Data<LedgerClient>,
    email_settings: web::Data<EmailSettings>,
    application: web::Data<ApplicationSettings>,
) -> Result<HttpResponse, IntakeError> {
    let intake = CheckoutIntake::try_from(payload.into_inner())?;

    let submitted_at = iso_timestamp(Utc::now());
    tracing::info!(
        email = %intake.email,
        pharmacy = %intake.pharmacy_name,
        "Lifetime access intake recorded."
    );

    let row = CheckoutRow::new(&intake, &submitted_at);
    let report = settle_three(
        ("notifyEmail", async {
            let message = templating::checkout_notification(&intake, &submitted_at)?;
            email_client
                .send(
                    &email_settings.lifetime_from(),
                    None,
                    &email_settings.checkout_notify,
                    &message,
                )
                .await
        }),
        ("welcomeEmail", async {
            let message = templating::founder_welcome(&intake, &application)?;
            email_client
                .send(
                    &email_settings.founders_from(),
                    Some(&email_settings.lifetime_sender),
                    intake.email.as_ref(),
                    &message,
                )
                .await
        }),
        ("googleSheet", ledger.append(&ledger.webhooks.checkout, &row)),
    )
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::submitted_with(report.delivery_errors())))
}
