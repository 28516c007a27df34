use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::configuration::{ApplicationSettings, EmailSettings};
use crate::dispatch::settle_three;
use crate::domain::{LeadPayload, WaitlistLead};
use crate::email_client::EmailClient;
use crate::ledger::{iso_timestamp, LeadRow, LedgerClient};
use crate::rate_limit::SubmissionGuard;
use crate::templating;

use super::{ApiResponse, IntakeError};

#[tracing::instrument(
    name = "Capturing a waitlist lead",
    skip_all,
    fields(request_id = %Uuid::new_v4())
)]
pub async fn capture_lead(
    payload: web::Json<LeadPayload>,
    email_client: web::Data<EmailClient>,
    ledger: web::Data<LedgerClient>,
    submission_guard: web::Data<SubmissionGuard>,
    email_settings: web::Data<EmailSettings>,
    application: web::Data<ApplicationSettings>,
) -> Result<HttpResponse, IntakeError> {
    let lead = WaitlistLead::try_from(payload.into_inner())?;
    submission_guard.admit(lead.email.as_ref(), Utc::now())?;

    let submitted_at = iso_timestamp(Utc::now());
    tracing::info!(
        email = %lead.email,
        pharmacy = %lead.pharmacy_name,
        "Waitlist lead captured."
    );

    let row = LeadRow::new(&lead, &submitted_at);
    settle_three(
        ("notifyEmail", async {
            let message = templating::lead_notification(&lead, &submitted_at)?;
            email_client
                .send(
                    &email_settings.waitlist_from(),
                    None,
                    &email_settings.lead_notify,
                    &message,
                )
                .await
        }),
        ("welcomeEmail", async {
            let message = templating::lead_welcome(&lead, &application)?;
            email_client
                .send(
                    &email_settings.waitlist_from(),
                    Some(&email_settings.waitlist_sender),
                    lead.email.as_ref(),
                    &message,
                )
                .await
        }),
        ("googleSheet", ledger.append(&ledger.webhooks.lead, &row)),
    )
    .await;

    Ok(HttpResponse::Ok().json(ApiResponse::submitted()))
}
