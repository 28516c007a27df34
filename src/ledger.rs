use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::configuration::LedgerSettings;
use crate::dispatch::DispatchOutcome;
use crate::domain::{CheckoutIntake, WaitlistLead, WaitlistOnboardingIntake};

/// Server-side submission timestamp, RFC 3339 with millisecond precision.
pub fn iso_timestamp(moment: DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Destination for one endpoint's spreadsheet rows.
pub enum SheetWebhook {
    Configured(String),
    NotConfigured,
}

impl SheetWebhook {
    fn from_url(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::Configured(url),
            _ => Self::NotConfigured,
        }
    }
}

pub struct LedgerWebhooks {
    pub lead: SheetWebhook,
    pub checkout: SheetWebhook,
    pub waitlist_onboarding: SheetWebhook,
}

/// Appends normalized submissions to the external spreadsheet webhooks.
pub struct LedgerClient {
    http_client: Client,
    pub webhooks: LedgerWebhooks,
}

impl LedgerClient {
    pub fn from_settings(settings: &LedgerSettings) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            http_client,
            webhooks: LedgerWebhooks {
                lead: SheetWebhook::from_url(settings.lead_webhook_url.clone()),
                checkout: SheetWebhook::from_url(settings.checkout_webhook_url.clone()),
                waitlist_onboarding: SheetWebhook::from_url(
                    settings.waitlist_onboarding_webhook_url.clone(),
                ),
            },
        })
    }

    /// POST one row as JSON. No retry: a failure is reported to the fan-out
    /// coordinator and goes no further.
    pub async fn append<Row: Serialize>(
        &self,
        webhook: &SheetWebhook,
        row: &Row,
    ) -> Result<DispatchOutcome, anyhow::Error> {
        let url = match webhook {
            SheetWebhook::Configured(url) => url,
            SheetWebhook::NotConfigured => {
                tracing::warn!("Sheet webhook URL not configured - skipping ledger append.");
                return Ok(DispatchOutcome::Skipped);
            }
        };

        self.http_client
            .post(url)
            .json(row)
            .send()
            .await
            .context("Failed to POST the ledger row.")?
            .error_for_status()
            .context("The ledger webhook returned an error status.")?;

        Ok(DispatchOutcome::Delivered)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow<'a> {
    pharmacy_name: &'a str,
    contact_name: &'a str,
    email: &'a str,
    phone: &'a str,
    state: &'a str,
    locations: &'a str,
    challenge: &'a str,
    timestamp: &'a str,
}

impl<'a> LeadRow<'a> {
    pub fn new(lead: &'a WaitlistLead, timestamp: &'a str) -> Self {
        Self {
            pharmacy_name: &lead.pharmacy_name,
            contact_name: &lead.contact_name,
            email: lead.email.as_ref(),
            phone: lead.phone.as_deref().unwrap_or(""),
            state: &lead.state,
            locations: &lead.locations,
            challenge: &lead.challenge,
            timestamp,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRow<'a> {
    owner_name: &'a str,
    email: &'a str,
    phone: &'a str,
    role: &'a str,
    pharmacy_name: &'a str,
    pharmacy_type: &'a str,
    npi_number: &'a str,
    state: &'a str,
    locations: &'a str,
    current_website: &'a str,
    timestamp: &'a str,
}

impl<'a> CheckoutRow<'a> {
    pub fn new(intake: &'a CheckoutIntake, timestamp: &'a str) -> Self {
        Self {
            owner_name: &intake.owner_name,
            email: intake.email.as_ref(),
            phone: intake.phone.as_deref().unwrap_or(""),
            role: &intake.role,
            pharmacy_name: &intake.pharmacy_name,
            pharmacy_type: &intake.pharmacy_type,
            npi_number: intake.npi_number.as_deref().unwrap_or(""),
            state: &intake.state,
            locations: &intake.locations,
            current_website: intake.current_website.as_deref().unwrap_or(""),
            timestamp,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistOnboardingRow<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    email: &'a str,
    store_name: &'a str,
    preferred_domain: &'a str,
    tagline: &'a str,
    template: &'a str,
    primary_color: &'a str,
    services_offered: String,
    operating_hours: &'a str,
    special_notes: &'a str,
    timestamp: &'a str,
}

impl<'a> WaitlistOnboardingRow<'a> {
    pub fn new(intake: &'a WaitlistOnboardingIntake, timestamp: &'a str) -> Self {
        Self {
            kind: "waitlist-onboarding",
            email: intake.email.as_ref(),
            store_name: &intake.store_name,
            preferred_domain: intake.preferred_domain.as_ref(),
            tagline: intake.tagline.as_deref().unwrap_or(""),
            template: &intake.template,
            primary_color: &intake.primary_color,
            services_offered: intake.services_offered.join(", "),
            operating_hours: &intake.operating_hours,
            special_notes: intake.special_notes.as_deref().unwrap_or(""),
            timestamp,
        }
    }
}
