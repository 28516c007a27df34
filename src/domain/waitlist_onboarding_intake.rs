use super::{optional, require, require_list, DomainSlug, EmailAddress, ValidationError};

/// Store-preference form body from the pre-launch waitlist wizard.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistOnboardingPayload {
    pub email: Option<String>,
    pub store_name: Option<String>,
    pub preferred_domain: Option<String>,
    pub tagline: Option<String>,
    pub template: Option<String>,
    pub primary_color: Option<String>,
    pub services_offered: Option<Vec<String>>,
    pub operating_hours: Option<String>,
    pub special_notes: Option<String>,
}

#[derive(Debug)]
pub struct WaitlistOnboardingIntake {
    pub email: EmailAddress,
    pub store_name: String,
    pub preferred_domain: DomainSlug,
    pub tagline: Option<String>,
    pub template: String,
    pub primary_color: String,
    pub services_offered: Vec<String>,
    pub operating_hours: String,
    pub special_notes: Option<String>,
}

impl TryFrom<WaitlistOnboardingPayload> for WaitlistOnboardingIntake {
    type Error = ValidationError;

    fn try_from(payload: WaitlistOnboardingPayload) -> Result<Self, Self::Error> {
        let raw_email = require(payload.email)?;
        let store_name = require(payload.store_name)?;
        let raw_domain = require(payload.preferred_domain)?;
        let template = require(payload.template)?;
        let primary_color = require(payload.primary_color)?;
        let services_offered = require_list(payload.services_offered)?;
        let operating_hours = require(payload.operating_hours)?;

        let email = EmailAddress::parse(raw_email)?;

        Ok(Self {
            email,
            store_name,
            preferred_domain: DomainSlug::normalize(raw_domain),
            tagline: optional(payload.tagline),
            template,
            primary_color,
            services_offered,
            operating_hours,
            special_notes: optional(payload.special_notes),
        })
    }
}
