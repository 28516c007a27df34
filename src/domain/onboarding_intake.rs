use super::{optional, require, require_list, ValidationError};

/// Post-payment store setup form body, collected over three wizard steps.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingPayload {
    // Step 1 - business details
    pub business_legal_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub dea_number: Option<String>,
    pub state_license_number: Option<String>,
    // Step 2 - online store preferences
    pub preferred_domain: Option<String>,
    pub store_name: Option<String>,
    pub tagline: Option<String>,
    pub primary_color: Option<String>,
    pub template: Option<String>,
    // Step 3 - services and operations
    pub services_offered: Option<Vec<String>>,
    pub operating_hours: Option<String>,
    pub accepted_insurance: Option<String>,
    pub special_notes: Option<String>,
}

#[derive(Debug)]
pub struct OnboardingIntake {
    pub business_legal_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub dea_number: Option<String>,
    pub state_license_number: Option<String>,
    pub preferred_domain: String,
    pub store_name: String,
    pub tagline: Option<String>,
    pub primary_color: String,
    pub template: String,
    pub services_offered: Vec<String>,
    pub operating_hours: String,
    pub accepted_insurance: Option<String>,
    pub special_notes: Option<String>,
}

impl TryFrom<OnboardingPayload> for OnboardingIntake {
    type Error = ValidationError;

    fn try_from(payload: OnboardingPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            business_legal_name: require(payload.business_legal_name)?,
            address: require(payload.address)?,
            city: require(payload.city)?,
            state: require(payload.state)?,
            zip: require(payload.zip)?,
            phone: require(payload.phone)?,
            dea_number: optional(payload.dea_number),
            state_license_number: optional(payload.state_license_number),
            preferred_domain: require(payload.preferred_domain)?,
            store_name: require(payload.store_name)?,
            tagline: optional(payload.tagline),
            primary_color: require(payload.primary_color)?,
            template: require(payload.template)?,
            services_offered: require_list(payload.services_offered)?,
            operating_hours: require(payload.operating_hours)?,
            accepted_insurance: optional(payload.accepted_insurance),
            special_notes: optional(payload.special_notes),
        })
    }
}
