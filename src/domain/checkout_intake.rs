use super::{optional, require, EmailAddress, ValidationError};

/// Pre-payment form body from the lifetime-access checkout flow.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub owner_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub pharmacy_name: Option<String>,
    pub pharmacy_type: Option<String>,
    pub npi_number: Option<String>,
    pub state: Option<String>,
    pub locations: Option<String>,
    pub current_website: Option<String>,
}

#[derive(Debug)]
pub struct CheckoutIntake {
    pub owner_name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub role: String,
    pub pharmacy_name: String,
    pub pharmacy_type: String,
    pub npi_number: Option<String>,
    pub state: String,
    pub locations: String,
    pub current_website: Option<String>,
}

impl TryFrom<CheckoutPayload> for CheckoutIntake {
    type Error = ValidationError;

    fn try_from(payload: CheckoutPayload) -> Result<Self, Self::Error> {
        let owner_name = require(payload.owner_name)?;
        let raw_email = require(payload.email)?;
        let role = require(payload.role)?;
        let pharmacy_name = require(payload.pharmacy_name)?;
        let pharmacy_type = require(payload.pharmacy_type)?;
        let state = require(payload.state)?;
        let locations = require(payload.locations)?;

        let email = EmailAddress::parse(raw_email)?;

        Ok(Self {
            owner_name,
            email,
            phone: optional(payload.phone),
            role,
            pharmacy_name,
            pharmacy_type,
            npi_number: optional(payload.npi_number),
            state,
            locations,
            current_website: optional(payload.current_website),
        })
    }
}

impl CheckoutIntake {
    pub fn first_name(&self) -> &str {
        self.owner_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.owner_name)
    }
}
