use super::{optional, require, EmailAddress, ValidationError};

/// Raw waitlist form body. Every field is optional at the wire so that a
/// missing field surfaces as a validation rejection, not a parse failure.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub pharmacy_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub state: Option<String>,
    pub locations: Option<String>,
    pub challenge: Option<String>,
}

#[derive(Debug)]
pub struct WaitlistLead {
    pub pharmacy_name: String,
    pub contact_name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub state: String,
    pub locations: String,
    pub challenge: String,
}

impl TryFrom<LeadPayload> for WaitlistLead {
    type Error = ValidationError;

    fn try_from(payload: LeadPayload) -> Result<Self, Self::Error> {
        // Presence first: a missing email reads as "missing required field",
        // not as a malformed address.
        let pharmacy_name = require(payload.pharmacy_name)?;
        let contact_name = require(payload.contact_name)?;
        let raw_email = require(payload.email)?;
        let state = require(payload.state)?;
        let locations = require(payload.locations)?;
        let challenge = require(payload.challenge)?;

        let email = EmailAddress::parse(raw_email)?;

        Ok(Self {
            pharmacy_name,
            contact_name,
            email,
            phone: optional(payload.phone),
            state,
            locations,
            challenge,
        })
    }
}

impl WaitlistLead {
    pub fn first_name(&self) -> &str {
        self.contact_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.contact_name)
    }
}
