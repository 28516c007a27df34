mod checkout_intake;
mod domain_slug;
mod email_address;
mod onboarding_intake;
mod waitlist_lead;
mod waitlist_onboarding_intake;

// expose chosen features on a sub-crate level
pub use checkout_intake::CheckoutIntake;
pub use checkout_intake::CheckoutPayload;
pub use domain_slug::DomainSlug;
pub use email_address::EmailAddress;
pub use onboarding_intake::OnboardingIntake;
pub use onboarding_intake::OnboardingPayload;
pub use waitlist_lead::LeadPayload;
pub use waitlist_lead::WaitlistLead;
pub use waitlist_onboarding_intake::WaitlistOnboardingIntake;
pub use waitlist_onboarding_intake::WaitlistOnboardingPayload;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All required fields must be filled.")]
    MissingRequiredFields,
    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
}

/// A required field must be present and non-empty after trimming. Every
/// failure collapses into the same aggregate rejection.
pub(crate) fn require(field: Option<String>) -> Result<String, ValidationError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(ValidationError::MissingRequiredFields),
    }
}

pub(crate) fn optional(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// A required list must contain at least one non-empty entry; the order of
/// the surviving entries is preserved.
pub(crate) fn require_list(field: Option<Vec<String>>) -> Result<Vec<String>, ValidationError> {
    let values: Vec<String> = field
        .unwrap_or_default()
        .into_iter()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        Err(ValidationError::MissingRequiredFields)
    } else {
        Ok(values)
    }
}
