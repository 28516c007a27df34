mod checkout;
mod health_check;
mod lead;
mod onboarding;
mod waitlist_onboarding;

pub use checkout::submit_checkout;
pub use health_check::health_check;
pub use lead::capture_lead;
pub use onboarding::submit_onboarding;
pub use waitlist_onboarding::submit_waitlist_onboarding;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::ValidationError;
use crate::rate_limit::CooldownActive;

/// The response envelope shared by all four intake endpoints.
///
/// `errors` carries per-task delivery diagnostics; its presence never flips
/// `success`, which only reflects validation and rate-limiting.
#[derive(serde::Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ApiResponse {
    pub fn submitted() -> Self {
        Self {
            success: true,
            error: None,
            errors: None,
        }
    }

    pub fn submitted_with(delivery_errors: Vec<String>) -> Self {
        Self {
            success: true,
            error: None,
            errors: if delivery_errors.is_empty() {
                None
            } else {
                Some(delivery_errors)
            },
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
            errors: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    RateLimited(#[from] CooldownActive),
}

impl ResponseError for IntakeError {
    fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::Validation(_) => StatusCode::BAD_REQUEST,
            IntakeError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::rejected(self.to_string()))
    }
}
