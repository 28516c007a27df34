use super::ValidationError;

/// A normalized submitter email: trimmed, lowercased, shaped like
/// `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts anything matching `local@domain.tld`: no whitespace, exactly
    /// one region before the `@`, and at least one `.` with non-empty text
    /// on both sides somewhere after it.
    pub fn parse(raw: String) -> Result<Self, ValidationError> {
        let candidate = raw.trim().to_lowercase();

        if candidate.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidEmailFormat);
        }

        let (local, domain) = candidate
            .split_once('@')
            .ok_or(ValidationError::InvalidEmailFormat)?;

        if local.is_empty() || domain.contains('@') {
            return Err(ValidationError::InvalidEmailFormat);
        }

        match domain.rsplit_once('.') {
            Some((head, tail)) if !head.is_empty() && !tail.is_empty() => {}
            _ => return Err(ValidationError::InvalidEmailFormat),
        }

        Ok(Self(candidate))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
