/// A storefront subdomain: lowercase, `[a-z0-9-]` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSlug(String);

impl DomainSlug {
    /// Lowercases the input and strips every character outside `[a-z0-9-]`.
    pub fn normalize(raw: String) -> Self {
        let slug = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();
        Self(slug)
    }
}

impl AsRef<str> for DomainSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DomainSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
