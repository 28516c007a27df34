use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

use crate::configuration::RateLimitSettings;

/// Per-email cooldown guard for the waitlist lead endpoint.
///
/// An in-process map from normalized email to the last submission time.
/// The state is lost on restart, which is acceptable: this dampens abuse,
/// it is not correctness-critical enforcement.
pub struct SubmissionGuard {
    entries: Mutex<HashMap<String, DateTime<Utc>>>,
    cooldown: Duration,
    sweep_threshold: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("You've already submitted recently. Please try again later.")]
pub struct CooldownActive;

impl SubmissionGuard {
    pub fn new(cooldown: Duration, sweep_threshold: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            cooldown,
            sweep_threshold,
        }
    }

    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        Self::new(
            Duration::seconds(settings.cooldown_seconds),
            settings.sweep_threshold,
        )
    }

    /// Admit or reject a submission observed at `now`.
    ///
    /// A rejected attempt does not refresh the stored timestamp. An admitted
    /// one is recorded immediately, before any dispatch runs, so a submission
    /// whose delivery later fails still consumes the cooldown window.
    pub fn admit(&self, email: &str, now: DateTime<Utc>) -> Result<(), CooldownActive> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(last_submission) = entries.get(email) {
            if now - *last_submission < self.cooldown {
                return Err(CooldownActive);
            }
        }

        entries.insert(email.to_owned(), now);

        // Opportunistic cleanup keeps the map bounded without a scheduled task.
        if entries.len() > self.sweep_threshold {
            let cooldown = self.cooldown;
            entries.retain(|_, last| now - *last <= cooldown);
        }

        Ok(())
    }

    pub fn last_seen(&self, email: &str) -> Option<DateTime<Utc>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .copied()
    }
}
