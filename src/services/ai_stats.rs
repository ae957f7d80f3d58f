use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Why an AI call produced no content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiDegradation {
    MissingCredential,
    Timeout,
    Transport,
    HttpStatus,
    Unparseable,
    /// Parsed, but no expected field had a usable value.
    Incomplete,
}

/// Process-wide counters of AI outcomes, reported by the health endpoint.
#[derive(Debug, Default)]
pub struct AiStats {
    attempts: AtomicU64,
    successes: AtomicU64,
    skipped_missing_credential: AtomicU64,
    timeouts: AtomicU64,
    transport_errors: AtomicU64,
    http_errors: AtomicU64,
    unparseable_responses: AtomicU64,
    incomplete_responses: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatsSnapshot {
    pub attempts: u64,
    pub successes: u64,
    pub skipped_missing_credential: u64,
    pub timeouts: u64,
    pub transport_errors: u64,
    pub http_errors: u64,
    pub unparseable_responses: u64,
    pub incomplete_responses: u64,
}

impl AiStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_degradation(&self, reason: AiDegradation) {
        let counter = match reason {
            AiDegradation::MissingCredential => &self.skipped_missing_credential,
            AiDegradation::Timeout => &self.timeouts,
            AiDegradation::Transport => &self.transport_errors,
            AiDegradation::HttpStatus => &self.http_errors,
            AiDegradation::Unparseable => &self.unparseable_responses,
            AiDegradation::Incomplete => &self.incomplete_responses,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> AiStatsSnapshot {
        AiStatsSnapshot {
            attempts: self.attempts.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            skipped_missing_credential: self.skipped_missing_credential.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            http_errors: self.http_errors.load(Ordering::Relaxed),
            unparseable_responses: self.unparseable_responses.load(Ordering::Relaxed),
            incomplete_responses: self.incomplete_responses.load(Ordering::Relaxed),
        }
    }
}
