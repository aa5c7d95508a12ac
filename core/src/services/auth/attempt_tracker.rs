//! Failed-login attempt tracking for brute force protection.
//!
//! State is process-lifetime only: a restart forgets all counters, which is
//! acceptable for this design. Expiry is lazy: a record older than the
//! window is dropped when it is next read, there is no background sweep.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::warn;

use bl_shared::config::ThrottleConfig;

/// One identity's failure state
#[derive(Debug, Clone)]
struct AttemptRecord {
    count: u32,
    last_failure_at: DateTime<Utc>,
}

/// Process-wide tracker mapping identities to failed-attempt state.
///
/// Keys are normalized emails. A single mutex over the map serializes
/// same-identity reads and writes; contention is expected to be low.
pub struct AttemptTracker {
    config: ThrottleConfig,
    attempts: Mutex<HashMap<String, AttemptRecord>>,
}

impl AttemptTracker {
    /// Create a tracker with the given throttle configuration
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Create a tracker with the default policy (5 attempts, 30 minutes)
    pub fn with_defaults() -> Self {
        Self::new(ThrottleConfig::default())
    }

    /// Number of failed attempts currently counted against an identity.
    ///
    /// Returns 0 and drops the record when the last failure is at least one
    /// window old.
    pub fn failed_attempts(&self, identity: &str) -> u32 {
        self.failed_attempts_at(identity, Utc::now())
    }

    pub(crate) fn failed_attempts_at(&self, identity: &str, now: DateTime<Utc>) -> u32 {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        match attempts.get(identity) {
            Some(record) if now - record.last_failure_at >= self.config.window() => {
                attempts.remove(identity);
                0
            }
            Some(record) => record.count,
            None => 0,
        }
    }

    /// Record one failed credential check against an identity.
    ///
    /// Called exactly once per failed check. Returns the new count.
    pub fn record_failure(&self, identity: &str) -> u32 {
        self.record_failure_at(identity, Utc::now())
    }

    pub(crate) fn record_failure_at(&self, identity: &str, now: DateTime<Utc>) -> u32 {
        let count = {
            let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
            let record = attempts.entry(identity.to_string()).or_insert(AttemptRecord {
                count: 0,
                last_failure_at: now,
            });
            record.count += 1;
            record.last_failure_at = now;
            record.count
        };

        warn!(
            attempts = count,
            max_attempts = self.config.max_failed_attempts,
            "Failed login attempt recorded"
        );

        count
    }

    /// Forget an identity's failures. A no-op for unknown identities.
    ///
    /// Called exactly once per successful login.
    pub fn clear(&self, identity: &str) {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.remove(identity);
    }

    /// Whether the identity is currently locked out
    pub fn is_locked_out(&self, identity: &str) -> bool {
        self.failed_attempts(identity) >= self.config.max_failed_attempts
    }

    /// The configured lockout threshold
    pub fn max_failed_attempts(&self) -> u32 {
        self.config.max_failed_attempts
    }
}

impl Default for AttemptTracker {
    fn default() -> Self {
        Self::with_defaults()
    }
}
