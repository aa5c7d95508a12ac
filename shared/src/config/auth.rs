//! Login throttling configuration

use serde::{Deserialize, Serialize};

/// Configuration for login throttling
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThrottleConfig {
    /// Number of failed attempts before an identity is locked out
    #[serde(default = "default_max_failed_attempts")]
    pub max_failed_attempts: u32,

    /// Rolling window in seconds after which failed attempts are forgotten
    #[serde(default = "default_window_seconds")]
    pub window_seconds: i64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: default_max_failed_attempts(),
            window_seconds: default_window_seconds(),
        }
    }
}

impl ThrottleConfig {
    /// The attempt window as a chrono duration
    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.window_seconds)
    }
}

fn default_max_failed_attempts() -> u32 {
    5
}

fn default_window_seconds() -> i64 {
    1800 // 30 minutes
}
