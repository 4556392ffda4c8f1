//! Product lookup (Open Food Facts) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default Open Food Facts endpoint.
fn default_base_url() -> String {
    String::from("https://world.openfoodfacts.org")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("cartco2/0.1")
}

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Whether barcode lookups hit the network at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Product database base URL (no trailing slash required).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every lookup.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    /// Check if lookups are enabled and point somewhere.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.base_url.trim().is_empty()
    }

    /// Reject a zero timeout or an enabled lookup without a URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("lookup.timeout_secs", "must be at least 1"));
        }
        if self.enabled && self.base_url.trim().is_empty() {
            return Err(ConfigError::invalid(
                "lookup.base_url",
                "must be set when lookups are enabled",
            ));
        }
        Ok(())
    }
}
