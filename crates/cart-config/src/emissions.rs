//! Emissions assessment configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default social cost in USD per metric ton of CO2e.
const fn default_social_cost_per_ton() -> f64 {
    50.0
}

/// Default risk multiplier above which a cart fails.
const fn default_fail_threshold() -> f64 {
    1.1
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmissionsConfig {
    /// Social cost rate applied to total tons of CO2e.
    #[serde(default = "default_social_cost_per_ton")]
    pub social_cost_per_ton: f64,

    /// A cart fails when any item's risk multiplier is strictly greater
    /// than this value.
    #[serde(default = "default_fail_threshold")]
    pub fail_threshold: f64,
}

impl Default for EmissionsConfig {
    fn default() -> Self {
        Self {
            social_cost_per_ton: default_social_cost_per_ton(),
            fail_threshold: default_fail_threshold(),
        }
    }
}

impl EmissionsConfig {
    /// Reject values that would make assessments meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a negative or non-finite
    /// social cost, or a non-positive fail threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.social_cost_per_ton.is_finite() || self.social_cost_per_ton < 0.0 {
            return Err(ConfigError::invalid(
                "emissions.social_cost_per_ton",
                format!("must be a non-negative number, got {}", self.social_cost_per_ton),
            ));
        }
        if !self.fail_threshold.is_finite() || self.fail_threshold <= 0.0 {
            return Err(ConfigError::invalid(
                "emissions.fail_threshold",
                format!("must be a positive number, got {}", self.fail_threshold),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EmissionsConfig::default();
        assert!((config.social_cost_per_ton - 50.0).abs() < f64::EPSILON);
        assert!((config.fail_threshold - 1.1).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_social_cost_rejected() {
        let config = EmissionsConfig {
            social_cost_per_ton: -1.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("emissions.social_cost_per_ton"));
    }

    #[test]
    fn zero_social_cost_allowed() {
        let config = EmissionsConfig {
            social_cost_per_ton: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_positive_threshold_rejected() {
        let config = EmissionsConfig {
            fail_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EmissionsConfig {
            fail_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
