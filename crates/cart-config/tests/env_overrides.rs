//! Environment variable override tests.

use cart_config::{CartConfig, ConfigError};
use figment::Jail;

#[test]
fn env_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("CARTCO2_EMISSIONS__SOCIAL_COST_PER_TON", "120.5");
        jail.set_env("CARTCO2_LOOKUP__ENABLED", "false");

        let config = CartConfig::load().map_err(|e| e.to_string())?;
        assert!((config.emissions.social_cost_per_ton - 120.5).abs() < f64::EPSILON);
        assert!(!config.lookup.enabled);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cartco2")?;
        jail.create_file(
            ".cartco2/config.toml",
            r"
[lookup]
timeout_secs = 4
",
        )?;
        jail.set_env("CARTCO2_LOOKUP__TIMEOUT_SECS", "25");

        let config = CartConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.lookup.timeout_secs, 25);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CARTCO2_LOOKUP__TIMEOUT_SECS", "0");

        let err = CartConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
