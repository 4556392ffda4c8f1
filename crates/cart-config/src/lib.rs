//! # cart-config
//!
//! Layered configuration loading for cartco2 using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CARTCO2_*` prefix, `__` as separator)
//! 2. Project-level `.cartco2/config.toml`
//! 3. User-level `~/.config/cartco2/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CARTCO2_EMISSIONS__SOCIAL_COST_PER_TON` -> `emissions.social_cost_per_ton`,
//! `CARTCO2_LOOKUP__TIMEOUT_SECS` -> `lookup.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use cart_config::CartConfig;
//!
//! let config = CartConfig::load_with_dotenv().expect("config");
//! println!("social cost: {} USD/t", config.emissions.social_cost_per_ton);
//! ```

mod emissions;
mod error;
mod lookup;

pub use emissions::EmissionsConfig;
pub use error::ConfigError;
pub use lookup::LookupConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "CARTCO2_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CartConfig {
    #[serde(default)]
    pub emissions: EmissionsConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl CartConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.emissions.validate()?;
        self.lookup.validate()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".cartco2/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cartco2").join("config.toml"))
    }
}
