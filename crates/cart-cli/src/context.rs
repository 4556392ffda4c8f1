use anyhow::Context;
use cart_config::CartConfig;
use cart_emissions::{DefaultAssessor, assessor_from_config};

use crate::cli::GlobalFlags;

/// Shared state for command handlers.
pub struct AppContext {
    pub config: CartConfig,
    pub assessor: DefaultAssessor,
}

impl AppContext {
    /// Wire the assessment stack. `--offline` switches lookups off regardless
    /// of configuration.
    pub fn init(mut config: CartConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if flags.offline {
            config.lookup.enabled = false;
        }
        if !config.lookup.is_configured() {
            tracing::info!("product lookups disabled; barcodes will be ignored");
        }
        let assessor =
            assessor_from_config(&config).context("failed to build product lookup client")?;
        Ok(Self { config, assessor })
    }
}
