use anyhow::Context;
use cart_config::CartConfig;

/// Load `.env`, then layered TOML and `CARTCO2_*` configuration.
pub fn load_config() -> anyhow::Result<CartConfig> {
    CartConfig::load_with_dotenv().context("failed to load cartco2 configuration")
}
