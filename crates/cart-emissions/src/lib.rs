//! # cart-emissions
//!
//! Emission factor resolution and cart assessment for cartco2.
//!
//! - [`ingredients`]: comma-separated ingredient tokenizer
//! - [`factors`]: ordered keyword → kg CO2e table
//! - [`resolver`]: barcode → ingredients → name → default fallback
//! - [`risk`]: keyword-based supply-chain risk multipliers
//! - [`aggregate`]: per-cart totals, social cost, and PASS/FAIL status

pub mod aggregate;
pub mod factors;
pub mod ingredients;
pub mod resolver;
pub mod risk;

mod error;

pub use aggregate::{CartAssessor, summarize};
pub use error::FactorError;
pub use factors::{DEFAULT_KEY, FactorTable};
pub use ingredients::parse_ingredients;
pub use resolver::{FactorResolver, Resolution, Tier};
pub use risk::risk_for;

use cart_config::CartConfig;
use cart_lookup::{CachedLookup, LookupError, OpenFoodFactsClient};

/// Assessor wired to Open Food Facts (or to nothing, when lookups are
/// disabled) with an in-memory lookup cache.
pub type DefaultAssessor = CartAssessor<Option<OpenFoodFactsClient>>;

/// Build the standard assessment stack from configuration.
///
/// # Errors
///
/// Returns [`LookupError`] if the HTTP client cannot be constructed.
pub fn assessor_from_config(config: &CartConfig) -> Result<DefaultAssessor, LookupError> {
    let source = OpenFoodFactsClient::from_config(&config.lookup)?;
    let resolver = FactorResolver::new(
        FactorTable::builtin(),
        CachedLookup::with_memory_cache(source),
    );
    Ok(CartAssessor::new(resolver, &config.emissions))
}
