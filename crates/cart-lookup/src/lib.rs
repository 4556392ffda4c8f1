//! # cart-lookup
//!
//! Product database access for cartco2.
//!
//! Resolves product barcodes to ingredient text via Open Food Facts and
//! memoizes successful lookups:
//! - [`ProductSource`]: capability for fetching a product by code
//! - [`OpenFoodFactsClient`]: the HTTP implementation
//! - [`ProductCache`] / [`MemoryCache`]: injected memoization store
//! - [`CachedLookup`]: cache-first lookup that never surfaces errors

mod cache;
mod error;
mod http;
pub mod openfoodfacts;

pub use cache::{CachedLookup, MemoryCache, ProductCache};
pub use error::LookupError;
pub use openfoodfacts::OpenFoodFactsClient;

use serde::{Deserialize, Serialize};
use std::future::Future;

// ── Types ──────────────────────────────────────────────────────────

/// The subset of a product database record that emissions resolution uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Barcode the record was fetched for.
    pub code: String,
    /// Free-text ingredient list, if the database has one.
    pub ingredients_text: Option<String>,
}

// ── Source ─────────────────────────────────────────────────────────

/// Something that can fetch a product record by barcode.
///
/// Implementations report a definitive miss as [`LookupError::NotFound`].
pub trait ProductSource: Send + Sync {
    /// Fetch the product record for `code`.
    fn fetch_product(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<ProductRecord, LookupError>> + Send;
}

/// `None` is a source with lookups switched off.
impl<S: ProductSource> ProductSource for Option<S> {
    async fn fetch_product(&self, code: &str) -> Result<ProductRecord, LookupError> {
        match self {
            Some(source) => source.fetch_product(code).await,
            None => Err(LookupError::Disabled),
        }
    }
}
