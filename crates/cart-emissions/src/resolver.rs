//! Tiered emission factor resolution.
//!
//! ```text
//! barcode → product ingredients ─┐
//! explicit ingredient text ──────┼─ mean of matched token factors
//! whole item name ─────────────── first keyword contained in the name
//! nothing matched ─────────────── table default
//! ```
//!
//! A tier only wins when at least one ingredient token matches a keyword;
//! otherwise resolution falls through to the next tier.

use cart_lookup::{CachedLookup, MemoryCache, ProductCache, ProductSource};
use serde::Serialize;
use std::fmt;

use crate::factors::FactorTable;
use crate::ingredients::parse_ingredients;

/// The tier that produced a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    BarcodeIngredients,
    ExplicitIngredients,
    NameMatch,
    Default,
}

impl Tier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BarcodeIngredients => "barcode_ingredients",
            Self::ExplicitIngredients => "explicit_ingredients",
            Self::NameMatch => "name_match",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved factor with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// kg CO2e per unit.
    pub factor: f64,
    pub tier: Tier,
    /// Keywords that matched, one per matching token (may repeat).
    pub matched: Vec<String>,
}

impl Resolution {
    fn single(factor: f64, tier: Tier, keyword: Option<&str>) -> Self {
        Self {
            factor,
            tier,
            matched: keyword.map(str::to_string).into_iter().collect(),
        }
    }
}

/// Average the factors of every token that matches a keyword.
///
/// Each token contributes at most once (its first matching keyword).
/// Returns `None` when no token matches.
#[must_use]
pub fn average_ingredient_factor(
    table: &FactorTable,
    tokens: &[String],
) -> Option<(f64, Vec<String>)> {
    let mut total = 0.0;
    let mut matched = Vec::new();
    for token in tokens {
        if let Some((keyword, factor)) = table.first_match(token) {
            total += factor;
            matched.push(keyword.to_string());
        }
    }
    if matched.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = total / matched.len() as f64;
    Some((mean, matched))
}

/// Resolves an item to a single emission factor.
#[derive(Debug)]
pub struct FactorResolver<S, C = MemoryCache> {
    table: FactorTable,
    lookup: CachedLookup<S, C>,
}

impl<S: ProductSource, C: ProductCache> FactorResolver<S, C> {
    #[must_use]
    pub const fn new(table: FactorTable, lookup: CachedLookup<S, C>) -> Self {
        Self { table, lookup }
    }

    #[must_use]
    pub const fn table(&self) -> &FactorTable {
        &self.table
    }

    #[must_use]
    pub const fn lookup(&self) -> &CachedLookup<S, C> {
        &self.lookup
    }

    /// Emission factor for an item, in kg CO2e per unit.
    pub async fn resolve(&self, name: &str, code: Option<&str>, ingredients: Option<&str>) -> f64 {
        self.resolve_detailed(name, code, ingredients).await.factor
    }

    /// Like [`Self::resolve`], also reporting which tier decided.
    pub async fn resolve_detailed(
        &self,
        name: &str,
        code: Option<&str>,
        ingredients: Option<&str>,
    ) -> Resolution {
        if let Some(code) = code.filter(|c| !c.is_empty())
            && let Some(text) = self
                .lookup
                .lookup(code)
                .await
                .and_then(|record| record.ingredients_text)
            && let Some((factor, matched)) = self.from_ingredients(&text)
        {
            tracing::debug!(name, code, factor, "factor from product ingredients");
            return Resolution {
                factor,
                tier: Tier::BarcodeIngredients,
                matched,
            };
        }

        if let Some(text) = ingredients.filter(|t| !t.is_empty())
            && let Some((factor, matched)) = self.from_ingredients(text)
        {
            tracing::debug!(name, factor, "factor from supplied ingredients");
            return Resolution {
                factor,
                tier: Tier::ExplicitIngredients,
                matched,
            };
        }

        let lowered = name.to_lowercase();
        if !lowered.is_empty()
            && let Some((keyword, factor)) = self.table.first_match(&lowered)
        {
            tracing::debug!(name, keyword, factor, "factor from item name");
            return Resolution::single(factor, Tier::NameMatch, Some(keyword));
        }

        tracing::debug!(name, "no factor match, using default");
        Resolution::single(self.table.default_factor(), Tier::Default, None)
    }

    fn from_ingredients(&self, text: &str) -> Option<(f64, Vec<String>)> {
        average_ingredient_factor(&self.table, &parse_ingredients(text))
    }
}
