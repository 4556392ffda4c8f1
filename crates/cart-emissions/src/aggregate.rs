//! Cart-level aggregation.

use cart_config::EmissionsConfig;
use cart_core::{
    AssessmentStatus, CartAssessment, CartItem, ResolvedItem, Summary, round_cents,
};
use cart_lookup::{MemoryCache, ProductCache, ProductSource};

use crate::resolver::FactorResolver;
use crate::risk::risk_for;

const KG_PER_TON: f64 = 1000.0;

/// Runs factor and risk resolution over a cart and totals the result.
#[derive(Debug)]
pub struct CartAssessor<S, C = MemoryCache> {
    resolver: FactorResolver<S, C>,
    social_cost_per_ton: f64,
    fail_threshold: f64,
}

impl<S: ProductSource, C: ProductCache> CartAssessor<S, C> {
    #[must_use]
    pub fn new(resolver: FactorResolver<S, C>, config: &EmissionsConfig) -> Self {
        Self {
            resolver,
            social_cost_per_ton: config.social_cost_per_ton,
            fail_threshold: config.fail_threshold,
        }
    }

    #[must_use]
    pub const fn resolver(&self) -> &FactorResolver<S, C> {
        &self.resolver
    }

    /// Resolve a single item. Quantities below 1 are raised to 1.
    pub async fn resolve_item(&self, item: &CartItem) -> ResolvedItem {
        let quantity = item.quantity.max(1).unsigned_abs();
        let name = item.name.to_lowercase();
        let factor = self
            .resolver
            .resolve(&name, item.upc.as_deref(), item.ingredients.as_deref())
            .await;
        let risk = risk_for(&name);
        ResolvedItem::new(item.name.clone(), quantity, factor, risk)
    }

    /// Assess every item in order. Lookup failures degrade individual items
    /// to lower tiers and never abort the cart.
    pub async fn assess(&self, items: &[CartItem]) -> CartAssessment {
        let mut resolved = Vec::with_capacity(items.len());
        for item in items {
            resolved.push(self.resolve_item(item).await);
        }
        let assessment = summarize(resolved, self.social_cost_per_ton, self.fail_threshold);
        tracing::debug!(
            items = assessment.items.len(),
            total_kg = assessment.summary.total_emissions_kg,
            status = %assessment.summary.status,
            "cart assessed"
        );
        assessment
    }
}

/// Total a list of resolved items.
///
/// The cart fails when any risk multiplier is strictly greater than
/// `fail_threshold`. The highest item is the one with the largest emissions,
/// the earliest one on ties.
#[must_use]
pub fn summarize(
    items: Vec<ResolvedItem>,
    social_cost_per_ton: f64,
    fail_threshold: f64,
) -> CartAssessment {
    let total_emissions_kg = items
        .iter()
        .fold(0.0, |total, item| total + item.emissions_kg);
    let total_emissions_tons = total_emissions_kg / KG_PER_TON;

    let status = if items.iter().any(|item| item.risk_multiplier > fail_threshold) {
        AssessmentStatus::Fail
    } else {
        AssessmentStatus::Pass
    };

    let highest_risk_item = items
        .iter()
        .fold(None::<&ResolvedItem>, |best, item| match best {
            Some(best) if best.emissions_kg >= item.emissions_kg => Some(best),
            _ => Some(item),
        })
        .cloned();

    CartAssessment {
        summary: Summary {
            total_emissions_kg,
            total_emissions_tons,
            social_cost_usd: round_cents(total_emissions_tons * social_cost_per_ton),
            status,
        },
        highest_risk_item,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_cart_summary() {
        assert_eq!(summarize(Vec::new(), 50.0, 1.1), CartAssessment::empty());
    }

    #[test]
    fn highest_item_is_first_on_ties() {
        let items = vec![
            ResolvedItem::new("first", 2, 1.0, 1.0),
            ResolvedItem::new("second", 1, 2.0, 1.0),
            ResolvedItem::new("smaller", 1, 1.0, 1.0),
        ];
        let assessment = summarize(items, 50.0, 1.1);
        assert_eq!(
            assessment.highest_risk_item.map(|item| item.name),
            Some("first".to_string())
        );
    }

    #[test]
    fn highest_item_is_by_emissions_not_risk() {
        let items = vec![
            ResolvedItem::new("palm oil", 1, 1.0, 1.25),
            ResolvedItem::new("rice", 10, 3.7, 1.0),
        ];
        let assessment = summarize(items, 50.0, 1.1);
        assert_eq!(assessment.summary.status, AssessmentStatus::Fail);
        assert_eq!(
            assessment.highest_risk_item.map(|item| item.name),
            Some("rice".to_string())
        );
    }

    #[test]
    fn threshold_is_strict() {
        let items = vec![ResolvedItem::new("brazilian soy", 1, 0.7, 1.1)];
        assert_eq!(summarize(items, 50.0, 1.1).summary.status, AssessmentStatus::Pass);
    }

    #[test]
    fn totals_and_social_cost() {
        let items = vec![
            ResolvedItem::new("beef", 2, 50.0, 1.15),
            ResolvedItem::new("oats", 3, 0.4, 1.0),
        ];
        let assessment = summarize(items, 50.0, 1.1);
        let expected_kg = 50.0 * 1.15 * 2.0 + 0.4 * 3.0;
        assert!((assessment.summary.total_emissions_kg - expected_kg).abs() < 1e-9);
        assert!((assessment.summary.total_emissions_tons - expected_kg / 1000.0).abs() < 1e-12);
        assert!((assessment.summary.social_cost_usd - 5.81).abs() < 1e-9);
    }
}
