//! Assessment output types.
//!
//! These structs define the JSON shape returned for a cart assessment:
//! a summary block, the single item with the highest emissions, and the
//! full per-item breakdown in input order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AssessmentStatus
// ---------------------------------------------------------------------------

/// Overall verdict for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssessmentStatus {
    Pass,
    Fail,
}

impl AssessmentStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResolvedItem
// ---------------------------------------------------------------------------

/// A cart item after factor and risk resolution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResolvedItem {
    /// Name as submitted.
    pub name: String,
    /// Quantity after clamping (always at least 1).
    pub quantity: u64,
    /// Emission factor in kg CO2e per unit.
    pub base_factor_kg: f64,
    /// Supply-chain risk adjustment.
    pub risk_multiplier: f64,
    /// `base_factor_kg * risk_multiplier * quantity`.
    pub emissions_kg: f64,
}

impl ResolvedItem {
    /// Build a resolved item, computing its emissions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        name: impl Into<String>,
        quantity: u64,
        base_factor_kg: f64,
        risk_multiplier: f64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            base_factor_kg,
            risk_multiplier,
            emissions_kg: base_factor_kg * risk_multiplier * quantity as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// Summary / CartAssessment
// ---------------------------------------------------------------------------

/// Cart-level totals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Summary {
    pub total_emissions_kg: f64,
    pub total_emissions_tons: f64,
    /// Social cost in USD, rounded to cents.
    pub social_cost_usd: f64,
    pub status: AssessmentStatus,
}

impl Summary {
    /// Totals for an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_emissions_kg: 0.0,
            total_emissions_tons: 0.0,
            social_cost_usd: 0.0,
            status: AssessmentStatus::Pass,
        }
    }
}

/// Full assessment of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CartAssessment {
    pub summary: Summary,
    /// Item with the largest `emissions_kg` (first one on ties).
    pub highest_risk_item: Option<ResolvedItem>,
    pub items: Vec<ResolvedItem>,
}

impl CartAssessment {
    /// Assessment of an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            summary: Summary::empty(),
            highest_risk_item: None,
            items: Vec::new(),
        }
    }
}

/// Round a currency amount to two decimal places, exact halves to even.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_value(AssessmentStatus::Pass).unwrap(), json!("PASS"));
        assert_eq!(serde_json::to_value(AssessmentStatus::Fail).unwrap(), json!("FAIL"));
        assert_eq!(AssessmentStatus::Fail.to_string(), "FAIL");
    }

    #[test]
    fn resolved_item_computes_emissions() {
        let item = ResolvedItem::new("Wheat flour", 5, 0.8, 1.0);
        assert!((item.emissions_kg - 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_assessment_serializes_null_highest_item() {
        let value = serde_json::to_value(CartAssessment::empty()).unwrap();
        assert_eq!(
            value,
            json!({
                "summary": {
                    "total_emissions_kg": 0.0,
                    "total_emissions_tons": 0.0,
                    "social_cost_usd": 0.0,
                    "status": "PASS"
                },
                "highest_risk_item": null,
                "items": []
            })
        );
    }

    #[test]
    fn round_cents_rounds_half_to_even() {
        assert!((round_cents(0.277) - 0.28).abs() < 1e-12);
        assert!((round_cents(0.274) - 0.27).abs() < 1e-12);
        assert!((round_cents(0.125) - 0.12).abs() < 1e-12);
        assert!((round_cents(0.375) - 0.38).abs() < 1e-12);
        assert!(round_cents(0.0).abs() < f64::EPSILON);
    }
}
