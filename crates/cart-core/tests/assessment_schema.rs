//! Serde roundtrip and JsonSchema validation tests for assessment output types.

use cart_core::{AssessmentStatus, CartAssessment, ResolvedItem, Summary};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    resolved_item_roundtrip,
    ResolvedItem,
    ResolvedItem::new("palm oil spread", 2, 8.0, 1.25)
);

roundtrip_and_validate!(
    summary_roundtrip,
    Summary,
    Summary {
        total_emissions_kg: 250.0,
        total_emissions_tons: 0.25,
        social_cost_usd: 12.5,
        status: AssessmentStatus::Pass,
    }
);

roundtrip_and_validate!(
    assessment_roundtrip,
    CartAssessment,
    CartAssessment {
        summary: Summary {
            total_emissions_kg: 20.0,
            total_emissions_tons: 0.02,
            social_cost_usd: 1.0,
            status: AssessmentStatus::Fail,
        },
        highest_risk_item: Some(ResolvedItem::new("palm oil spread", 2, 8.0, 1.25)),
        items: vec![ResolvedItem::new("palm oil spread", 2, 8.0, 1.25)],
    }
);

roundtrip_and_validate!(empty_assessment_roundtrip, CartAssessment, CartAssessment::empty());

#[test]
fn schema_rejects_unknown_status() {
    let schema = serde_json::to_value(schema_for!(Summary)).unwrap();
    let instance = serde_json::json!({
        "total_emissions_kg": 1.0,
        "total_emissions_tons": 0.001,
        "social_cost_usd": 0.05,
        "status": "MAYBE"
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
