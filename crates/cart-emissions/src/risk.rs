//! Supply-chain risk multipliers.
//!
//! Rules are evaluated in order against the lowercased item name; the first
//! rule whose keywords all occur in the name decides the multiplier.

/// Multiplier when no rule matches.
pub const NO_RISK: f64 = 1.0;

struct RiskRule {
    all_of: &'static [&'static str],
    multiplier: f64,
}

const RULES: &[RiskRule] = &[
    // Soy sourced from Brazil carries deforestation risk.
    RiskRule {
        all_of: &["soy", "brazil"],
        multiplier: 1.10,
    },
    RiskRule {
        all_of: &["soy"],
        multiplier: 1.05,
    },
    // Also covers "palm oil".
    RiskRule {
        all_of: &["palm"],
        multiplier: 1.25,
    },
    RiskRule {
        all_of: &["beef"],
        multiplier: 1.15,
    },
];

/// Risk multiplier for an item name. Empty names carry no risk.
#[must_use]
pub fn risk_for(name: &str) -> f64 {
    let name = name.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.all_of.iter().all(|keyword| name.contains(keyword)))
        .map_or(NO_RISK, |rule| rule.multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::soy_and_brazil("Brazilian Soy", 1.10)]
    #[case::brazil_after_soy("soybeans from brazil", 1.10)]
    #[case::plain_soy("Soy milk", 1.05)]
    #[case::soy_precedes_palm("soy and palm blend", 1.05)]
    #[case::soy_precedes_beef("beef with soy sauce", 1.05)]
    #[case::palm_oil("Palm Oil", 1.25)]
    #[case::palm_kernel("palm kernel", 1.25)]
    #[case::beef("Ground BEEF 80/20", 1.15)]
    #[case::no_match("Wheat flour", NO_RISK)]
    #[case::brazil_alone("brazil nuts", NO_RISK)]
    #[case::empty("", NO_RISK)]
    fn multiplier_for_name(#[case] name: &str, #[case] expected: f64) {
        let actual = risk_for(name);
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "risk_for({name:?}) = {actual}, expected {expected}"
        );
    }
}
