use cart_emissions::{Tier, risk_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FactorArgs;
use crate::context::AppContext;
use crate::output;

/// Response from `cartco2 factor`.
#[derive(Debug, Serialize)]
pub struct FactorReport {
    pub name: String,
    pub base_factor_kg: f64,
    pub tier: Tier,
    pub matched: Vec<String>,
    pub risk_multiplier: f64,
}

/// Handle `cartco2 factor`.
pub async fn handle(
    args: &FactorArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let name = args.name.to_lowercase();
    let resolution = ctx
        .assessor
        .resolver()
        .resolve_detailed(&name, args.upc.as_deref(), args.ingredients.as_deref())
        .await;

    let report = FactorReport {
        name: args.name.clone(),
        base_factor_kg: resolution.factor,
        tier: resolution.tier,
        matched: resolution.matched,
        risk_multiplier: risk_for(&name),
    };
    output::output(&report, flags.format)
}
