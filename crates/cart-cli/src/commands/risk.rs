use cart_emissions::risk_for;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RiskArgs;
use crate::output;

/// Response from `cartco2 risk`.
#[derive(Debug, Serialize)]
pub struct RiskReport<'a> {
    pub name: &'a str,
    pub risk_multiplier: f64,
}

/// Handle `cartco2 risk`.
pub fn handle(args: &RiskArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(
        &RiskReport {
            name: &args.name,
            risk_multiplier: risk_for(&args.name),
        },
        flags.format,
    )
}
