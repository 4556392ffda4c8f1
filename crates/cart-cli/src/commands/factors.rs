use cart_emissions::FactorTable;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

/// One row of `cartco2 factors`.
#[derive(Debug, Serialize, PartialEq)]
pub struct FactorRow<'a> {
    pub keyword: &'a str,
    pub factor_kg: f64,
}

/// Table rows in match order.
pub fn rows(table: &FactorTable) -> Vec<FactorRow<'_>> {
    table
        .entries()
        .map(|(keyword, factor_kg)| FactorRow { keyword, factor_kg })
        .collect()
}

/// Handle `cartco2 factors`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(&rows(ctx.assessor.resolver().table()), flags.format)
}
