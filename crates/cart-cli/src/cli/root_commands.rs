use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assess a cart payload (`{"cart": [...]}` or a bare array)
    Assess(AssessArgs),
    /// Show how a single item's emission factor is resolved
    Factor(FactorArgs),
    /// Show the supply-chain risk multiplier for an item name
    Risk(RiskArgs),
    /// List the emission factor table in match order
    Factors,
    /// Print the JSON schema of the assessment output
    Schema,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Cart JSON file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FactorArgs {
    /// Item name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Product barcode to look up
    #[arg(short, long)]
    pub upc: Option<String>,

    /// Comma-separated ingredient list
    #[arg(short, long)]
    pub ingredients: Option<String>,
}

#[derive(Debug, Args)]
pub struct RiskArgs {
    /// Item name
    pub name: String,
}
