pub mod assess;
pub mod factor;
pub mod factors;
pub mod risk;
pub mod schema;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Assess(args) => assess::handle(&args, ctx, flags).await,
        Commands::Factor(args) => factor::handle(&args, ctx, flags).await,
        Commands::Risk(args) => risk::handle(&args, flags),
        Commands::Factors => factors::handle(ctx, flags),
        Commands::Schema => schema::handle(),
    }
}
