pub mod check;
pub mod inspect;
pub mod schema;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Inspect(args) => inspect::handle(args, ctx, flags),
        Commands::Check(args) => check::handle(args, ctx, flags),
        Commands::Schema => schema::handle(flags),
    }
}
