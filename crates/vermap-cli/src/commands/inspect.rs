use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InspectArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vermap inspect <CLASS>`.
pub fn handle(args: &InspectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = ctx
        .factory
        .config_for(&args.class)
        .with_context(|| format!("failed to read loggable metadata of '{}'", args.class))?;
    output(config.as_ref(), flags.format)
}
