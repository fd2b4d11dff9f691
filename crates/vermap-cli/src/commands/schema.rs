use vermap_core::VersioningConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `vermap schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(VersioningConfig);
    output(&schema, flags.format)
}
