use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vermap` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vermap",
    version,
    about = "vermap - loggable versioning metadata for XML class mappings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Mapping directory; repeatable, replaces `mapping.paths` from config
    #[arg(short = 'm', long = "mapping-dir", global = true)]
    pub mapping_dirs: Vec<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            mapping_dirs: self.mapping_dirs.clone(),
        }
    }
}
