use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the loggable configuration of one class.
    Inspect(InspectArgs),
    /// Validate the loggable configuration of every mapped class.
    Check(CheckArgs),
    /// Print the JSON Schema of the loggable configuration.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Fully-qualified class name (e.g. 'App\Entity\Article').
    pub class: String,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Stop at the first invalid class.
    #[arg(long)]
    pub fail_fast: bool,
}
