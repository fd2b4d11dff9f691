//! Errors raised while assembling [`VermapConfig`](crate::VermapConfig).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `VERMAP_*` variable could not be merged or extracted.
    #[error("cannot read vermap configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Extraction succeeded but a mapping setting is unusable.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
