//! Mapping-document error types.

use std::path::PathBuf;

/// Errors raised while locating, reading, or parsing mapping documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("No mapping file found named '{file_name}' for class '{class}'")]
    MappingNotFound { class: String, file_name: String },

    #[error("Mapping file {} does not declare class '{class}'", path.display())]
    ClassNotDeclared { class: String, path: PathBuf },

    #[error("No mapping registered for class '{0}'")]
    UnknownClass(String),

    #[error("Malformed mapping document {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Unsupported mapping element <{tag}> for class '{class}'")]
    UnsupportedRoot { class: String, tag: String },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
