//! Mapping validation errors.
//!
//! Every inconsistency found while deriving a versioning configuration is an
//! [`InvalidMapping`]. These are authoring mistakes in mapping sources, never
//! transient conditions, so nothing retries them.

use thiserror::Error;

/// Incoherent loggable mapping metadata for one class.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMapping {
    /// The `log-entry-class` reference resolves to no known class.
    #[error("LogEntry class: {class} does not exist (referenced from {entity})")]
    UnknownLogEntryClass { entity: String, class: String },

    /// Versioned data on a class keyed by more than one field.
    #[error("Loggable does not support composite identifiers in class - {entity}")]
    CompositeIdentifier { entity: String },

    /// A versioned association declared on its inverse side.
    #[error("Cannot version [{field}] as it is not the owning side in object - {entity}")]
    NotOwningSide { entity: String, field: String },

    /// A versioned `embedded` declaration without a `class` attribute.
    #[error("Embedded [{field}] must set class attribute in class - {entity}")]
    EmbeddedWithoutClass { entity: String, field: String },

    /// Versioned fields on a class that does not opt into logging.
    #[error(
        "Class must be annotated with Loggable annotation in order to track versioned fields in class - {entity}"
    )]
    MissingLoggable { entity: String },

    /// A versioned `<{element}>` lacking its identifying attribute.
    #[error("Versioned <{element}> in class {entity} has no field name")]
    MissingFieldName { entity: String, element: String },
}

impl InvalidMapping {
    /// Class the error was raised for.
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::UnknownLogEntryClass { entity, .. }
            | Self::CompositeIdentifier { entity }
            | Self::NotOwningSide { entity, .. }
            | Self::EmbeddedWithoutClass { entity, .. }
            | Self::MissingLoggable { entity }
            | Self::MissingFieldName { entity, .. } => entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offenders() {
        let err = InvalidMapping::NotOwningSide {
            entity: "App\\Comment".to_string(),
            field: "article".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("[article]"));
        assert!(message.contains("App\\Comment"));
        assert_eq!(err.entity(), "App\\Comment");
    }

    #[test]
    fn unknown_log_entry_class_mentions_class() {
        let err = InvalidMapping::UnknownLogEntryClass {
            entity: "App\\Article".to_string(),
            class: "Nope".to_string(),
        };
        assert!(err.to_string().starts_with("LogEntry class: Nope does not exist"));
    }
}
