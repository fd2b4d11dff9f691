//! Mapping-document configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vermap_mapping::{DEFAULT_FILE_EXTENSION, EXTENSION_NAMESPACE, ODM_NAMESPACE, ORM_NAMESPACE};

use crate::error::ConfigError;

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

fn default_mapping_namespaces() -> Vec<String> {
    vec![ORM_NAMESPACE.to_string(), ODM_NAMESPACE.to_string()]
}

fn default_extension_namespace() -> String {
    EXTENSION_NAMESPACE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappingConfig {
    /// Directories searched for mapping files, in order.
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Mapping file suffix (e.g., ".dcm.xml").
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// XML namespaces of the standard mapping schemas.
    #[serde(default = "default_mapping_namespaces")]
    pub mapping_namespaces: Vec<String>,

    /// XML namespace of the `loggable` / `versioned` markers.
    #[serde(default = "default_extension_namespace")]
    pub extension_namespace: String,

    /// Classes that exist without a mapping file, such as a log-entry class
    /// shipped by a library.
    #[serde(default)]
    pub known_classes: Vec<String>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            file_extension: default_file_extension(),
            mapping_namespaces: default_mapping_namespaces(),
            extension_namespace: default_extension_namespace(),
            known_classes: Vec::new(),
        }
    }
}

impl MappingConfig {
    /// Returns `true` if at least one mapping directory is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.paths.is_empty()
    }

    /// Reject values no loader can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_extension.trim().is_empty() {
            return Err(invalid("mapping.file_extension", "must not be empty"));
        }
        if self.extension_namespace.trim().is_empty() {
            return Err(invalid("mapping.extension_namespace", "must not be empty"));
        }
        if self.mapping_namespaces.iter().all(|ns| ns.trim().is_empty()) {
            return Err(invalid(
                "mapping.mapping_namespaces",
                "at least one namespace is required",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
