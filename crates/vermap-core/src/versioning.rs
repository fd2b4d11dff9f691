//! The loggable configuration of one class.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which fields of a class are version-tracked, and where log entries go.
///
/// Built incrementally while a class mapping is traversed and validated once
/// at the end. `versioned` keeps declaration order and is never deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersioningConfig {
    /// Set when the class carries the loggable marker.
    #[serde(default)]
    pub loggable: bool,

    /// Resolved log-entry class, when the marker names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_entry_class: Option<String>,

    /// Versioned field paths; embedded fields use `embedded.field`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versioned: Vec<String>,
}

impl VersioningConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no scan recorded anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loggable && self.log_entry_class.is_none() && self.versioned.is_empty()
    }

    #[must_use]
    pub fn has_versioned(&self) -> bool {
        !self.versioned.is_empty()
    }

    pub fn mark_loggable(&mut self) {
        self.loggable = true;
    }

    pub fn set_log_entry_class(&mut self, class: impl Into<String>) {
        self.log_entry_class = Some(class.into());
    }

    pub fn push_versioned(&mut self, path: impl Into<String>) {
        self.versioned.push(path.into());
    }

    #[must_use]
    pub fn is_versioned(&self, path: &str) -> bool {
        self.versioned.iter().any(|field| field == path)
    }
}
