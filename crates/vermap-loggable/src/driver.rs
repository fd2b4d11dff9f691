//! XML driver for the loggable extension.
//!
//! One pass over a class mapping, in this order:
//! 1. the `loggable` marker on the class tag (and its `log-entry-class`)
//! 2. `versioned` markers on `field`, `many-to-one`, `one-to-one` and
//!    `reference-one`, each kind exhausted before the next
//! 3. `versioned` markers on `embedded` declarations, expanded into the
//!    versioned fields of the embedded class as `embedded.field`
//! 4. validation against the class structure
//!
//! Any failure aborts the pass; there is no partial result.

use std::sync::Arc;

use vermap_core::{ClassResolver, EntityMetadata, InvalidMapping, VersioningConfig, resolve_related_class};
use vermap_mapping::{EXTENSION_NAMESPACE, MappingElement, MappingSource};

use crate::error::LoggableError;

/// Class tags that may carry the `loggable` marker.
const LOGGABLE_ROOTS: &[&str] = &["entity", "document", "mapped-superclass"];

/// Direct mapping kinds scanned for `versioned`, in scan order.
const VERSIONED_TAGS: &[&str] = &["field", "many-to-one", "one-to-one", "reference-one"];

const LOGGABLE: &str = "loggable";
const VERSIONED: &str = "versioned";

/// Reads loggable metadata from class mappings.
///
/// `S` supplies mapping roots by class name (the owning class and every
/// versioned embedded class); `R` decides which class names exist.
#[derive(Debug, Clone)]
pub struct LoggableXmlDriver<S, R> {
    mappings: S,
    classes: R,
    extension_namespace: String,
}

impl<S, R> LoggableXmlDriver<S, R>
where
    S: MappingSource,
    R: ClassResolver,
{
    #[must_use]
    pub fn new(mappings: S, classes: R) -> Self {
        Self {
            mappings,
            classes,
            extension_namespace: EXTENSION_NAMESPACE.to_string(),
        }
    }

    /// Look for markers in `namespace` instead of the default extension one.
    #[must_use]
    pub fn with_extension_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.extension_namespace = namespace.into();
        self
    }

    /// Derive the validated configuration of `meta` from an empty start.
    ///
    /// # Errors
    ///
    /// See [`read_extended_metadata`](Self::read_extended_metadata).
    pub fn extract(&self, meta: &EntityMetadata) -> Result<VersioningConfig, LoggableError> {
        let mut config = VersioningConfig::new();
        self.read_extended_metadata(meta, &mut config)?;
        Ok(config)
    }

    /// Read the mapping of `meta` into `config`, then validate `config`.
    ///
    /// Validation is skipped for mapped superclasses and for a `config` that
    /// is still empty after the scans.
    ///
    /// # Errors
    ///
    /// Returns [`LoggableError::Invalid`] for incoherent metadata and
    /// [`LoggableError::Document`] when a mapping cannot be read.
    pub fn read_extended_metadata(
        &self,
        meta: &EntityMetadata,
        config: &mut VersioningConfig,
    ) -> Result<(), LoggableError> {
        let mapping = self.mappings.mapping_for(&meta.name)?;
        let root: &S::Element = &mapping;

        if LOGGABLE_ROOTS.contains(&root.name()) {
            self.read_loggable(meta, root, config)?;
        }
        for tag in VERSIONED_TAGS {
            self.inspect_element_for_versioned(meta, root, tag, config)?;
        }
        self.inspect_embedded_for_versioned(meta, root, config)?;

        if !meta.is_mapped_superclass() && !config.is_empty() {
            validate(meta, config)?;
        }

        tracing::debug!(
            entity = %meta.name,
            loggable = config.loggable,
            versioned = config.versioned.len(),
            "read loggable metadata"
        );
        Ok(())
    }

    fn read_loggable(
        &self,
        meta: &EntityMetadata,
        root: &S::Element,
        config: &mut VersioningConfig,
    ) -> Result<(), InvalidMapping> {
        let Some(marker) = root.namespaced_child(&self.extension_namespace, LOGGABLE) else {
            return Ok(());
        };
        config.mark_loggable();

        if let Some(class) = marker.attribute("log-entry-class") {
            let resolved = resolve_related_class(&self.classes, meta, class).ok_or_else(|| {
                InvalidMapping::UnknownLogEntryClass {
                    entity: meta.name.clone(),
                    class: class.to_string(),
                }
            })?;
            config.set_log_entry_class(resolved);
        }
        Ok(())
    }

    fn inspect_element_for_versioned(
        &self,
        meta: &EntityMetadata,
        root: &S::Element,
        tag: &str,
        config: &mut VersioningConfig,
    ) -> Result<(), InvalidMapping> {
        for element in root.children(tag) {
            if !self.is_versioned(element) {
                continue;
            }

            // Reference-style associations name their field in `field`.
            let is_association = element.has_attribute("field");
            let field = element
                .attribute(if is_association { "field" } else { "name" })
                .filter(|field| !field.is_empty())
                .ok_or_else(|| InvalidMapping::MissingFieldName {
                    entity: meta.name.clone(),
                    element: tag.to_string(),
                })?;

            if is_association && !meta.is_owning_side(field) {
                return Err(InvalidMapping::NotOwningSide {
                    entity: meta.name.clone(),
                    field: field.to_string(),
                });
            }

            tracing::trace!(entity = %meta.name, field, "versioned field");
            config.push_versioned(field);
        }
        Ok(())
    }

    fn inspect_embedded_for_versioned(
        &self,
        meta: &EntityMetadata,
        root: &S::Element,
        config: &mut VersioningConfig,
    ) -> Result<(), LoggableError> {
        for embedded in root.children("embedded") {
            if !self.is_versioned(embedded) {
                continue;
            }

            let field = embedded.attribute("name").unwrap_or_default();
            let class = embedded
                .attribute("class")
                .ok_or_else(|| InvalidMapping::EmbeddedWithoutClass {
                    entity: meta.name.clone(),
                    field: field.to_string(),
                })?;
            if field.is_empty() {
                return Err(InvalidMapping::MissingFieldName {
                    entity: meta.name.clone(),
                    element: "embedded".to_string(),
                }
                .into());
            }

            let embeddable: Arc<S::Element> = self.mappings.mapping_for(class)?;
            for inner in embeddable.children("field") {
                if !self.is_versioned(inner) {
                    continue;
                }
                let Some(inner_field) = inner.attribute("name") else {
                    return Err(InvalidMapping::MissingFieldName {
                        entity: class.to_string(),
                        element: "field".to_string(),
                    }
                    .into());
                };

                let path = format!("{field}.{inner_field}");
                tracing::trace!(entity = %meta.name, field = %path, "versioned embedded field");
                config.push_versioned(path);
            }
        }
        Ok(())
    }

    fn is_versioned(&self, element: &S::Element) -> bool {
        element.has_namespaced_child(&self.extension_namespace, VERSIONED)
    }
}

/// Checks run once the scans are complete.
fn validate(meta: &EntityMetadata, config: &VersioningConfig) -> Result<(), InvalidMapping> {
    if meta.has_composite_identifier() {
        return Err(InvalidMapping::CompositeIdentifier {
            entity: meta.name.clone(),
        });
    }
    if config.has_versioned() && !config.loggable && !meta.is_embeddable() {
        return Err(InvalidMapping::MissingLoggable {
            entity: meta.name.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
