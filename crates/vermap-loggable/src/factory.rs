//! Per-class loggable configuration with parent traversal and caching.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use vermap_core::{ClassResolver, VersioningConfig};
use vermap_mapping::{MappingSource, MetadataSource};

use crate::driver::LoggableXmlDriver;
use crate::error::LoggableError;

/// Builds and caches the [`VersioningConfig`] of classes.
///
/// A class's configuration accumulates the mappings of its known ancestors,
/// root-most first, before its own. Each ancestor level is validated as it
/// is read. Failures are not cached.
#[derive(Debug)]
pub struct LoggableMetadataFactory<M, S, R> {
    metadata: M,
    driver: LoggableXmlDriver<S, R>,
    cache: RwLock<HashMap<String, Arc<VersioningConfig>>>,
}

impl<M, S, R> LoggableMetadataFactory<M, S, R>
where
    M: MetadataSource,
    S: MappingSource,
    R: ClassResolver,
{
    #[must_use]
    pub fn new(metadata: M, driver: LoggableXmlDriver<S, R>) -> Self {
        Self {
            metadata,
            driver,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Configuration of `class_name`, from cache when available.
    ///
    /// # Errors
    ///
    /// Returns a [`LoggableError`] when the class or one of its mapped
    /// ancestors cannot be read or fails validation.
    pub fn config_for(&self, class_name: &str) -> Result<Arc<VersioningConfig>, LoggableError> {
        let key = class_name.trim_start_matches('\\');
        if let Some(config) = self.cached(key) {
            return Ok(config);
        }

        let meta = self.metadata.metadata_for(key)?;
        let mut config = VersioningConfig::new();
        for parent in meta.parent_classes.iter().rev() {
            if !self.metadata.has_metadata_for(parent) {
                tracing::trace!(entity = %meta.name, parent = %parent, "parent has no mapping");
                continue;
            }
            let parent_meta = self.metadata.metadata_for(parent)?;
            self.driver.read_extended_metadata(&parent_meta, &mut config)?;
        }
        self.driver.read_extended_metadata(&meta, &mut config)?;

        let config = Arc::new(config);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), Arc::clone(&config));
        Ok(config)
    }

    #[must_use]
    pub fn is_cached(&self, class_name: &str) -> bool {
        self.cached(class_name.trim_start_matches('\\')).is_some()
    }

    /// Drop every cached configuration.
    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cached(&self, key: &str) -> Option<Arc<VersioningConfig>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
