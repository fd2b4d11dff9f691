use std::sync::Arc;

use vermap_config::VermapConfig;
use vermap_core::ClassRegistry;
use vermap_loggable::{LoggableMetadataFactory, LoggableXmlDriver};
use vermap_mapping::{DocumentError, FileLocator, XmlMappingLoader};

use crate::cli::GlobalFlags;

pub type Factory =
    LoggableMetadataFactory<Arc<XmlMappingLoader>, Arc<XmlMappingLoader>, ClassRegistry>;

/// Loaded mappings and the loggable factory built on top of them.
pub struct AppContext {
    pub factory: Factory,
    /// Classes declared by the mapping files or implied by their names, sorted.
    pub classes: Vec<String>,
    pub fail_fast: bool,
}

impl AppContext {
    /// Discover every mapping file and wire the factory.
    ///
    /// `--mapping-dir` flags replace `mapping.paths` when present.
    pub fn init(config: &VermapConfig, flags: &GlobalFlags) -> Result<Self, DocumentError> {
        let paths = if flags.mapping_dirs.is_empty() {
            config.mapping.paths.clone()
        } else {
            flags.mapping_dirs.clone()
        };

        let locator = FileLocator::new(paths, config.mapping.file_extension.clone());
        let loader = Arc::new(
            XmlMappingLoader::new(locator).with_namespaces(config.mapping.mapping_namespaces.clone()),
        );

        let declared = loader.discover()?;
        let mut registry: ClassRegistry = declared.iter().map(String::as_str).collect();
        registry.extend(config.mapping.known_classes.iter().map(String::as_str));

        // Unreadable files are skipped by discovery; their file names still
        // name a class so the failure is reported on lookup.
        let mut classes = declared;
        classes.extend(loader.locator().all_class_names()?);
        classes.sort();
        classes.dedup();

        tracing::debug!(
            classes = classes.len(),
            known = registry.len(),
            "discovered mapping classes"
        );

        let driver = LoggableXmlDriver::new(Arc::clone(&loader), registry)
            .with_extension_namespace(config.mapping.extension_namespace.clone());
        let factory = LoggableMetadataFactory::new(loader, driver);

        Ok(Self {
            factory,
            classes,
            fail_fast: config.general.fail_fast,
        })
    }
}
