//! # vermap-mapping
//!
//! Access to class mapping documents.
//!
//! - [`MappingElement`]: format-agnostic view of one mapping tag (attributes,
//!   same-namespace children, namespaced extension children)
//! - [`XmlElement`]: owned XML tree implementing it, parsed with `roxmltree`
//! - [`FileLocator`]: class name to mapping file resolution
//! - [`XmlMappingLoader`]: thread-safe cache of class mappings keyed by name
//! - [`MetadataSource`]: structural metadata derived from the same documents

mod element;
mod error;
mod loader;
mod locator;
mod structure;
mod xml;

pub use element::MappingElement;
pub use error::DocumentError;
pub use loader::{MappingSource, XmlMappingLoader};
pub use locator::FileLocator;
pub use structure::{MetadataSource, read_entity_metadata};
pub use xml::XmlElement;

/// Namespace of the standard ORM mapping schema.
pub const ORM_NAMESPACE: &str = "http://doctrine-project.org/schemas/orm/doctrine-mapping";

/// Namespace of the standard ODM mapping schema.
pub const ODM_NAMESPACE: &str = "http://doctrine-project.org/schemas/odm/doctrine-mongo-mapping";

/// Namespace of the behavioral extension markers.
pub const EXTENSION_NAMESPACE: &str =
    "http://gediminasm.org/schemas/orm/doctrine-extensions-mapping";

/// Default mapping file suffix.
pub const DEFAULT_FILE_EXTENSION: &str = ".dcm.xml";
