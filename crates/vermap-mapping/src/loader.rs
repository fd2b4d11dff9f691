//! Mapping-document loading and caching.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::element::MappingElement;
use crate::error::DocumentError;
use crate::locator::FileLocator;
use crate::xml::XmlElement;
use crate::{ODM_NAMESPACE, ORM_NAMESPACE};

/// Root tags that declare a class mapping.
const CLASS_TAGS: &[&str] = &[
    "entity",
    "document",
    "mapped-superclass",
    "embeddable",
    "embedded-document",
];

/// Resolves a class name to the root element of its mapping.
pub trait MappingSource {
    type Element: MappingElement;

    /// Mapping root of `class_name` (the `entity`, `document`, ... element).
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when no mapping can be found or read.
    fn mapping_for(&self, class_name: &str) -> Result<Arc<Self::Element>, DocumentError>;
}

impl<T: MappingSource + ?Sized> MappingSource for &T {
    type Element = T::Element;

    fn mapping_for(&self, class_name: &str) -> Result<Arc<Self::Element>, DocumentError> {
        (**self).mapping_for(class_name)
    }
}

impl<T: MappingSource + ?Sized> MappingSource for Arc<T> {
    type Element = T::Element;

    fn mapping_for(&self, class_name: &str) -> Result<Arc<Self::Element>, DocumentError> {
        (**self).mapping_for(class_name)
    }
}

/// XML mapping documents found through a [`FileLocator`].
///
/// Loading a file registers every class it declares. Cached lookups only
/// take the read lock, so concurrent extraction across classes is safe.
#[derive(Debug)]
pub struct XmlMappingLoader {
    locator: FileLocator,
    mapping_namespaces: Vec<String>,
    cache: RwLock<HashMap<String, Arc<XmlElement>>>,
}

impl XmlMappingLoader {
    /// Loader accepting both ORM and ODM mapping namespaces.
    #[must_use]
    pub fn new(locator: FileLocator) -> Self {
        Self {
            locator,
            mapping_namespaces: vec![ORM_NAMESPACE.to_string(), ODM_NAMESPACE.to_string()],
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.mapping_namespaces = namespaces;
        self
    }

    #[must_use]
    pub fn locator(&self) -> &FileLocator {
        &self.locator
    }

    /// Register every class declared in an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when `source` is malformed.
    pub fn load_str(&self, source: &str, origin: &str) -> Result<Vec<String>, DocumentError> {
        let root = XmlElement::parse(source, origin)?;
        let declared = self.class_elements(&root);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let names = declared
            .into_iter()
            .map(|(name, element)| {
                cache
                    .entry(name.clone())
                    .or_insert_with(|| Arc::new(element));
                name
            })
            .collect::<Vec<_>>();
        drop(cache);

        tracing::debug!(origin, classes = names.len(), "registered mapping document");
        Ok(names)
    }

    /// Register every class declared in the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] or [`DocumentError::Parse`].
    pub fn load_file(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&source, &path.display().to_string())
    }

    /// Load every mapping file under the locator's directories and return
    /// the declared class names, each once, in discovery order.
    ///
    /// Files that fail to parse are skipped with a warning; they surface
    /// again as errors when one of their classes is looked up directly.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] when a directory cannot be listed.
    pub fn discover(&self) -> Result<Vec<String>, DocumentError> {
        let mut classes = Vec::new();
        for path in self.locator.mapping_files()? {
            match self.load_file(&path) {
                Ok(declared) => {
                    for name in declared {
                        if !classes.contains(&name) {
                            classes.push(name);
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable mapping file");
                }
            }
        }
        Ok(classes)
    }

    /// Names of all classes currently cached, sorted.
    #[must_use]
    pub fn cached_classes(&self) -> Vec<String> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = cache.keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn is_cached(&self, class_name: &str) -> bool {
        self.cached(normalize(class_name)).is_some()
    }

    fn cached(&self, class_name: &str) -> Option<Arc<XmlElement>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(class_name)
            .cloned()
    }

    fn class_elements(&self, root: &XmlElement) -> Vec<(String, XmlElement)> {
        root.elements()
            .filter(|element| {
                element
                    .namespace()
                    .is_some_and(|ns| self.mapping_namespaces.iter().any(|known| known == ns))
                    && CLASS_TAGS.contains(&element.name())
            })
            .filter_map(|element| {
                let name = normalize(element.attribute("name")?);
                (!name.is_empty()).then(|| (name.to_string(), element.clone()))
            })
            .collect()
    }
}

impl MappingSource for XmlMappingLoader {
    type Element = XmlElement;

    fn mapping_for(&self, class_name: &str) -> Result<Arc<XmlElement>, DocumentError> {
        let class_name = normalize(class_name);
        if let Some(mapping) = self.cached(class_name) {
            return Ok(mapping);
        }

        let path = self.locator.find_mapping_file(class_name)?;
        self.load_file(&path)?;
        self.cached(class_name)
            .ok_or_else(|| DocumentError::ClassNotDeclared {
                class: class_name.to_string(),
                path,
            })
    }
}

fn normalize(class_name: &str) -> &str {
    class_name.trim().trim_start_matches('\\')
}
