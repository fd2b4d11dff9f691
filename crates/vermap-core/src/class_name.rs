//! Class-name resolution.
//!
//! Names referenced from a mapping (such as a `log-entry-class`) may be fully
//! qualified or relative to the namespace of the class that declares them.

use std::collections::HashSet;
use std::sync::Arc;

use crate::entity::EntityMetadata;

/// Answers whether a class exists in the host application.
pub trait ClassResolver {
    fn class_exists(&self, name: &str) -> bool;
}

impl<T: ClassResolver + ?Sized> ClassResolver for &T {
    fn class_exists(&self, name: &str) -> bool {
        (**self).class_exists(name)
    }
}

impl<T: ClassResolver + ?Sized> ClassResolver for Arc<T> {
    fn class_exists(&self, name: &str) -> bool {
        (**self).class_exists(name)
    }
}

/// A fixed set of known class names.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: HashSet<String>,
}

impl ClassRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>) {
        self.classes.insert(normalize(name.as_ref()).to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<S: AsRef<str>> Extend<S> for ClassRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl ClassResolver for ClassRegistry {
    fn class_exists(&self, name: &str) -> bool {
        self.classes.contains(normalize(name))
    }
}

/// Namespace part of a `\`-separated class name.
#[must_use]
pub fn namespace_of(class_name: &str) -> Option<&str> {
    normalize(class_name)
        .rsplit_once('\\')
        .map(|(namespace, _)| namespace)
        .filter(|namespace| !namespace.is_empty())
}

/// Resolve `name` as referenced from `entity`.
///
/// A known name resolves to itself; otherwise it is tried relative to the
/// namespace of `entity`. Returns `None` when neither exists.
pub fn resolve_related_class<R>(resolver: &R, entity: &EntityMetadata, name: &str) -> Option<String>
where
    R: ClassResolver + ?Sized,
{
    let name = normalize(name);
    if name.is_empty() {
        return None;
    }
    if resolver.class_exists(name) {
        return Some(name.to_string());
    }

    let candidate = format!("{}\\{name}", entity.namespace()?);
    resolver.class_exists(&candidate).then_some(candidate)
}

fn normalize(name: &str) -> &str {
    name.trim().trim_start_matches('\\')
}
