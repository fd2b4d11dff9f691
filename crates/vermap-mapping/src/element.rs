//! Format-agnostic access to one mapping tag.

/// Capability the loggable driver needs from a parsed mapping tree.
///
/// `children` only yields children in the element's own namespace, so
/// standard mapping tags never collide with extension markers of the same
/// name. Extension markers are reached through [`namespaced_child`].
///
/// [`namespaced_child`]: MappingElement::namespaced_child
pub trait MappingElement: Sized {
    /// Local tag name.
    fn name(&self) -> &str;

    /// Value of an unqualified attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Same-namespace children named `name`, in document order.
    fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a;

    fn has_child(&self, name: &str) -> bool {
        self.children(name).next().is_some()
    }

    /// First child named `name` in `namespace`.
    fn namespaced_child(&self, namespace: &str, name: &str) -> Option<&Self>;

    fn has_namespaced_child(&self, namespace: &str, name: &str) -> bool {
        self.namespaced_child(namespace, name).is_some()
    }
}
