//! Owned XML mapping tree.
//!
//! `roxmltree` documents borrow their source text; mapping documents are
//! cached across lookups, so the parsed tree is copied into an owned
//! [`XmlElement`] once and shared behind an `Arc` afterwards.

use crate::element::MappingElement;
use crate::error::DocumentError;

/// One XML element with its namespace, unqualified attributes, and element
/// children. Text and comments are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse `source` and return its root element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when `source` is not well-formed XML.
    pub fn parse(source: &str, origin: &str) -> Result<Self, DocumentError> {
        let document = roxmltree::Document::parse(source).map_err(|source| DocumentError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self::from_node(document.root_element()))
    }

    /// Copy an element node and its element descendants.
    #[must_use]
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let tag = node.tag_name();
        let attributes = node
            .attributes()
            .filter(|attribute| attribute.namespace().is_none())
            .map(|attribute| (attribute.name().to_string(), attribute.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(roxmltree::Node::is_element)
            .map(Self::from_node)
            .collect();

        Self {
            namespace: tag.namespace().map(str::to_string),
            name: tag.name().to_string(),
            attributes,
            children,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// All element children regardless of namespace.
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn is_named(&self, namespace: Option<&str>, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }
}

impl MappingElement for XmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        let namespace = self.namespace.as_deref();
        self.children
            .iter()
            .filter(move |child| child.is_named(namespace, name))
    }

    fn namespaced_child(&self, namespace: &str, name: &str) -> Option<&Self> {
        self.children
            .iter()
            .find(|child| child.is_named(Some(namespace), name))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{EXTENSION_NAMESPACE, ORM_NAMESPACE};

    const ARTICLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<doctrine-mapping xmlns="http://doctrine-project.org/schemas/orm/doctrine-mapping"
                  xmlns:gedmo="http://gediminasm.org/schemas/orm/doctrine-extensions-mapping">
    <entity name="App\Entity\Article" table="articles">
        <gedmo:loggable log-entry-class="ArticleLogEntry"/>
        <id name="id" type="integer"/>
        <!-- comment -->
        <field name="title" type="string">
            <gedmo:versioned/>
        </field>
        <field name="body" type="text"/>
        <gedmo:field name="title"/>
    </entity>
</doctrine-mapping>"#;

    fn entity() -> XmlElement {
        let root = XmlElement::parse(ARTICLE, "article.dcm.xml").expect("parses");
        root.children("entity").next().cloned().expect("entity element")
    }

    #[test]
    fn root_keeps_its_namespace() {
        let root = XmlElement::parse(ARTICLE, "article.dcm.xml").expect("parses");
        assert_eq!(root.name(), "doctrine-mapping");
        assert_eq!(root.namespace(), Some(ORM_NAMESPACE));
    }

    #[test]
    fn children_stay_in_the_parent_namespace() {
        let entity = entity();
        let fields: Vec<_> = entity
            .children("field")
            .filter_map(|field| field.attribute("name"))
            .collect();
        assert_eq!(fields, vec!["title", "body"]);
    }

    #[test]
    fn namespaced_child_reaches_extension_markers() {
        let entity = entity();
        let loggable = entity
            .namespaced_child(EXTENSION_NAMESPACE, "loggable")
            .expect("loggable marker");
        assert_eq!(loggable.attribute("log-entry-class"), Some("ArticleLogEntry"));

        let body = entity
            .children("field")
            .find(|field| field.attribute("name") == Some("body"))
            .expect("body field");
        assert!(!body.has_namespaced_child(EXTENSION_NAMESPACE, "versioned"));
    }

    #[test]
    fn missing_attribute_is_none() {
        let entity = entity();
        assert!(entity.has_attribute("table"));
        assert!(!entity.has_attribute("repository-class"));
        assert!(!entity.has_child("many-to-one"));
    }

    #[test]
    fn malformed_source_reports_origin() {
        let err = XmlElement::parse("<entity>", "broken.dcm.xml").expect_err("must fail");
        assert!(err.to_string().contains("broken.dcm.xml"));
    }
}
