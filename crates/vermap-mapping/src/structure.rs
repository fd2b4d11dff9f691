//! Structural metadata read from a class mapping.
//!
//! Only what the loggable driver consumes is derived: the root kind, the
//! identifier fields, and association ownership.

use std::sync::Arc;

use vermap_core::{AssociationKind, AssociationMapping, EntityKind, EntityMetadata};

use crate::element::MappingElement;
use crate::error::DocumentError;
use crate::loader::{MappingSource, XmlMappingLoader};

const ASSOCIATION_TAGS: &[&str] = &[
    "many-to-one",
    "one-to-one",
    "one-to-many",
    "many-to-many",
    "reference-one",
    "reference-many",
];

/// Supplies structural metadata for class names.
pub trait MetadataSource {
    fn has_metadata_for(&self, class_name: &str) -> bool;

    /// # Errors
    ///
    /// Returns a [`DocumentError`] when the class mapping cannot be read.
    fn metadata_for(&self, class_name: &str) -> Result<EntityMetadata, DocumentError>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn has_metadata_for(&self, class_name: &str) -> bool {
        (**self).has_metadata_for(class_name)
    }

    fn metadata_for(&self, class_name: &str) -> Result<EntityMetadata, DocumentError> {
        (**self).metadata_for(class_name)
    }
}

impl<T: MetadataSource + ?Sized> MetadataSource for Arc<T> {
    fn has_metadata_for(&self, class_name: &str) -> bool {
        (**self).has_metadata_for(class_name)
    }

    fn metadata_for(&self, class_name: &str) -> Result<EntityMetadata, DocumentError> {
        (**self).metadata_for(class_name)
    }
}

/// A class counts as mapped unless no mapping file exists for it. A mapping
/// that exists but cannot be read is reported by [`MetadataSource::metadata_for`].
impl MetadataSource for XmlMappingLoader {
    fn has_metadata_for(&self, class_name: &str) -> bool {
        !matches!(
            self.mapping_for(class_name),
            Err(DocumentError::MappingNotFound { .. })
        )
    }

    fn metadata_for(&self, class_name: &str) -> Result<EntityMetadata, DocumentError> {
        let mapping = self.mapping_for(class_name)?;
        read_entity_metadata(class_name, mapping.as_ref())
    }
}

/// Derive [`EntityMetadata`] from the mapping root of `class_name`.
///
/// # Errors
///
/// Returns [`DocumentError::UnsupportedRoot`] when the root tag is not a
/// class mapping.
pub fn read_entity_metadata<E: MappingElement>(
    class_name: &str,
    root: &E,
) -> Result<EntityMetadata, DocumentError> {
    let kind = EntityKind::from_tag(root.name()).ok_or_else(|| DocumentError::UnsupportedRoot {
        class: class_name.to_string(),
        tag: root.name().to_string(),
    })?;
    let name = root
        .attribute("name")
        .unwrap_or(class_name)
        .trim_start_matches('\\');

    let identifier = root
        .children("id")
        .map(|id| {
            ["name", "field-name", "field"]
                .iter()
                .find_map(|attr| id.attribute(attr))
                .unwrap_or("id")
                .to_string()
        })
        .collect::<Vec<_>>();

    let mut meta = EntityMetadata::new(name, kind).with_identifier(identifier);
    for tag in ASSOCIATION_TAGS {
        let Some(kind) = AssociationKind::from_tag(tag) else {
            continue;
        };
        for element in root.children(tag) {
            let Some(field) = element.attribute("field").or_else(|| element.attribute("name"))
            else {
                continue;
            };
            let target = element
                .attribute("target-entity")
                .or_else(|| element.attribute("target-document"))
                .map(str::to_string);
            meta.associations.insert(
                field.to_string(),
                AssociationMapping {
                    kind,
                    target,
                    is_owning_side: is_owning_side(kind, element),
                },
            );
        }
    }

    Ok(meta)
}

fn is_owning_side<E: MappingElement>(kind: AssociationKind, element: &E) -> bool {
    match kind {
        AssociationKind::ManyToOne => true,
        AssociationKind::OneToMany => false,
        AssociationKind::OneToOne
        | AssociationKind::ManyToMany
        | AssociationKind::ReferenceOne
        | AssociationKind::ReferenceMany => !element.has_attribute("mapped-by"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::locator::FileLocator;
    use crate::xml::XmlElement;
    use crate::DEFAULT_FILE_EXTENSION;

    fn root_of(body: &str, tag: &str) -> XmlElement {
        let source = format!(
            r#"<doctrine-mapping xmlns="http://doctrine-project.org/schemas/orm/doctrine-mapping">
<{tag} name="App\Entity\Subject">{body}</{tag}>
</doctrine-mapping>"#
        );
        let document = XmlElement::parse(&source, "inline").expect("parses");
        document.children(tag).next().cloned().expect("class element")
    }

    #[rstest]
    #[case("entity", EntityKind::Entity)]
    #[case("document", EntityKind::Document)]
    #[case("mapped-superclass", EntityKind::MappedSuperclass)]
    #[case("embeddable", EntityKind::Embeddable)]
    #[case("embedded-document", EntityKind::EmbeddedDocument)]
    fn kind_follows_root_tag(#[case] tag: &str, #[case] expected: EntityKind) {
        let meta = read_entity_metadata("App\\Entity\\Subject", &root_of("", tag)).expect("reads");
        assert_eq!(meta.kind, expected);
        assert_eq!(meta.name, "App\\Entity\\Subject");
    }

    #[test]
    fn identifier_collects_every_id() {
        let meta = read_entity_metadata(
            "App\\Entity\\Subject",
            &root_of(
                r#"<id name="article" association-key="true"/><id name="locale"/>"#,
                "entity",
            ),
        )
        .expect("reads");
        assert_eq!(meta.identifier, vec!["article", "locale"]);
        assert!(meta.has_composite_identifier());
    }

    #[test]
    fn odm_id_without_name_defaults_to_id() {
        let meta = read_entity_metadata("App\\Entity\\Subject", &root_of("<id/>", "document"))
            .expect("reads");
        assert_eq!(meta.identifier, vec!["id"]);
    }

    #[test]
    fn ownership_follows_association_kind_and_mapped_by() {
        let meta = read_entity_metadata(
            "App\\Entity\\Subject",
            &root_of(
                r#"
<many-to-one field="author" target-entity="User" inversed-by="articles"/>
<one-to-one field="cover" target-entity="Image"/>
<one-to-one field="draft" target-entity="Draft" mapped-by="subject"/>
<one-to-many field="comments" target-entity="Comment" mapped-by="subject"/>
<many-to-many field="tags" target-entity="Tag" inversed-by="subjects"/>
"#,
                "entity",
            ),
        )
        .expect("reads");

        assert!(meta.is_owning_side("author"));
        assert!(meta.is_owning_side("cover"));
        assert!(!meta.is_owning_side("draft"));
        assert!(!meta.is_owning_side("comments"));
        assert!(meta.is_owning_side("tags"));
        assert_eq!(
            meta.associations["author"].target.as_deref(),
            Some("User")
        );
    }

    #[test]
    fn unreadable_mapping_still_counts_as_mapped() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("App.Base.dcm.xml"), "<doctrine-mapping><entity")
            .expect("write");
        let loader = XmlMappingLoader::new(FileLocator::new(
            vec![dir.path().to_path_buf()],
            DEFAULT_FILE_EXTENSION,
        ));

        assert!(loader.has_metadata_for("App\\Base"));
        assert!(matches!(
            loader.metadata_for("App\\Base"),
            Err(DocumentError::Parse { .. })
        ));
        assert!(!loader.has_metadata_for("App\\Missing"));
    }

    #[test]
    fn unsupported_root_is_rejected() {
        let root = XmlElement::parse("<doctrine-mapping/>", "inline").expect("parses");
        assert!(matches!(
            read_entity_metadata("App\\Nothing", &root),
            Err(DocumentError::UnsupportedRoot { .. })
        ));
    }
}
