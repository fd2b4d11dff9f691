//! Structural metadata of a mapped class.
//!
//! This is the read-only view the loggable driver consumes: which fields form
//! the identifier, what kind of class is mapped, and which side of each
//! association owns the relationship.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root kind of a class mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Entity,
    Document,
    MappedSuperclass,
    Embeddable,
    EmbeddedDocument,
}

impl EntityKind {
    /// Map a mapping-document root tag to its kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "entity" => Some(Self::Entity),
            "document" => Some(Self::Document),
            "mapped-superclass" => Some(Self::MappedSuperclass),
            "embeddable" => Some(Self::Embeddable),
            "embedded-document" => Some(Self::EmbeddedDocument),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Document => "document",
            Self::MappedSuperclass => "mapped-superclass",
            Self::Embeddable => "embeddable",
            Self::EmbeddedDocument => "embedded-document",
        }
    }

    /// Value objects inlined into an owning class.
    #[must_use]
    pub const fn is_embeddable(self) -> bool {
        matches!(self, Self::Embeddable | Self::EmbeddedDocument)
    }
}

/// Kind of an association declaration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AssociationKind {
    ManyToOne,
    OneToOne,
    OneToMany,
    ManyToMany,
    ReferenceOne,
    ReferenceMany,
}

impl AssociationKind {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "many-to-one" => Some(Self::ManyToOne),
            "one-to-one" => Some(Self::OneToOne),
            "one-to-many" => Some(Self::OneToMany),
            "many-to-many" => Some(Self::ManyToMany),
            "reference-one" => Some(Self::ReferenceOne),
            "reference-many" => Some(Self::ReferenceMany),
            _ => None,
        }
    }
}

/// One association field of a class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssociationMapping {
    pub kind: AssociationKind,
    pub target: Option<String>,
    /// Whether this side holds the authoritative relationship state.
    pub is_owning_side: bool,
}

/// Structural metadata for one mapped class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityMetadata {
    /// Fully-qualified class name, `\`-separated.
    pub name: String,
    pub kind: EntityKind,
    /// Identifier field names. More than one means a composite identifier.
    #[serde(default)]
    pub identifier: Vec<String>,
    #[serde(default)]
    pub associations: BTreeMap<String, AssociationMapping>,
    /// Ancestor classes, nearest parent first.
    #[serde(default)]
    pub parent_classes: Vec<String>,
}

impl EntityMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            identifier: Vec::new(),
            associations: BTreeMap::new(),
            parent_classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_identifier<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifier = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_association(
        mut self,
        field: impl Into<String>,
        kind: AssociationKind,
        is_owning_side: bool,
    ) -> Self {
        self.associations.insert(
            field.into(),
            AssociationMapping {
                kind,
                target: None,
                is_owning_side,
            },
        );
        self
    }

    #[must_use]
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_classes = parents.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn is_mapped_superclass(&self) -> bool {
        matches!(self.kind, EntityKind::MappedSuperclass)
    }

    #[must_use]
    pub const fn is_embeddable(&self) -> bool {
        self.kind.is_embeddable()
    }

    #[must_use]
    pub fn has_composite_identifier(&self) -> bool {
        self.identifier.len() > 1
    }

    /// Whether `field` is an association whose owning side is this class.
    ///
    /// Unknown fields are treated as non-owning.
    #[must_use]
    pub fn is_owning_side(&self, field: &str) -> bool {
        self.associations
            .get(field)
            .is_some_and(|mapping| mapping.is_owning_side)
    }

    /// Namespace part of the class name, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        crate::class_name::namespace_of(&self.name)
    }
}
