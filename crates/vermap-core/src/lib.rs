//! # vermap-core
//!
//! Core types shared across the vermap crates.
//!
//! This crate provides:
//! - `EntityMetadata`: the structural view of a mapped class (identifier,
//!   association ownership, mapped-superclass / embeddable flags)
//! - `VersioningConfig`: the loggable configuration derived for one class
//! - Class-name resolution against a registry of known classes
//! - `InvalidMapping`: the error kind raised for incoherent mapping metadata

pub mod class_name;
pub mod entity;
pub mod errors;
pub mod versioning;

pub use class_name::{ClassRegistry, ClassResolver, namespace_of, resolve_related_class};
pub use entity::{AssociationKind, AssociationMapping, EntityKind, EntityMetadata};
pub use errors::InvalidMapping;
pub use versioning::VersioningConfig;
