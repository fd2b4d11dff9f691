use vermap_core::{AssociationKind, ClassRegistry, EntityKind};
use vermap_mapping::{DEFAULT_FILE_EXTENSION, FileLocator, MetadataSource, XmlMappingLoader};

use super::*;


const FIXTURES: &[(&str, &str)] = &[
    (
        "App.Entity.Article.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.Article.dcm.xml"),
    ),
    (
        "App.Entity.Address.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.Address.dcm.xml"),
    ),
    (
        "App.Entity.ArticleLogEntry.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.ArticleLogEntry.dcm.xml"),
    ),
    (
        "App.Entity.Comment.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.Comment.dcm.xml"),
    ),
    (
        "App.Entity.User.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.User.dcm.xml"),
    ),
    (
        "App.Entity.BaseContent.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.BaseContent.dcm.xml"),
    ),
    (
        "App.Entity.Page.dcm.xml",
        include_str!("../../../tests/fixtures/App.Entity.Page.dcm.xml"),
    ),
    (
        "App.Document.Post.dcm.xml",
        include_str!("../../../tests/fixtures/App.Document.Post.dcm.xml"),
    ),
];

fn empty_loader() -> XmlMappingLoader {
    XmlMappingLoader::new(FileLocator::new(Vec::new(), DEFAULT_FILE_EXTENSION))
}

fn fixture_loader() -> XmlMappingLoader {
    let loader = empty_loader();
    for (origin, source) in FIXTURES {
        loader
            .load_str(source, origin)
            .unwrap_or_else(|error| panic!("fixture {origin} should load: {error}"));
    }
    loader
}

/// Wrap class elements in an ORM mapping document with the extension
/// namespace bound to `gedmo`.
fn mapping_document(class_elements: &str) -> String {
    format!(
        r#"<doctrine-mapping xmlns="http://doctrine-project.org/schemas/orm/doctrine-mapping"
                  xmlns:gedmo="http://gediminasm.org/schemas/orm/doctrine-extensions-mapping">
{class_elements}
</doctrine-mapping>"#
    )
}

/// Fixture loader plus the given inline class elements.
fn loader_with(class_elements: &str) -> XmlMappingLoader {
    let loader = fixture_loader();
    loader
        .load_str(&mapping_document(class_elements), "inline")
        .expect("inline mapping should load");
    loader
}

fn known_classes() -> ClassRegistry {
    [
        "App\\Entity\\Article",
        "App\\Entity\\ArticleLogEntry",
        "App\\Entity\\Comment",
        "App\\Entity\\User",
        "App\\Document\\Post",
        "App\\Document\\PostLogEntry",
    ]
    .into_iter()
    .collect()
}

fn driver(loader: &XmlMappingLoader) -> LoggableXmlDriver<&XmlMappingLoader, ClassRegistry> {
    LoggableXmlDriver::new(loader, known_classes())
}

/// Extract `class` using the structural metadata read from its own mapping.
fn extract(loader: &XmlMappingLoader, class: &str) -> Result<VersioningConfig, LoggableError> {
    let meta = loader
        .metadata_for(class)
        .unwrap_or_else(|error| panic!("metadata for {class}: {error}"));
    driver(loader).extract(&meta)
}

fn expect_invalid(result: Result<VersioningConfig, LoggableError>) -> InvalidMapping {
    match result {
        Err(LoggableError::Invalid(invalid)) => invalid,
        other => panic!("expected an invalid mapping, got {other:?}"),
    }
}
