//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use vermap_config::VermapConfig;

#[test]
fn loads_mapping_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mapping]
paths = ["config/doctrine", "vendor/acme/mapping"]
file_extension = ".orm.xml"
known_classes = ['Acme\Loggable\LogEntry']

[general]
fail_fast = true
"#,
        )?;

        let config: VermapConfig = Figment::from(Serialized::defaults(VermapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.mapping.paths,
            vec![
                PathBuf::from("config/doctrine"),
                PathBuf::from("vendor/acme/mapping")
            ]
        );
        assert_eq!(config.mapping.file_extension, ".orm.xml");
        assert_eq!(config.mapping.known_classes, vec!["Acme\\Loggable\\LogEntry"]);
        assert!(config.mapping.is_configured());
        assert!(config.general.fail_fast);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_namespace_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mapping]
paths = ["mapping"]
"#,
        )?;

        let config: VermapConfig = Figment::from(Serialized::defaults(VermapConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.mapping.file_extension, ".dcm.xml");
        assert_eq!(config.mapping.mapping_namespaces.len(), 2);
        assert!(!config.general.fail_fast);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vermap")?;
        jail.create_file(
            ".vermap/config.toml",
            r#"
[mapping]
extension_namespace = "urn:acme:extensions"
"#,
        )?;

        let config = VermapConfig::load().expect("config loads");
        assert_eq!(config.mapping.extension_namespace, "urn:acme:extensions");
        Ok(())
    });
}

#[test]
fn invalid_value_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vermap")?;
        jail.create_file(
            ".vermap/config.toml",
            r#"
[mapping]
file_extension = ""
"#,
        )?;

        let err = VermapConfig::load().expect_err("empty extension is rejected");
        assert!(err.to_string().contains("mapping.file_extension"));
        Ok(())
    });
}
