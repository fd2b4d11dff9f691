use figment::Jail;
use vermap_config::VermapConfig;

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vermap")?;
        jail.create_file(
            ".vermap/config.toml",
            r#"
[mapping]
file_extension = ".orm.xml"
"#,
        )?;
        jail.set_env("VERMAP_MAPPING__FILE_EXTENSION", ".dcm.xml");
        jail.set_env("VERMAP_GENERAL__FAIL_FAST", "true");

        let config = VermapConfig::load().expect("config loads");
        assert_eq!(config.mapping.file_extension, ".dcm.xml");
        assert!(config.general.fail_fast);
        Ok(())
    });
}

#[test]
fn env_sets_mapping_paths_as_array() {
    Jail::expect_with(|jail| {
        jail.set_env("VERMAP_MAPPING__PATHS", "[\"one\", \"two\"]");

        let config = VermapConfig::load().expect("config loads");
        assert_eq!(config.mapping.paths.len(), 2);
        assert!(config.mapping.is_configured());
        Ok(())
    });
}
