use vermap_config::VermapConfig;

use crate::cli::GlobalFlags;

/// Emit warnings for mapping settings that leave nothing to discover.
pub fn warn_unconfigured(config: &VermapConfig, flags: &GlobalFlags) {
    for warning in collect_unconfigured_warnings(config, flags, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VermapConfig, flags: &GlobalFlags, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    if !flags.mapping_dirs.is_empty() || config.mapping.is_configured() {
        return Vec::new();
    }

    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    if env_keys.iter().any(|key| key.starts_with("VERMAP_MAPPING")) {
        return vec![
            "mapping config appears default while VERMAP_MAPPING* env vars exist. Use double underscores (example: VERMAP_MAPPING__PATHS)."
                .to_string(),
        ];
    }

    vec!["no mapping directories configured; pass --mapping-dir or set mapping.paths".to_string()]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use vermap_config::{MappingConfig, VermapConfig};

    use super::collect_unconfigured_warnings;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(mapping_dirs: Vec<PathBuf>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            mapping_dirs,
        }
    }

    #[test]
    fn warns_for_single_underscore_env_keys() {
        let warnings = collect_unconfigured_warnings(
            &VermapConfig::default(),
            &flags(Vec::new()),
            vec![("VERMAP_MAPPING_PATHS".to_string(), "config".to_string())],
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("double underscores"));
    }

    #[test]
    fn warns_when_nothing_is_configured() {
        let warnings =
            collect_unconfigured_warnings(&VermapConfig::default(), &flags(Vec::new()), Vec::new());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn silent_when_paths_are_configured() {
        let config = VermapConfig {
            mapping: MappingConfig {
                paths: vec![PathBuf::from("config/doctrine")],
                ..MappingConfig::default()
            },
            ..VermapConfig::default()
        };
        assert!(collect_unconfigured_warnings(&config, &flags(Vec::new()), Vec::new()).is_empty());
        assert!(
            collect_unconfigured_warnings(
                &VermapConfig::default(),
                &flags(vec![PathBuf::from("mappings")]),
                Vec::new()
            )
            .is_empty()
        );
    }
}
