//! # vermap-config
//!
//! Layered configuration loading for vermap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERMAP_*` prefix, `__` as separator)
//! 2. Project-level `.vermap/config.toml`
//! 3. User-level `~/.config/vermap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERMAP_MAPPING__FILE_EXTENSION` -> `mapping.file_extension`,
//! `VERMAP_GENERAL__FAIL_FAST` -> `general.fail_fast`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vermap_config::VermapConfig;
//!
//! let config = VermapConfig::load_with_dotenv().expect("config");
//! if config.mapping.is_configured() {
//!     println!("mapping dirs: {:?}", config.mapping.paths);
//! }
//! ```

mod error;
mod general;
mod mapping;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use mapping::MappingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VermapConfig {
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VermapConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.mapping.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".vermap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERMAP_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vermap").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VermapConfig::default();
        assert!(!config.mapping.is_configured());
        assert!(!config.general.fail_fast);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = VermapConfig::figment();
        let config: VermapConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.mapping.file_extension, ".dcm.xml");
    }
}
