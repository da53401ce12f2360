//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
//! 3. Environment variables: `COURSECAT_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Catalog file consulted when neither `--file` nor a configured path
/// is given.
pub const DEFAULT_CATALOG: &str = "courses.csv";

/// Merged settings after all layers are applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog file used when no `--file` argument is given
    pub catalog: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so unset layers fall through to the defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    catalog: Option<PathBuf>,
}

impl Settings {
    /// Path of the global config file, `None` when the platform has no
    /// config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "coursecat")
            .map(|dirs| dirs.config_dir().join("coursecat.toml"))
    }

    /// Load settings from all layers.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("COURSECAT"));

        let raw: RawSettings = builder.build()?.try_deserialize()?;
        let defaults = Self::default();
        Ok(Self {
            catalog: raw.catalog.unwrap_or(defaults.catalog),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_layers_then_defaults_apply() {
        let settings = Settings::default();
        assert_eq!(settings.catalog, PathBuf::from(DEFAULT_CATALOG));
    }

    #[test]
    fn given_settings_when_rendering_then_round_trips_through_toml() {
        let settings = Settings {
            catalog: PathBuf::from("planner/catalog.csv"),
        };
        let rendered = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, settings);
    }
}
