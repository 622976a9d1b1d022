//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Language of generated descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale of the description strings.
    pub locale: Locale,

    /// Render start times in the local zone instead of the session's offset.
    pub use_device_time_zone: bool,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (FAHRPLAN_*)
        figment = figment.merge(Env::prefixed("FAHRPLAN_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for fahrplan.
///
/// On Linux: `~/.config/fahrplan`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fahrplan"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_fahrplan() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "fahrplan");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locale, Locale::En);
        assert!(!config.use_device_time_zone);
    }

    #[test]
    fn test_explicit_config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locale = \"de\"\nuse_device_time_zone = true").unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();

        assert_eq!(config.locale, Locale::De);
        assert!(config.use_device_time_zone);
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locale = \"fr\"").unwrap();

        assert!(Config::load_from(Some(file.path())).is_err());
    }
}
