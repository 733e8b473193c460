//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default rounding interval, in the same syntax as `--interval`.
    pub interval: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: "5m".to_string(),
        }
    }
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

        // Load from environment variables (TF_*)
        figment = figment.merge(Env::prefixed("TF_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for tf.
///
/// On Linux: `~/.config/tf`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn test_default_interval_is_five_minutes() {
        assert_eq!(Config::default().interval, "5m");
    }

    #[test]
    fn test_config_file_overrides_default() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"interval = "15m""#)?;
            let config = Config::load_from(Some(Path::new("custom.toml")))?;
            assert_eq!(config.interval, "15m");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"interval = "15m""#)?;
            jail.set_env("TF_INTERVAL", "1h");
            let config = Config::load_from(Some(Path::new("custom.toml")))?;
            assert_eq!(config.interval, "1h");
            Ok(())
        });
    }

    #[test]
    fn test_dirs_config_path_ends_with_tf() {
        if let Some(path) = dirs_config_path() {
            assert_eq!(path.file_name().unwrap(), "tf");
        }
    }
}
