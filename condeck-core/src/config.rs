//! Global condeck configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CondeckError, CondeckResult};

static DEFAULT_DATA_PATH: &str = "~/.condeck";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/condeck/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct CondeckConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,
}

impl Default for CondeckConfig {
    fn default() -> Self {
        CondeckConfig {
            data_dir: default_data_path(),
        }
    }
}

impl CondeckConfig {
    pub fn config_path() -> CondeckResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CondeckError::Config("Could not determine config directory".into()))?
            .join("condeck");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> CondeckResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(config_path: &Path) -> CondeckResult<Self> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
        }

        let config: CondeckConfig = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CondeckError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CondeckError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The data directory in display-friendly form, keeping `~` instead of
    /// expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Save the current config to ~/.config/condeck/config.toml
    pub fn save(&self) -> CondeckResult<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, config_path: &Path) -> CondeckResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CondeckError::Config(e.to_string()))?;

        std::fs::write(config_path, content)
            .map_err(|e| CondeckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CondeckResult<()> {
        let contents = format!(
            "\
# condeck configuration

# Where your contest list lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CondeckError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CondeckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_and_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = CondeckConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.data_dir, default_data_path());

        // Everything in the generated file is commented out.
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# data_dir"));
    }

    #[test]
    fn configured_data_dir_overrides_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/contests\"\n").unwrap();

        let config = CondeckConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/contests"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = CondeckConfig {
            data_dir: PathBuf::from("/srv/contests"),
        };
        config.save_to(&path).unwrap();

        let back = CondeckConfig::load_from(&path).unwrap();
        assert_eq!(back.data_dir, config.data_dir);
    }

    #[test]
    fn data_path_expands_tilde_but_display_path_keeps_it() {
        let config = CondeckConfig::default();

        assert_eq!(config.display_path(), PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!config.data_path().to_string_lossy().contains('~'));
    }
}
