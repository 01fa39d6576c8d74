use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{finder::Strategy, report::OutputFormat};

const APP_NAME: &str = "pair-sum";

pub const DEFAULT_BASE_URL: &str = "https://leetcode.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_strategy: Strategy,
    pub output_format: OutputFormat,
    pub base_url: String,
    pub cases_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::default(),
            output_format: OutputFormat::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cases_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = confy::load_path(path)?;
        tracing::debug!(?config, path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        confy::store_path(path, self)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Directory where fetched case files are written; current dir when unset.
    pub fn cases_dir(&self) -> PathBuf {
        self.cases_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn strategy_or_default(&self, strategy: Option<Strategy>) -> Strategy {
        strategy.unwrap_or(self.default_strategy)
    }

    pub fn format_or_default(&self, format: Option<OutputFormat>) -> OutputFormat {
        format.unwrap_or(self.output_format)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_path)
}

pub fn reset_config() -> Result<Config> {
    reset_config_at(&get_config_path()?)
}

/// Overwrite the file at `path` with defaults without reading it first,
/// so an unreadable config can still be recovered.
pub fn reset_config_at(path: &Path) -> Result<Config> {
    let config = Config::default();
    config.save_to(path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_strategy, Strategy::Complement);
        assert_eq!(config.output_format, OutputFormat::Indices);
        assert_eq!(config.base_url, "https://leetcode.com");
        assert!(config.cases_dir.is_none());
    }

    #[test]
    fn test_cases_dir_with_path() {
        let test_path = PathBuf::from("/test/cases");
        let config = Config {
            cases_dir: Some(test_path.clone()),
            ..Default::default()
        };
        assert_eq!(config.cases_dir(), test_path);
    }

    #[test]
    fn test_cases_dir_default() {
        let config = Config::default();
        // Falls back to the current directory when unset
        assert!(config.cases_dir().exists());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config {
            default_strategy: Strategy::BruteForce,
            output_format: OutputFormat::Bracket,
            ..Default::default()
        };
        assert_eq!(config.strategy_or_default(None), Strategy::BruteForce);
        assert_eq!(
            config.strategy_or_default(Some(Strategy::Complement)),
            Strategy::Complement
        );
        assert_eq!(config.format_or_default(None), OutputFormat::Bracket);
        assert_eq!(
            config.format_or_default(Some(OutputFormat::Indices)),
            OutputFormat::Indices
        );
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            default_strategy: Strategy::BruteForce,
            output_format: OutputFormat::Bracket,
            base_url: "http://localhost:8080".to_string(),
            cases_dir: Some(PathBuf::from("/cases")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let deserialized: Config =
            serde_json::from_str(r#"{"default_strategy": "brute-force"}"#).unwrap();
        assert_eq!(deserialized.default_strategy, Strategy::BruteForce);
        assert_eq!(deserialized.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pair-sum.toml");

        let config = Config {
            default_strategy: Strategy::BruteForce,
            cases_dir: Some(PathBuf::from("/cases")),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_reset_recovers_unreadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pair-sum.toml");
        fs::write(&path, "default_strategy = \"hash\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());

        let config = reset_config_at(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
