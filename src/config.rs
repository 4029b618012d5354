//! Configuration for the Mind Matters companion
//!
//! Settings live in a TOML file (default `~/.config/mind-matters/config.toml`):
//!
//! ```toml
//! [recommendation]
//! top_k = 3
//!
//! [catalog]
//! activities_path = "activities.toml"
//! tips_path = "tips.toml"
//!
//! [storage]
//! data_path = "/home/me/.local/share/mind-matters/data.json"
//! ```
//!
//! [`CompanionConfig::load_layered`] additionally applies environment
//! overrides such as `MIND_MATTERS__RECOMMENDATION__TOP_K=5`.

use crate::error::{MindMattersError, Result};
use crate::recommendation::{ActivityCatalog, Recommender, DEFAULT_TOP_K};
use crate::tips::TipCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable prefix for layered configuration
pub const ENV_PREFIX: &str = "MIND_MATTERS";

/// Default configuration file location
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mind-matters")
        .join("config.toml")
}

/// Default data file location
pub fn default_data_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mind-matters")
        .join("data.json")
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanionConfig {
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Ranking settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Number of activities returned per assessment
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Optional replacements for the built-in catalogs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips_path: Option<PathBuf>,
}

/// Where the CLI keeps users and mood history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl CompanionConfig {
    /// Load configuration from a TOML file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            MindMattersError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config file: {}", e),
            ))
        })?;

        let config: CompanionConfig = toml::from_str(&content)?;
        config.validate()?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load the file (if present) and then apply `MIND_MATTERS__*` variables
    pub fn load_layered(path: &Path) -> Result<Self> {
        let config: CompanionConfig = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!("Resolved layered configuration: {:?}", config);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MindMattersError::Other(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MindMattersError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create config directory: {}", e),
                ))
            })?;
        }

        std::fs::write(path, content)?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Reject settings the recommender cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.recommendation.top_k == 0 {
            return Err(MindMattersError::Config(config::ConfigError::Message(
                "recommendation.top_k must be at least 1".to_string(),
            )));
        }
        Ok(())
    }

    /// Activity catalog: the configured file, or the built-in one
    pub fn activity_catalog(&self) -> Result<ActivityCatalog> {
        match &self.catalog.activities_path {
            Some(path) => ActivityCatalog::load(path),
            None => Ok(ActivityCatalog::default()),
        }
    }

    /// Tip catalog: the configured file, or the built-in one
    pub fn tip_catalog(&self) -> Result<TipCatalog> {
        match &self.catalog.tips_path {
            Some(path) => TipCatalog::load(path),
            None => Ok(TipCatalog::default()),
        }
    }

    /// Recommender built from the configured catalog and top-k
    pub fn recommender(&self) -> Result<Recommender> {
        Ok(Recommender::new(self.activity_catalog()?).with_top_k(self.recommendation.top_k))
    }

    /// Data file for the snapshot store
    pub fn data_path(&self) -> PathBuf {
        self.storage
            .data_path
            .clone()
            .unwrap_or_else(default_data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CompanionConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, CompanionConfig::default());
        assert_eq!(config.recommendation.top_k, 3);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recommendation]\ntop_k = 5\n").unwrap();

        let config = CompanionConfig::load(&path).unwrap();
        assert_eq!(config.recommendation.top_k, 5);
        assert!(config.catalog.activities_path.is_none());
        assert_eq!(config.recommender().unwrap().top_k(), 5);
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recommendation]\ntop_k = 0\n").unwrap();

        assert!(matches!(
            CompanionConfig::load(&path),
            Err(MindMattersError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recommendation\ntop_k = ").unwrap();

        assert!(matches!(
            CompanionConfig::load(&path),
            Err(MindMattersError::TomlParse(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CompanionConfig::default();
        config.recommendation.top_k = 4;
        config.storage.data_path = Some(dir.path().join("data.json"));
        config.save(&path).unwrap();

        let reloaded = CompanionConfig::load(&path).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.data_path(), dir.path().join("data.json"));
    }

    #[test]
    fn test_layered_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recommendation]\ntop_k = 2\n").unwrap();

        let config = CompanionConfig::load_layered(&path).unwrap();
        assert_eq!(config.recommendation.top_k, 2);
    }

    #[test]
    fn test_catalog_paths() {
        let dir = TempDir::new().unwrap();
        let activities = dir.path().join("activities.toml");
        std::fs::write(
            &activities,
            ActivityCatalog::default().to_toml_string().unwrap(),
        )
        .unwrap();

        let mut config = CompanionConfig::default();
        config.catalog.activities_path = Some(activities);
        assert_eq!(config.activity_catalog().unwrap(), ActivityCatalog::default());

        config.catalog.tips_path = Some(dir.path().join("missing.toml"));
        assert!(config.tip_catalog().is_err());
    }
}
