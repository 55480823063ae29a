use super::schema::ExtestConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Overrides `code_version` from any config file.
pub const CODE_VERSION_ENV: &str = "EXTEST_CODE_VERSION";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./extest.yaml
    /// 2. ~/.extest/config.yaml
    /// 3. Default configuration
    ///
    /// `EXTEST_CODE_VERSION` is applied on top.
    pub async fn load_default() -> Result<ExtestConfig, ConfigError> {
        let local_config = PathBuf::from("./extest.yaml");
        if local_config.exists() {
            return Self::load(&local_config).await;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".extest").join("config.yaml");
            if home_config.exists() {
                return Self::load(&home_config).await;
            }
        }

        Ok(Self::apply_env(ExtestConfig::default()))
    }

    /// Load `path` and apply environment overrides.
    pub async fn load(path: &Path) -> Result<ExtestConfig, ConfigError> {
        Ok(Self::apply_env(Self::load_from(path).await?))
    }

    /// Load `path` as-is.
    pub async fn load_from(path: &Path) -> Result<ExtestConfig, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Ok(ExtestConfig::default());
        }
        let config: ExtestConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply_env(mut config: ExtestConfig) -> ExtestConfig {
        if let Ok(version) = std::env::var(CODE_VERSION_ENV)
            && !version.trim().is_empty()
        {
            debug!("{} overrides code_version with {}", CODE_VERSION_ENV, version);
            config.code_version = Some(version);
        }
        config
    }
}
