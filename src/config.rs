// src/config.rs

//! Configuration loading utilities.
//!
//! Loads the config file, resolves the catalog source it names and returns
//! both validated. The CLI calls the two halves separately so logging can be
//! set up from the config before the catalog is read.

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::models::Config;
use crate::storage::source_for;

/// Load and validate configuration from a TOML file.
///
/// A missing file falls back to defaults; a file that exists but does not
/// parse is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::warn!("Config not found at {:?}. Using defaults.", path);
        return Ok(Config::default());
    }
    let mut config = Config::load(path)?;

    // Catalog paths in the file are relative to the file itself
    if let (Some(catalog_path), Some(base)) = (config.catalog.path.as_mut(), path.parent()) {
        if catalog_path.is_relative() {
            *catalog_path = base.join(&*catalog_path);
        }
    }

    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid config {path:?}: {e}")))?;
    Ok(config)
}

/// Load the catalog from the source the config names.
pub async fn load_catalog(config: &Config) -> Result<Catalog> {
    let source = source_for(&config.catalog);
    log::info!("Loading {}", source.describe());
    let catalog = source.load().await?;
    log::info!(
        "Catalog ready: {} departments, {} services, {} news items",
        catalog.list_departments().len(),
        catalog.list_services().len(),
        catalog.list_news().len()
    );
    Ok(catalog)
}

/// Load and validate both config and catalog.
pub async fn load_all(config_path: &Path) -> Result<(Config, Catalog)> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(&config).await?;
    Ok((config, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_config_uses_builtin() {
        let dir = tempdir().unwrap();
        let (config, catalog) = load_all(&dir.path().join("config.toml")).await.unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(catalog, Catalog::builtin());
    }

    #[tokio::test]
    async fn test_relative_catalog_path() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("catalog.toml"),
            r#"
[[departments]]
id = "cs"
name = "Computer Science"
codes = ["DPMCF0"]
description = "Software and theory"
"#,
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[catalog]\npath = \"catalog.toml\"\n").unwrap();

        let (config, catalog) = load_all(&config_path).await.unwrap();
        assert_eq!(config.catalog.path, Some(dir.path().join("catalog.toml")));
        assert_eq!(catalog.list_departments().len(), 1);
        assert!(catalog.list_services().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[chat]\nmin_delay_ms = 5000\nmax_delay_ms = 1000\n",
        )
        .unwrap();

        let err = load_all(&config_path).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[chat\n").unwrap();

        let err = load_all(&config_path).await.unwrap_err();
        assert!(matches!(err, AppError::Toml(_)));
    }

    #[test]
    fn test_load_config_keeps_log_level() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.chat.simulate_delay);
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[catalog]\npath = \"nowhere.json\"\n").unwrap();

        let err = load_all(&config_path).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
