//! Local filesystem catalog source.
//!
//! The file format is chosen by extension: `.toml` or `.json`.
//! A loaded catalog is validated before it is handed out.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::storage::CatalogSource;

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Format::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            _ => Err(AppError::config(format!(
                "Unsupported catalog file {path:?}: expected .toml or .json"
            ))),
        }
    }
}

/// Catalog source reading a file from disk.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    /// Create a source for the given catalog file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse catalog text in the given format.
    fn parse(format: Format, content: &str) -> Result<Catalog> {
        let catalog: Catalog = match format {
            Format::Toml => toml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        };
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogSource for LocalSource {
    async fn load(&self) -> Result<Catalog> {
        let format = Format::from_path(&self.path)?;
        log::debug!("Reading {:?} catalog from {}", format, self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await?;
        let catalog = Self::parse(format, &content)?;
        catalog.validate()?;

        log::debug!(
            "Catalog loaded: {} departments, {} services, {} news items",
            catalog.list_departments().len(),
            catalog.list_services().len(),
            catalog.list_news().len()
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceCategory;
    use std::io::Write;

    const CATALOG_TOML: &str = r#"
[[departments]]
id = "cs"
name = "Computer Science"
codes = ["DPMC20"]
description = "Software"
email = "cs@example.ac.za"

[[services]]
id = "bursaries"
title = "Bursaries"
category = "All Students"
description = "Funding"
details = "Visit FUNDI"

[[news]]
id = "1"
title = "Datathon"
summary = "Event"
content = "Event details"
date = "2025-08-01"
category = "Event"
priority = "high"
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_toml_catalog() {
        let file = write_temp(".toml", CATALOG_TOML);
        let catalog = LocalSource::new(file.path()).load().await.unwrap();

        assert_eq!(catalog.list_departments().len(), 1);
        assert_eq!(
            catalog.list_departments()[0].email.as_deref(),
            Some("cs@example.ac.za")
        );
        assert_eq!(
            catalog.list_services()[0].category,
            ServiceCategory::AllStudents
        );
        assert!(!catalog.list_news()[0].is_urgent);
    }

    #[tokio::test]
    async fn test_load_json_catalog() {
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        let file = write_temp(".json", &json);
        let catalog = LocalSource::new(file.path()).load().await.unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[tokio::test]
    async fn test_rejects_unknown_category() {
        let bad = CATALOG_TOML.replace("All Students", "Staff");
        let file = write_temp(".toml", &bad);
        let result = LocalSource::new(file.path()).load().await;
        assert!(matches!(result, Err(AppError::Toml(_))));
    }

    #[tokio::test]
    async fn test_rejects_duplicate_ids() {
        let doubled = format!(
            "[[departments]]\nid = \"cs\"\nname = \"Again\"\ndescription = \"dup\"\n{CATALOG_TOML}"
        );
        let file = write_temp(".toml", &doubled);
        let result = LocalSource::new(file.path()).load().await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rejects_unsupported_extension() {
        let file = write_temp(".yaml", CATALOG_TOML);
        let result = LocalSource::new(file.path()).load().await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalSource::new(dir.path().join("missing.toml")).load().await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
