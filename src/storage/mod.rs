//! Catalog sources.
//!
//! The hub consumes the catalog as a read-only payload obtained once per
//! session. Where it comes from is decided here:
//!
//! - [`BuiltinSource`]: the compiled-in faculty data
//! - [`LocalSource`]: a `.toml` or `.json` catalog file on disk
//!
//! ## Catalog file layout
//!
//! ```text
//! [[departments]]          # id, name, codes, description, contacts
//! [[services]]             # id, title, category, description, details, steps
//! [[news]]                 # id, title, summary, content, date, category, priority
//! [[programs]]             # code, description, duration
//! [[guide]]                # number, title, description, content
//! ```

pub mod local;

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::CatalogConfig;

// Re-export for convenience
pub use local::LocalSource;

/// Trait for catalog providers.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the catalog for this session.
    async fn load(&self) -> Result<Catalog>;

    /// Human-readable description of the source, for logging.
    fn describe(&self) -> String;
}

/// The compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl CatalogSource for BuiltinSource {
    async fn load(&self) -> Result<Catalog> {
        Ok(Catalog::builtin())
    }

    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }
}

/// Pick the catalog source named by the configuration.
pub fn source_for(config: &CatalogConfig) -> Box<dyn CatalogSource> {
    match &config.path {
        Some(path) => Box::new(LocalSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}
