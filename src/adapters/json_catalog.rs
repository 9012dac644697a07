//! JSON-file implementation of the catalog source port.
//!
//! The catalog lives in a single JSON document. Loads validate the whole
//! catalog before handing it to callers; saves go through a sibling temp
//! file and an atomic rename so a crashed write never corrupts the catalog.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::catalog::VendorCatalog;
use crate::ports::{CatalogError, CatalogSource};

/// Catalog source backed by a JSON file on local disk.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Result<VendorCatalog, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: self.path.display().to_string(),
                }
            } else {
                CatalogError::Io(e.to_string())
            }
        })?;

        let catalog: VendorCatalog =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        catalog.validate()?;

        debug!(
            path = %self.path.display(),
            vendors = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    async fn save(&self, catalog: &VendorCatalog) -> Result<(), CatalogError> {
        catalog.validate()?;

        let serialized = serde_json::to_string_pretty(catalog)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serialized)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?;

        debug!(
            path = %self.path.display(),
            vendors = catalog.len(),
            "catalog saved"
        );
        Ok(())
    }
}
