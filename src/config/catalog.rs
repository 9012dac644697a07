//! Vendor catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the vendor catalog JSON lives.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyCatalogPath);
        }
        if self.path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(ValidationError::CatalogPathNotJson);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/vendors.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_validates() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_path_fails_validation() {
        let config = CatalogConfig {
            path: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyCatalogPath)
        ));
    }

    #[test]
    fn non_json_path_fails_validation() {
        let config = CatalogConfig {
            path: PathBuf::from("data/vendors.yaml"),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogPathNotJson)
        ));
    }
}
