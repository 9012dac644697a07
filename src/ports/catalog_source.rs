//! Catalog Source Port - where vendor records come from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::VendorCatalog;
use crate::domain::foundation::ValidationError;

/// Errors from loading or persisting a vendor catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store does not exist.
    #[error("catalog not found at {path}")]
    NotFound { path: String },

    /// The store was reachable but could not be read or written.
    #[error("catalog I/O failed: {0}")]
    Io(String),

    /// The store's content is not a valid catalog document.
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// The document parsed but violates catalog invariants.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Port for loading and persisting the vendor catalog.
///
/// # Contract
///
/// Implementations must:
/// - Return a validated catalog from `load` (ids unique, records complete)
/// - Persist atomically enough that a failed `save` never leaves a
///   half-written catalog behind
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads and validates the full catalog.
    async fn load(&self) -> Result<VendorCatalog, CatalogError>;

    /// Persists the catalog.
    async fn save(&self, catalog: &VendorCatalog) -> Result<(), CatalogError>;
}
