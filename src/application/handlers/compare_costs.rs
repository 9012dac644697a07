//! CompareCostsHandler - side-by-side TCO projection for selected vendors.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::cost::{compare_vendors_tco, TcoAssumptions, TcoProjection};
use crate::ports::{CatalogError, CatalogSource};

/// Query for a TCO comparison across named vendors.
#[derive(Debug, Clone)]
pub struct CompareCostsQuery {
    /// Catalog ids of the vendors to compare (at least one).
    pub vendor_ids: Vec<String>,
    pub assumptions: TcoAssumptions,
}

/// Projections sorted ascending by 5-year total.
pub type CompareCostsResult = Vec<TcoProjection>;

#[derive(Debug, Error)]
pub enum CompareCostsError {
    #[error("at least one vendor id is required")]
    NoVendorsRequested,
    #[error("unknown vendor id '{id}'")]
    VendorNotFound { id: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Handler resolving vendor ids against the catalog and projecting TCO.
pub struct CompareCostsHandler {
    catalog_source: Arc<dyn CatalogSource>,
}

impl CompareCostsHandler {
    pub fn new(catalog_source: Arc<dyn CatalogSource>) -> Self {
        Self { catalog_source }
    }

    pub async fn handle(
        &self,
        query: CompareCostsQuery,
    ) -> Result<CompareCostsResult, CompareCostsError> {
        if query.vendor_ids.is_empty() {
            return Err(CompareCostsError::NoVendorsRequested);
        }

        let catalog = self.catalog_source.load().await?;

        let mut vendors = Vec::with_capacity(query.vendor_ids.len());
        for id in &query.vendor_ids {
            let vendor = catalog
                .get_by_id(id)
                .ok_or_else(|| CompareCostsError::VendorNotFound { id: id.clone() })?;
            vendors.push(vendor.clone());
        }

        let projections = compare_vendors_tco(&vendors, &query.assumptions);

        info!(
            vendors = projections.len(),
            daily_ingest_tb = query.assumptions.daily_ingest_tb,
            "TCO comparison complete"
        );

        Ok(projections)
    }
}
