//! EvaluateVendorsHandler - the combined two-stage evaluation.
//!
//! Runs Tier-1 mandatory filtering over the full catalog, then optionally
//! ranks the survivors against Tier-2 preferences. Filtering always runs;
//! scoring runs only when preferences are supplied and at least one vendor
//! survived.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::domain::filtering::{apply_tier1_filters, FilterConstraints, FilterResult};
use crate::domain::scoring::{score_vendors, Preferences, ScoreResult};
use crate::ports::{CatalogError, CatalogSource};

/// Query for a full vendor evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluateVendorsQuery {
    /// Tier-1 mandatory constraints; all optional.
    pub constraints: FilterConstraints,
    /// Tier-2 preferences. `None` skips scoring entirely.
    pub preferences: Option<Preferences>,
}

/// Result of a full evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateVendorsResult {
    pub filter: FilterResult,
    /// Present only when preferences were supplied and survivors exist.
    pub scores: Option<ScoreResult>,
}

#[derive(Debug, Error)]
pub enum EvaluateVendorsError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Handler for the combined filter-then-score evaluation.
pub struct EvaluateVendorsHandler {
    catalog_source: Arc<dyn CatalogSource>,
}

impl EvaluateVendorsHandler {
    pub fn new(catalog_source: Arc<dyn CatalogSource>) -> Self {
        Self { catalog_source }
    }

    pub async fn handle(
        &self,
        query: EvaluateVendorsQuery,
    ) -> Result<EvaluateVendorsResult, EvaluateVendorsError> {
        let catalog = self.catalog_source.load().await?;

        let filter = apply_tier1_filters(catalog.vendors(), &query.constraints);

        let scores = match &query.preferences {
            Some(preferences) if !filter.survivors().is_empty() => {
                Some(score_vendors(filter.survivors(), preferences))
            }
            _ => None,
        };

        info!(
            initial = filter.initial_count,
            viable = filter.filtered_count(),
            scored = scores.is_some(),
            "vendor evaluation complete"
        );

        Ok(EvaluateVendorsResult { filter, scores })
    }
}
