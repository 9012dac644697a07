//! HTTP DTOs for the evaluation endpoints.
//!
//! Domain result types already serialize cleanly, so responses reuse them
//! directly; only requests and the error envelope need dedicated shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::EvaluateVendorsQuery;
use crate::domain::cost::TcoAssumptions;
use crate::domain::filtering::FilterConstraints;
use crate::domain::foundation::{BudgetRange, DataSovereignty, TeamSize, VendorTolerance};
use crate::domain::scoring::Preferences;

/// Request body for `POST /api/v1/evaluate`.
///
/// All constraint fields are optional; `preferences` weight validation
/// happens during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub team_size: Option<TeamSize>,
    pub budget: Option<BudgetRange>,
    pub data_sovereignty: Option<DataSovereignty>,
    pub vendor_tolerance: Option<VendorTolerance>,
    #[serde(default)]
    pub requirements: BTreeMap<String, bool>,
    pub preferences: Option<Preferences>,
}

impl From<EvaluateRequest> for EvaluateVendorsQuery {
    fn from(request: EvaluateRequest) -> Self {
        EvaluateVendorsQuery {
            constraints: FilterConstraints {
                team_size: request.team_size,
                budget: request.budget,
                data_sovereignty: request.data_sovereignty,
                vendor_tolerance: request.vendor_tolerance,
                requirements: request.requirements,
            },
            preferences: request.preferences,
        }
    }
}

/// Request body for `POST /api/v1/tco/compare`.
#[derive(Debug, Clone, Deserialize)]
pub struct TcoCompareRequest {
    pub vendor_ids: Vec<String>,
    pub daily_ingest_tb: Option<f64>,
    pub team_size: Option<TeamSize>,
    pub growth_rate: Option<f64>,
    pub include_hidden_costs: Option<bool>,
}

impl TcoCompareRequest {
    /// Fills unspecified fields with the standard assumptions.
    pub fn assumptions(&self) -> TcoAssumptions {
        let defaults = TcoAssumptions::default();
        TcoAssumptions {
            daily_ingest_tb: self.daily_ingest_tb.unwrap_or(defaults.daily_ingest_tb),
            team_size: self.team_size.unwrap_or(defaults.team_size),
            growth_rate: self.growth_rate.unwrap_or(defaults.growth_rate),
            include_hidden_costs: self
                .include_hidden_costs
                .unwrap_or(defaults.include_hidden_costs),
        }
    }
}

/// Standard error response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL".to_string(),
            message: message.into(),
        }
    }
}
