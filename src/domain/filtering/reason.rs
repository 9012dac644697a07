//! Elimination reasons as tagged variants.
//!
//! Reasons are structured data for machine consumption (tests, API clients)
//! with a `Display` rendering for reports. The prose format is part of the
//! report contract; change it deliberately.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::CostModel;
use crate::domain::foundation::{Level, TeamSize};

/// A single failed custom requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementFailure {
    /// Capability name as supplied by the caller.
    pub capability: String,
    /// The required boolean value.
    pub required: bool,
    /// The vendor's actual boolean value; `None` when the capability is
    /// unknown, undeclared, or not a boolean.
    pub actual: Option<bool>,
}

impl fmt::Display for RequirementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actual = match self.actual {
            Some(true) => "true",
            Some(false) => "false",
            None => "missing",
        };
        write!(
            f,
            "{}={} (required={})",
            self.capability, actual, self.required
        )
    }
}

/// Why a vendor was removed from consideration.
///
/// One reason per vendor: if a vendor fails multiple filters only the
/// earliest-applied failure is recorded, because elimination removes it from
/// subsequent stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EliminationReason {
    /// Vendor requires a larger team than the organization has.
    TeamCapacity {
        required: TeamSize,
        available: TeamSize,
        operational_complexity: Level,
    },
    /// Vendor's typical cost ceiling exceeds the budget band.
    BudgetExceeded {
        cost_range: String,
        ceiling_thousands: f64,
        cost_model: CostModel,
    },
    /// On-prem required but not offered.
    NoOnPremSupport { deployment_models: Vec<String> },
    /// Hybrid required but neither hybrid nor cloud+on-prem offered.
    NoHybridSupport { deployment_models: Vec<String> },
    /// Multi-cloud required for multi-region residency but not supported.
    NoMultiCloudSupport,
    /// Open-source vendor without a declared support tier.
    OssWithoutSupport,
    /// Open-source vendor under a commercial-only policy.
    OpenSourceNotAllowed { cost_model: CostModel },
    /// Commercial vendor without enterprise/standard support.
    InsufficientSupportTier { vendor_support: Option<String> },
    /// One or more custom mandatory requirements failed.
    RequirementsNotMet { failures: Vec<RequirementFailure> },
}

impl fmt::Display for EliminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EliminationReason::TeamCapacity {
                required,
                available,
                operational_complexity,
            } => write!(
                f,
                "Requires {} team (you have {}). Operational complexity: {}.",
                required, available, operational_complexity
            ),
            EliminationReason::BudgetExceeded {
                cost_range,
                ceiling_thousands,
                cost_model,
            } => write!(
                f,
                "Typical cost {} exceeds budget ceiling ${:.0}K/year. Cost model: {}.",
                cost_range, ceiling_thousands, cost_model
            ),
            EliminationReason::NoOnPremSupport { deployment_models } => write!(
                f,
                "Cloud-only platform, violates on-prem requirement. Deployment models: {}.",
                deployment_models.join(", ")
            ),
            EliminationReason::NoHybridSupport { deployment_models } => write!(
                f,
                "Does not support hybrid deployment. Deployment models: {}.",
                deployment_models.join(", ")
            ),
            EliminationReason::NoMultiCloudSupport => write!(
                f,
                "Does not support multi-cloud (required for multi-region data residency)."
            ),
            EliminationReason::OssWithoutSupport => write!(
                f,
                "Open-source without vendor support, violates support requirement."
            ),
            EliminationReason::OpenSourceNotAllowed { cost_model } => write!(
                f,
                "Open-source platform, violates commercial-only requirement. Cost model: {}.",
                cost_model
            ),
            EliminationReason::InsufficientSupportTier { vendor_support } => write!(
                f,
                "Insufficient vendor support (requires enterprise/standard SLA). Vendor support: {}.",
                vendor_support.as_deref().unwrap_or("none")
            ),
            EliminationReason::RequirementsNotMet { failures } => {
                let rendered: Vec<String> = failures.iter().map(|r| r.to_string()).collect();
                write!(
                    f,
                    "Missing mandatory requirements: {}.",
                    rendered.join(", ")
                )
            }
        }
    }
}
