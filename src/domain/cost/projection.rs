//! 5-year TCO projection.

use serde::Serialize;
use std::fmt;

use crate::domain::catalog::{CostModel, DeploymentModel, Vendor};
use crate::domain::cost::CostRange;
use crate::domain::foundation::{Level, TeamSize};

/// Years covered by a projection.
pub const PROJECTION_YEARS: usize = 5;

/// Fully loaded annual cost of one engineer.
pub const ENGINEER_ANNUAL_COST: f64 = 150_000.0;

/// Egress fees as a share of platform cost, for cloud-deployable vendors.
pub const EGRESS_RATE: f64 = 0.15;

/// Support contract as a share of platform cost, for enterprise/standard
/// support tiers.
pub const SUPPORT_CONTRACT_RATE: f64 = 0.12;

/// One-time migration cost charged in year 1.
pub const MIGRATION_COST: f64 = 50_000.0;

/// How strongly consumption pricing tracks data growth. Query volume grows
/// slower than raw data, so consumption models absorb only part of the
/// growth multiplier.
pub const CONSUMPTION_ELASTICITY: f64 = 0.6;

// Fallback $/TB/month rates for vendors without published cost ranges.
const PER_GB_RATE: f64 = 175.0;
const CONSUMPTION_RATE: f64 = 75.0;
const OSS_INFRA_RATE: f64 = 100.0;
const SUBSCRIPTION_FLAT: f64 = 350_000.0;
const HYBRID_FLAT: f64 = 400_000.0;

// Post-hoc category shares of the 5-year total.
const PLATFORM_SHARE: f64 = 0.60;
const OPERATIONS_SHARE: f64 = 0.25;
const HIDDEN_SHARE: f64 = 0.15;

/// Caller assumptions driving a projection.
#[derive(Debug, Clone, Copy)]
pub struct TcoAssumptions {
    /// Daily data ingestion in TB.
    pub daily_ingest_tb: f64,
    /// Team capacity (only affects the FTE figure quoted in assumptions).
    pub team_size: TeamSize,
    /// Annual data volume growth rate (0.20 = 20%/year).
    pub growth_rate: f64,
    /// Whether egress, support and migration costs are modeled.
    pub include_hidden_costs: bool,
}

impl Default for TcoAssumptions {
    fn default() -> Self {
        Self {
            daily_ingest_tb: 1.0,
            team_size: TeamSize::Standard,
            growth_rate: 0.20,
            include_hidden_costs: true,
        }
    }
}

/// 5-year total split into cost categories.
///
/// Shares are applied to the summed total after projection, not accumulated
/// per component. The split is indicative, not an audit trail.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostBreakdown {
    pub platform_costs: f64,
    pub operational_costs: f64,
    pub hidden_costs: f64,
}

/// Cost risks surfaced alongside a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostWarning {
    LowCostPredictability,
    PerGbGrowthExposure,
    NotCloudNative,
    HighOperationalComplexity,
}

impl fmt::Display for CostWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CostWarning::LowCostPredictability => {
                "Low cost predictability - actual costs may vary significantly"
            }
            CostWarning::PerGbGrowthExposure => {
                "Per-GB pricing - costs will spike with data volume growth"
            }
            CostWarning::NotCloudNative => {
                "Not cloud-native - may incur higher cloud infrastructure costs"
            }
            CostWarning::HighOperationalComplexity => {
                "High operational complexity - significant team time required"
            }
        };
        f.write_str(text)
    }
}

/// A complete 5-year TCO projection for one vendor.
#[derive(Debug, Clone, Serialize)]
pub struct TcoProjection {
    pub vendor_id: String,
    pub vendor_name: String,
    pub year1_cost: f64,
    pub year5_total: f64,
    /// Annual costs, year 1 through year 5.
    pub annual_costs: Vec<f64>,
    pub breakdown: CostBreakdown,
    pub assumptions: Vec<String>,
    pub warnings: Vec<CostWarning>,
}

impl TcoProjection {
    /// One-line summary in thousands.
    pub fn summary(&self) -> String {
        format!(
            "{}: ${:.0}K/year -> ${:.0}K total (5-year)",
            self.vendor_name,
            self.year1_cost / 1000.0,
            self.year5_total / 1000.0
        )
    }
}

/// Projects 5-year TCO for a vendor under the given assumptions.
///
/// Baseline platform cost is the midpoint of the vendor's published cost
/// range; vendors without usable cost data get a model-based estimate, noted
/// in the assumptions. Per-GB models scale fully with data growth,
/// consumption models partially, subscription/OSS/hybrid stay flat.
pub fn calculate_tco(vendor: &Vendor, assumptions: &TcoAssumptions) -> TcoProjection {
    let mut noted = Vec::new();
    let mut annual_costs = Vec::with_capacity(PROJECTION_YEARS);

    let cost_model = vendor.capabilities.cost_model;
    let baseline_cost = match vendor
        .typical_annual_cost_range
        .as_deref()
        .and_then(CostRange::parse)
    {
        Some(range) => range.midpoint(),
        None => {
            noted.push(format!(
                "Cost estimated from {} model (no vendor data)",
                cost_model
            ));
            estimate_cost_from_model(cost_model, assumptions.daily_ingest_tb)
        }
    };

    for year in 1..=PROJECTION_YEARS {
        let volume_multiplier = (1.0 + assumptions.growth_rate).powi(year as i32 - 1);

        let platform_cost = match cost_model {
            CostModel::PerGb => baseline_cost * volume_multiplier,
            CostModel::Consumption => {
                baseline_cost * (1.0 + (volume_multiplier - 1.0) * CONSUMPTION_ELASTICITY)
            }
            _ => baseline_cost,
        };

        let ops_cost = operational_cost(vendor.capabilities.operational_complexity);

        let hidden_cost = if assumptions.include_hidden_costs {
            hidden_costs(vendor, platform_cost, year)
        } else {
            0.0
        };

        annual_costs.push(platform_cost + ops_cost + hidden_cost);
    }

    let year5_total: f64 = annual_costs.iter().sum();

    let breakdown = CostBreakdown {
        platform_costs: year5_total * PLATFORM_SHARE,
        operational_costs: year5_total * OPERATIONS_SHARE,
        hidden_costs: if assumptions.include_hidden_costs {
            year5_total * HIDDEN_SHARE
        } else {
            0.0
        },
    };

    noted.push(format!(
        "Data volume: {} TB/day growing {:.0}%/year",
        assumptions.daily_ingest_tb,
        assumptions.growth_rate * 100.0
    ));
    noted.push(format!(
        "Team size: {} ({} FTE)",
        assumptions.team_size,
        assumptions.team_size.typical_fte()
    ));
    noted.push(format!("Cost model: {}", cost_model));

    let warnings = collect_warnings(vendor);

    TcoProjection {
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        year1_cost: annual_costs[0],
        year5_total,
        annual_costs,
        breakdown,
        assumptions: noted,
        warnings,
    }
}

/// Projects TCO for each vendor and sorts ascending by 5-year total.
pub fn compare_vendors_tco(vendors: &[Vendor], assumptions: &TcoAssumptions) -> Vec<TcoProjection> {
    let mut projections: Vec<TcoProjection> = vendors
        .iter()
        .map(|vendor| calculate_tco(vendor, assumptions))
        .collect();

    projections.sort_by(|a, b| a.year5_total.total_cmp(&b.year5_total));
    projections
}

/// Model-based annual cost estimate for vendors without published ranges.
fn estimate_cost_from_model(cost_model: CostModel, daily_ingest_tb: f64) -> f64 {
    let monthly_tb = daily_ingest_tb * 30.0;
    match cost_model {
        CostModel::PerGb => monthly_tb * PER_GB_RATE * 12.0,
        CostModel::Consumption => monthly_tb * CONSUMPTION_RATE * 12.0,
        CostModel::OpenSource => monthly_tb * OSS_INFRA_RATE * 12.0,
        CostModel::Subscription => SUBSCRIPTION_FLAT,
        CostModel::Hybrid => HYBRID_FLAT,
    }
}

/// Annual team-time cost, driven by operational complexity alone.
fn operational_cost(complexity: Level) -> f64 {
    let fte_required = match complexity {
        Level::Low => 0.25,
        Level::Medium => 0.5,
        Level::High => 1.0,
    };
    fte_required * ENGINEER_ANNUAL_COST
}

fn hidden_costs(vendor: &Vendor, platform_cost: f64, year: usize) -> f64 {
    let caps = &vendor.capabilities;
    let mut hidden = 0.0;

    if caps.supports_deployment(DeploymentModel::Cloud) {
        hidden += platform_cost * EGRESS_RATE;
    }

    if caps.has_commercial_support() {
        hidden += platform_cost * SUPPORT_CONTRACT_RATE;
    }

    if year == 1 {
        hidden += MIGRATION_COST;
    }

    hidden
}

fn collect_warnings(vendor: &Vendor) -> Vec<CostWarning> {
    let caps = &vendor.capabilities;
    let mut warnings = Vec::new();

    if caps.cost_predictability == Level::Low {
        warnings.push(CostWarning::LowCostPredictability);
    }
    if caps.cost_model == CostModel::PerGb {
        warnings.push(CostWarning::PerGbGrowthExposure);
    }
    if !caps.cloud_native && caps.supports_deployment(DeploymentModel::Cloud) {
        warnings.push(CostWarning::NotCloudNative);
    }
    if caps.operational_complexity == Level::High {
        warnings.push(CostWarning::HighOperationalComplexity);
    }

    warnings
}
