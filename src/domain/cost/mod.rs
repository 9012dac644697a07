//! Cost analysis - published cost-range parsing and deterministic 5-year
//! TCO projection.
//!
//! Everything here is arithmetic over catalog data and caller assumptions.
//! No I/O, no randomness: the same vendor and the same assumptions always
//! produce the same projection.

mod cost_range;
mod projection;

pub use cost_range::CostRange;
pub use projection::{
    calculate_tco, compare_vendors_tco, CostBreakdown, CostWarning, TcoAssumptions,
    TcoProjection, CONSUMPTION_ELASTICITY, EGRESS_RATE, ENGINEER_ANNUAL_COST, MIGRATION_COST,
    PROJECTION_YEARS, SUPPORT_CONTRACT_RATE,
};
