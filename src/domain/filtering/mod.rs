//! Tier-1 filtering - mandatory organizational-constraint elimination.
//!
//! Filters run as a pipeline of independent, optional stages in a fixed
//! order: team capacity, budget, data sovereignty, vendor tolerance, then
//! custom boolean requirements. Each stage receives the survivor set of the
//! previous stage, so a vendor eliminated early is never reconsidered and
//! only its earliest failure is recorded.
//!
//! No stage errors on malformed vendor data. Parsing ambiguity always
//! resolves to "vendor survives": elimination is irreversible downstream, so
//! the pipeline prefers over-inclusion to false elimination.

mod reason;
mod result;
mod stages;

pub use reason::{EliminationReason, RequirementFailure};
pub use result::FilterResult;
pub use stages::{
    filter_by_budget, filter_by_data_sovereignty, filter_by_requirements,
    filter_by_team_capacity, filter_by_vendor_tolerance,
};

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::catalog::Vendor;
use crate::domain::foundation::{BudgetRange, DataSovereignty, TeamSize, VendorTolerance};

/// The caller's Tier-1 constraints. Every field is optional; an omitted
/// constraint makes its stage a no-op.
#[derive(Debug, Clone, Default)]
pub struct FilterConstraints {
    /// Available team capacity.
    pub team_size: Option<TeamSize>,
    /// Annual budget ceiling.
    pub budget: Option<BudgetRange>,
    /// Deployment/compliance requirement.
    pub data_sovereignty: Option<DataSovereignty>,
    /// OSS vs commercial support requirement.
    pub vendor_tolerance: Option<VendorTolerance>,
    /// Custom mandatory capabilities: capability name -> required value.
    pub requirements: BTreeMap<String, bool>,
}

impl FilterConstraints {
    /// True when no stage would run.
    pub fn is_empty(&self) -> bool {
        self.team_size.is_none()
            && self.budget.is_none()
            && self.data_sovereignty.is_none()
            && self.vendor_tolerance.is_none()
            && self.requirements.is_empty()
    }
}

/// Applies all Tier-1 mandatory filters to a vendor collection.
///
/// Stages run sequentially; order matters because each stage operates on the
/// output of the previous one. The result partitions the input: every vendor
/// ends up either in the survivor list (input order preserved) or in the
/// eliminated map with exactly one reason.
pub fn apply_tier1_filters(vendors: &[Vendor], constraints: &FilterConstraints) -> FilterResult {
    let initial_count = vendors.len();
    let mut viable: Vec<Vendor> = vendors.to_vec();
    let mut all_eliminated: BTreeMap<String, EliminationReason> = BTreeMap::new();

    if let Some(team_size) = constraints.team_size {
        let (survivors, eliminated) = filter_by_team_capacity(viable, team_size);
        viable = survivors;
        all_eliminated.extend(eliminated);
    }

    if let Some(budget) = constraints.budget {
        let (survivors, eliminated) = filter_by_budget(viable, budget);
        viable = survivors;
        all_eliminated.extend(eliminated);
    }

    if let Some(sovereignty) = constraints.data_sovereignty {
        let (survivors, eliminated) = filter_by_data_sovereignty(viable, sovereignty);
        viable = survivors;
        all_eliminated.extend(eliminated);
    }

    if let Some(tolerance) = constraints.vendor_tolerance {
        let (survivors, eliminated) = filter_by_vendor_tolerance(viable, tolerance);
        viable = survivors;
        all_eliminated.extend(eliminated);
    }

    if !constraints.requirements.is_empty() {
        let (survivors, eliminated) = filter_by_requirements(viable, &constraints.requirements);
        viable = survivors;
        all_eliminated.extend(eliminated);
    }

    debug!(
        initial = initial_count,
        viable = viable.len(),
        eliminated = all_eliminated.len(),
        "tier-1 filtering complete"
    );

    FilterResult::new(initial_count, viable, all_eliminated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CostModel;
    use crate::domain::foundation::Level;
    use crate::domain::test_support::vendor_fixture;

    fn mixed_catalog() -> Vec<Vendor> {
        // lean/cheap, standard/mid, large/expensive
        let athena = vendor_fixture("amazon-athena");

        let mut dremio = vendor_fixture("dremio");
        dremio.capabilities.team_size_required = TeamSize::Standard;
        dremio.typical_annual_cost_range = Some("$150K-400K/year".to_string());

        let mut splunk = vendor_fixture("splunk");
        splunk.capabilities.team_size_required = TeamSize::Large;
        splunk.capabilities.operational_complexity = Level::High;
        splunk.capabilities.cost_model = CostModel::PerGb;
        splunk.typical_annual_cost_range = Some("$3M-12M/year".to_string());

        vec![athena, dremio, splunk]
    }

    #[test]
    fn no_constraints_is_a_noop() {
        let vendors = mixed_catalog();
        let result = apply_tier1_filters(&vendors, &FilterConstraints::default());

        assert_eq!(result.initial_count, 3);
        assert_eq!(result.survivors().len(), 3);
        assert!(result.eliminated().is_empty());
    }

    #[test]
    fn stages_compose_and_record_earliest_failure_only() {
        let vendors = mixed_catalog();
        let constraints = FilterConstraints {
            team_size: Some(TeamSize::Lean),
            budget: Some(BudgetRange::Under500K),
            ..Default::default()
        };

        let result = apply_tier1_filters(&vendors, &constraints);

        assert_eq!(result.survivor_ids(), vec!["amazon-athena"]);
        // splunk fails both team size and budget; only the team-capacity
        // reason (the earlier stage) is recorded
        assert!(matches!(
            result.eliminated().get("splunk"),
            Some(EliminationReason::TeamCapacity { .. })
        ));
        assert!(matches!(
            result.eliminated().get("dremio"),
            Some(EliminationReason::TeamCapacity { .. })
        ));
    }

    #[test]
    fn adding_stages_never_increases_survivors() {
        let vendors = mixed_catalog();

        let team_only = FilterConstraints {
            team_size: Some(TeamSize::Standard),
            ..Default::default()
        };
        let team_and_budget = FilterConstraints {
            team_size: Some(TeamSize::Standard),
            budget: Some(BudgetRange::Under500K),
            ..Default::default()
        };

        let first = apply_tier1_filters(&vendors, &team_only);
        let second = apply_tier1_filters(&vendors, &team_and_budget);
        assert!(second.survivors().len() <= first.survivors().len());
    }

    #[test]
    fn result_partitions_the_input() {
        let vendors = mixed_catalog();
        let constraints = FilterConstraints {
            team_size: Some(TeamSize::Lean),
            budget: Some(BudgetRange::Under500K),
            ..Default::default()
        };

        let result = apply_tier1_filters(&vendors, &constraints);

        let mut seen: Vec<&str> = result.survivor_ids();
        seen.extend(result.eliminated().keys().map(String::as_str));
        seen.sort_unstable();

        let mut input_ids: Vec<&str> = vendors.iter().map(|v| v.id.as_str()).collect();
        input_ids.sort_unstable();
        assert_eq!(seen, input_ids);
    }

    #[test]
    fn requirements_stage_runs_last() {
        let mut vendors = mixed_catalog();
        vendors[0].capabilities.streaming_query = false;

        let mut requirements = BTreeMap::new();
        requirements.insert("streaming_query".to_string(), true);
        let constraints = FilterConstraints {
            team_size: Some(TeamSize::Lean),
            requirements,
            ..Default::default()
        };

        let result = apply_tier1_filters(&vendors, &constraints);
        // athena survives team capacity but fails the streaming requirement
        assert!(matches!(
            result.eliminated().get("amazon-athena"),
            Some(EliminationReason::RequirementsNotMet { .. })
        ));
        // splunk was already gone before the requirements stage
        assert!(matches!(
            result.eliminated().get("splunk"),
            Some(EliminationReason::TeamCapacity { .. })
        ));
    }

    #[test]
    fn constraints_is_empty_reflects_contents() {
        assert!(FilterConstraints::default().is_empty());
        let constraints = FilterConstraints {
            budget: Some(BudgetRange::Over10M),
            ..Default::default()
        };
        assert!(!constraints.is_empty());
    }
}
