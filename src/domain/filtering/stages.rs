//! The five Tier-1 filter stages.
//!
//! Each stage consumes a survivor list and returns (survivors, eliminated).
//! Stages never error: a vendor with missing or unparseable data survives
//! the stage that cannot judge it.

use std::collections::BTreeMap;

use crate::domain::catalog::{capability_value, CapabilityValue, DeploymentModel, Vendor};
use crate::domain::cost::CostRange;
use crate::domain::foundation::{BudgetRange, DataSovereignty, TeamSize, VendorTolerance};

use super::{EliminationReason, RequirementFailure};

type StageOutcome = (Vec<Vendor>, BTreeMap<String, EliminationReason>);

/// Eliminates vendors requiring a strictly larger team than available.
pub fn filter_by_team_capacity(vendors: Vec<Vendor>, team_size: TeamSize) -> StageOutcome {
    let mut viable = Vec::new();
    let mut eliminated = BTreeMap::new();

    for vendor in vendors {
        let required = vendor.capabilities.team_size_required;
        if required > team_size {
            eliminated.insert(
                vendor.id.clone(),
                EliminationReason::TeamCapacity {
                    required,
                    available: team_size,
                    operational_complexity: vendor.capabilities.operational_complexity,
                },
            );
        } else {
            viable.push(vendor);
        }
    }

    (viable, eliminated)
}

/// Eliminates vendors whose typical cost ceiling exceeds the budget band.
///
/// Vendors without cost data, and vendors whose cost string cannot be
/// parsed, survive: absence of cost data must never cause elimination.
pub fn filter_by_budget(vendors: Vec<Vendor>, budget: BudgetRange) -> StageOutcome {
    let mut viable = Vec::new();
    let mut eliminated = BTreeMap::new();

    let ceiling = match budget.ceiling_thousands() {
        Some(ceiling) => ceiling,
        // Unbounded budget: nothing to eliminate.
        None => return (vendors, eliminated),
    };

    for vendor in vendors {
        let parsed = vendor
            .typical_annual_cost_range
            .as_deref()
            .and_then(CostRange::parse);

        match parsed {
            Some(range) if range.max_thousands() > ceiling => {
                eliminated.insert(
                    vendor.id.clone(),
                    EliminationReason::BudgetExceeded {
                        cost_range: vendor
                            .typical_annual_cost_range
                            .clone()
                            .unwrap_or_default(),
                        ceiling_thousands: ceiling,
                        cost_model: vendor.capabilities.cost_model,
                    },
                );
            }
            _ => viable.push(vendor),
        }
    }

    (viable, eliminated)
}

/// Eliminates vendors violating the data-sovereignty requirement.
///
/// `CloudFirst` is a soft preference handled by scoring; this stage passes
/// every vendor through for it.
pub fn filter_by_data_sovereignty(
    vendors: Vec<Vendor>,
    sovereignty: DataSovereignty,
) -> StageOutcome {
    let mut viable = Vec::new();
    let mut eliminated = BTreeMap::new();

    for vendor in vendors {
        let caps = &vendor.capabilities;
        let reason = match sovereignty {
            DataSovereignty::OnPremOnly => {
                if caps.supports_deployment(DeploymentModel::OnPrem) {
                    None
                } else {
                    Some(EliminationReason::NoOnPremSupport {
                        deployment_models: caps
                            .deployment_labels()
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    })
                }
            }
            DataSovereignty::Hybrid => {
                let explicit_hybrid = caps.supports_deployment(DeploymentModel::Hybrid);
                let implied_hybrid = caps.supports_deployment(DeploymentModel::Cloud)
                    && caps.supports_deployment(DeploymentModel::OnPrem);
                if explicit_hybrid || implied_hybrid {
                    None
                } else {
                    Some(EliminationReason::NoHybridSupport {
                        deployment_models: caps
                            .deployment_labels()
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    })
                }
            }
            DataSovereignty::MultiRegion => {
                if caps.multi_cloud {
                    None
                } else {
                    Some(EliminationReason::NoMultiCloudSupport)
                }
            }
            DataSovereignty::CloudFirst => None,
        };

        match reason {
            Some(reason) => {
                eliminated.insert(vendor.id.clone(), reason);
            }
            None => viable.push(vendor),
        }
    }

    (viable, eliminated)
}

/// Eliminates vendors based on the organization's vendor-relationship
/// tolerance.
pub fn filter_by_vendor_tolerance(
    vendors: Vec<Vendor>,
    tolerance: VendorTolerance,
) -> StageOutcome {
    let mut viable = Vec::new();
    let mut eliminated = BTreeMap::new();

    for vendor in vendors {
        let caps = &vendor.capabilities;
        let reason = match tolerance {
            // OSS preferred but commercial acceptable: everything passes.
            VendorTolerance::OssFirst => None,
            VendorTolerance::OssWithSupport => {
                if caps.is_open_source() && caps.vendor_support.is_none() {
                    Some(EliminationReason::OssWithoutSupport)
                } else {
                    None
                }
            }
            VendorTolerance::CommercialOnly => {
                if caps.is_open_source() {
                    Some(EliminationReason::OpenSourceNotAllowed {
                        cost_model: caps.cost_model,
                    })
                } else if !caps.has_commercial_support() {
                    Some(EliminationReason::InsufficientSupportTier {
                        vendor_support: caps.vendor_support.clone(),
                    })
                } else {
                    None
                }
            }
        };

        match reason {
            Some(reason) => {
                eliminated.insert(vendor.id.clone(), reason);
            }
            None => viable.push(vendor),
        }
    }

    (viable, eliminated)
}

/// Eliminates vendors failing any custom boolean requirement.
///
/// A requirement fails unless the named capability resolves to exactly the
/// required boolean. Unknown names, undeclared capabilities, and non-boolean
/// capabilities all count as a mismatch; all failures for a vendor are
/// collected into one reason.
pub fn filter_by_requirements(
    vendors: Vec<Vendor>,
    requirements: &BTreeMap<String, bool>,
) -> StageOutcome {
    let mut viable = Vec::new();
    let mut eliminated = BTreeMap::new();

    for vendor in vendors {
        let mut failures = Vec::new();

        for (capability, &required) in requirements {
            let actual = match capability_value(&vendor.capabilities, capability) {
                Some(CapabilityValue::Bool(b)) => Some(b),
                _ => None,
            };
            if actual != Some(required) {
                failures.push(RequirementFailure {
                    capability: capability.clone(),
                    required,
                    actual,
                });
            }
        }

        if failures.is_empty() {
            viable.push(vendor);
        } else {
            eliminated.insert(
                vendor.id.clone(),
                EliminationReason::RequirementsNotMet { failures },
            );
        }
    }

    (viable, eliminated)
}
