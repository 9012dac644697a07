//! Result of one Tier-1 filtering pass.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::catalog::Vendor;

use super::EliminationReason;

/// Immutable outcome of applying Tier-1 filters.
///
/// Survivors and eliminated vendors partition the input set: every input
/// vendor id appears in exactly one of the two.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    /// How many vendors entered the pipeline.
    pub initial_count: usize,
    survivors: Vec<Vendor>,
    eliminated: BTreeMap<String, EliminationReason>,
}

impl FilterResult {
    /// Creates a result from a completed pipeline pass.
    pub fn new(
        initial_count: usize,
        survivors: Vec<Vendor>,
        eliminated: BTreeMap<String, EliminationReason>,
    ) -> Self {
        Self {
            initial_count,
            survivors,
            eliminated,
        }
    }

    /// Surviving vendors, input order preserved.
    pub fn survivors(&self) -> &[Vendor] {
        &self.survivors
    }

    /// Consumes the result, yielding the survivor list.
    pub fn into_survivors(self) -> Vec<Vendor> {
        self.survivors
    }

    /// Eliminated vendor id -> reason.
    pub fn eliminated(&self) -> &BTreeMap<String, EliminationReason> {
        &self.eliminated
    }

    /// Number of surviving vendors.
    pub fn filtered_count(&self) -> usize {
        self.survivors.len()
    }

    /// Number of eliminated vendors.
    pub fn eliminated_count(&self) -> usize {
        self.eliminated.len()
    }

    /// Survivor ids, input order preserved.
    pub fn survivor_ids(&self) -> Vec<&str> {
        self.survivors.iter().map(|v| v.id.as_str()).collect()
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} vendors -> {} viable ({} eliminated)",
            self.initial_count,
            self.filtered_count(),
            self.eliminated_count()
        )
    }
}
