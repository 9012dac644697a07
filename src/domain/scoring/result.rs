//! Ranked output of Tier-2 scoring.

use serde::Serialize;
use std::collections::BTreeMap;

use super::Preferences;

/// One vendor's score against a preference set.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredVendor {
    pub vendor_id: String,
    pub vendor_name: String,
    pub score: u32,
    pub max_score: u32,
    /// Points awarded per preferred capability, zeros included.
    pub breakdown: BTreeMap<String, u32>,
}

impl ScoredVendor {
    /// Score as a percentage of the maximum. Zero when nothing was scorable.
    pub fn score_percentage(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.max_score) * 100.0
        }
    }
}

/// Scored vendors ranked best-first.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    scored_vendors: Vec<ScoredVendor>,
    preferences: Preferences,
    pub max_possible_score: u32,
}

impl ScoreResult {
    pub(super) fn new(
        scored_vendors: Vec<ScoredVendor>,
        preferences: Preferences,
        max_possible_score: u32,
    ) -> Self {
        Self {
            scored_vendors,
            preferences,
            max_possible_score,
        }
    }

    /// All scored vendors, highest score first.
    pub fn ranked(&self) -> &[ScoredVendor] {
        &self.scored_vendors
    }

    /// The preferences the vendors were scored against.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn vendor_count(&self) -> usize {
        self.scored_vendors.len()
    }

    /// The `n` best vendors.
    pub fn top_n(&self, n: usize) -> &[ScoredVendor] {
        &self.scored_vendors[..n.min(self.scored_vendors.len())]
    }

    /// Vendors scoring at least `min_score_percentage` percent.
    pub fn finalists(&self, min_score_percentage: f64) -> Vec<&ScoredVendor> {
        self.scored_vendors
            .iter()
            .filter(|scored| scored.score_percentage() >= min_score_percentage)
            .collect()
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        match self.scored_vendors.first() {
            None => "No vendors scored".to_string(),
            Some(top) => format!(
                "{} vendors scored, top: {} ({}/{}, {:.1}%)",
                self.vendor_count(),
                top.vendor_name,
                top.score,
                self.max_possible_score,
                top.score_percentage()
            ),
        }
    }
}
