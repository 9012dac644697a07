//! Tier-2 scoring - weighted ranking of preferred capabilities.
//!
//! Preferences are soft: a vendor missing a preferred capability loses
//! points but is never eliminated. Weights are capped at 3 so a single
//! strongly-preferred capability outweighs, but cannot drown out, several
//! nice-to-haves.

mod result;

pub use result::{ScoreResult, ScoredVendor};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::catalog::{
    capability_value, Capabilities, CapabilityValue, OpenTableFormat, Vendor,
};

/// Weight 1: nice-to-have. Weight 2: preferred. Weight 3: strongly
/// preferred.
pub const MAX_WEIGHT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("preferences cannot be empty")]
    EmptyPreferences,
    #[error("weight must be 1-{MAX_WEIGHT}, got {weight} for {capability}")]
    InvalidWeight { capability: String, weight: u32 },
}

/// Validated Tier-2 preferences: capability name -> weight in 1..=3.
///
/// Construction is the only validation point; a `Preferences` value always
/// holds at least one entry and only legal weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct Preferences {
    weights: BTreeMap<String, u32>,
}

impl Preferences {
    pub fn try_new(weights: BTreeMap<String, u32>) -> Result<Self, ScoringError> {
        if weights.is_empty() {
            return Err(ScoringError::EmptyPreferences);
        }
        for (capability, &weight) in &weights {
            if !(1..=MAX_WEIGHT).contains(&weight) {
                return Err(ScoringError::InvalidWeight {
                    capability: capability.clone(),
                    weight,
                });
            }
        }
        Ok(Self { weights })
    }

    /// Sum of all weights; the score ceiling for every vendor.
    pub fn max_possible_score(&self) -> u32 {
        self.weights.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|(name, &weight)| (name.as_str(), weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl TryFrom<BTreeMap<String, u32>> for Preferences {
    type Error = ScoringError;

    fn try_from(weights: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        Preferences::try_new(weights)
    }
}

impl From<Preferences> for BTreeMap<String, u32> {
    fn from(preferences: Preferences) -> Self {
        preferences.weights
    }
}

/// Scores each vendor against the preferences and ranks them.
///
/// Ranking is a stable descending sort on score: equally scored vendors
/// keep their input order.
pub fn score_vendors(vendors: &[Vendor], preferences: &Preferences) -> ScoreResult {
    let max_possible = preferences.max_possible_score();

    let mut scored: Vec<ScoredVendor> = vendors
        .iter()
        .map(|vendor| {
            let (score, breakdown) = score_capabilities(&vendor.capabilities, preferences);
            ScoredVendor {
                vendor_id: vendor.id.clone(),
                vendor_name: vendor.name.clone(),
                score,
                max_score: max_possible,
                breakdown,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    ScoreResult::new(scored, preferences.clone(), max_possible)
}

/// Points for one vendor, with a per-capability breakdown.
///
/// Every preference gets a breakdown entry, zero included, so callers can
/// distinguish "scored zero" from "never evaluated".
fn score_capabilities(
    capabilities: &Capabilities,
    preferences: &Preferences,
) -> (u32, BTreeMap<String, u32>) {
    let mut total = 0;
    let mut breakdown = BTreeMap::new();

    for (capability, weight) in preferences.iter() {
        let points = match capability_value(capabilities, capability) {
            Some(CapabilityValue::Bool(true)) => weight,
            Some(CapabilityValue::Bool(false)) => 0,
            Some(CapabilityValue::Text(value)) if capability == "open_table_format" => {
                table_format_points(&value, weight)
            }
            Some(CapabilityValue::Text(value)) => {
                if value.is_empty() {
                    0
                } else {
                    weight
                }
            }
            Some(CapabilityValue::TextList(values)) => {
                if values.is_empty() {
                    0
                } else {
                    weight
                }
            }
            // Numeric capabilities have no preference semantics
            Some(CapabilityValue::Number(_)) => 0,
            None => 0,
        };

        total += points;
        breakdown.insert(capability.to_string(), points);
    }

    (total, breakdown)
}

/// Table-format ladder: Iceberg is the vendor-neutral target, Delta/Hudi
/// are workable, proprietary formats defeat the point of an open format.
/// Unrecognized formats score half on the assumption they are at least
/// open.
fn table_format_points(format: &str, weight: u32) -> u32 {
    let format = OpenTableFormat::new(format);
    if format.is_iceberg() {
        weight
    } else if format.is_delta_or_hudi() {
        weight / 2
    } else if format.is_proprietary() {
        0
    } else {
        weight / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::OpenTableFormat;
    use crate::domain::test_support::vendor_fixture;
    use proptest::prelude::*;

    fn preferences(entries: &[(&str, u32)]) -> Preferences {
        let weights = entries
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect();
        Preferences::try_new(weights).unwrap()
    }

    #[test]
    fn empty_preferences_are_rejected() {
        assert_eq!(
            Preferences::try_new(BTreeMap::new()),
            Err(ScoringError::EmptyPreferences)
        );
    }

    #[test]
    fn out_of_range_weights_are_rejected() {
        for bad in [0, 4, 10] {
            let mut weights = BTreeMap::new();
            weights.insert("multi_cloud".to_string(), bad);
            assert_eq!(
                Preferences::try_new(weights),
                Err(ScoringError::InvalidWeight {
                    capability: "multi_cloud".to_string(),
                    weight: bad,
                })
            );
        }
    }

    #[test]
    fn max_possible_score_is_weight_sum() {
        let prefs = preferences(&[("multi_cloud", 3), ("streaming_query", 2), ("ocsf_support", 1)]);
        assert_eq!(prefs.max_possible_score(), 6);
    }

    #[test]
    fn boolean_capability_scores_full_or_zero() {
        let mut vendor = vendor_fixture("dremio");
        vendor.capabilities.streaming_query = true;
        vendor.capabilities.multi_cloud = false;

        let prefs = preferences(&[("streaming_query", 2), ("multi_cloud", 3)]);
        let result = score_vendors(&[vendor], &prefs);
        let top = &result.ranked()[0];

        assert_eq!(top.score, 2);
        assert_eq!(top.breakdown["streaming_query"], 2);
        assert_eq!(top.breakdown["multi_cloud"], 0);
    }

    #[test]
    fn iceberg_format_scores_full_weight() {
        let vendor = vendor_fixture("amazon-athena"); // iceberg-native
        let prefs = preferences(&[("open_table_format", 3)]);
        let result = score_vendors(&[vendor], &prefs);
        assert_eq!(result.ranked()[0].score, 3);
    }

    #[test]
    fn delta_and_hudi_score_half_weight_rounded_down() {
        for format in ["delta-lake", "hudi"] {
            let mut vendor = vendor_fixture("databricks");
            vendor.capabilities.open_table_format = OpenTableFormat::new(format);

            let prefs = preferences(&[("open_table_format", 3)]);
            let result = score_vendors(&[vendor], &prefs);
            // 3 / 2 = 1 in integer points
            assert_eq!(result.ranked()[0].score, 1, "format {format}");
        }
    }

    #[test]
    fn proprietary_format_scores_zero() {
        let mut vendor = vendor_fixture("splunk");
        vendor.capabilities.open_table_format = OpenTableFormat::new("proprietary");

        let prefs = preferences(&[("open_table_format", 2)]);
        let result = score_vendors(&[vendor], &prefs);
        assert_eq!(result.ranked()[0].score, 0);
    }

    #[test]
    fn unrecognized_format_scores_half_weight() {
        let mut vendor = vendor_fixture("vertica");
        vendor.capabilities.open_table_format = OpenTableFormat::new("parquet-files");

        let prefs = preferences(&[("open_table_format", 2)]);
        let result = score_vendors(&[vendor], &prefs);
        assert_eq!(result.ranked()[0].score, 1);
    }

    #[test]
    fn generic_string_capability_scores_on_presence() {
        let mut vendor = vendor_fixture("dremio");
        vendor.capabilities.vendor_support = Some("enterprise".to_string());

        let prefs = preferences(&[("vendor_support", 2), ("community_size", 1)]);
        let result = score_vendors(&[vendor], &prefs);
        let top = &result.ranked()[0];
        assert_eq!(top.breakdown["vendor_support"], 2);
        // fixture community_size is the non-empty string "unknown"
        assert_eq!(top.breakdown["community_size"], 1);
    }

    #[test]
    fn list_capability_scores_on_non_empty() {
        let mut vendor = vendor_fixture("dremio");
        vendor.capabilities.compliance_certifications = Vec::new();

        let prefs = preferences(&[("deployment_models", 2), ("compliance_certifications", 2)]);
        let result = score_vendors(&[vendor], &prefs);
        let top = &result.ranked()[0];
        assert_eq!(top.breakdown["deployment_models"], 2);
        assert_eq!(top.breakdown["compliance_certifications"], 0);
    }

    #[test]
    fn unknown_capability_records_zero_in_breakdown() {
        let vendor = vendor_fixture("dremio");
        let prefs = preferences(&[("quantum_readiness", 3), ("multi_cloud", 1)]);
        let result = score_vendors(&[vendor], &prefs);
        let top = &result.ranked()[0];

        assert_eq!(top.breakdown["quantum_readiness"], 0);
        assert_eq!(top.breakdown.len(), 2);
    }

    #[test]
    fn numeric_capability_scores_zero() {
        let mut vendor = vendor_fixture("dremio");
        vendor.capabilities.query_latency_p95 = Some(500);

        let prefs = preferences(&[("query_latency_p95", 3)]);
        let result = score_vendors(&[vendor], &prefs);
        assert_eq!(result.ranked()[0].score, 0);
    }

    #[test]
    fn ranking_is_descending_and_stable_on_ties() {
        let mut low = vendor_fixture("first-low");
        low.capabilities.multi_cloud = false;
        let mut tied_a = vendor_fixture("tied-a");
        tied_a.capabilities.multi_cloud = true;
        let mut tied_b = vendor_fixture("tied-b");
        tied_b.capabilities.multi_cloud = true;

        let prefs = preferences(&[("multi_cloud", 2)]);
        let result = score_vendors(&[low, tied_a, tied_b], &prefs);

        let ids: Vec<&str> = result.ranked().iter().map(|s| s.vendor_id.as_str()).collect();
        assert_eq!(ids, vec!["tied-a", "tied-b", "first-low"]);
    }

    proptest! {
        #[test]
        fn score_never_exceeds_max_possible(
            streaming in any::<bool>(),
            multi_cloud in any::<bool>(),
            ocsf in any::<bool>(),
            w1 in 1u32..=3,
            w2 in 1u32..=3,
            w3 in 1u32..=3,
            w4 in 1u32..=3,
        ) {
            let mut vendor = vendor_fixture("prop");
            vendor.capabilities.streaming_query = streaming;
            vendor.capabilities.multi_cloud = multi_cloud;
            vendor.capabilities.ocsf_support = ocsf;

            let prefs = preferences(&[
                ("streaming_query", w1),
                ("multi_cloud", w2),
                ("ocsf_support", w3),
                ("open_table_format", w4),
            ]);
            let result = score_vendors(&[vendor], &prefs);
            let top = &result.ranked()[0];

            prop_assert!(top.score <= prefs.max_possible_score());
            prop_assert_eq!(top.max_score, prefs.max_possible_score());
            let breakdown_sum: u32 = top.breakdown.values().sum();
            prop_assert_eq!(breakdown_sum, top.score);
        }
    }
}
