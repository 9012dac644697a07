//! Security data platform vendor record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{Capabilities, VendorCategory};

/// A single vendor in the catalog, with capabilities, cost information, and
/// evidence sources.
///
/// Identity (`id`, `name`, `category`) is immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier, lowercase-hyphenated (e.g. "amazon-athena").
    pub id: String,
    /// Display name (e.g. "Amazon Athena").
    pub name: String,
    /// Primary platform category.
    pub category: VendorCategory,
    /// Brief description of the platform.
    pub description: String,
    /// Vendor website URL.
    #[serde(default)]
    pub website: Option<String>,

    /// Platform capabilities for filtering and scoring.
    pub capabilities: Capabilities,

    /// Typical annual cost range as free text (e.g. "$100K-500K for 5TB/day").
    #[serde(default)]
    pub typical_annual_cost_range: Option<String>,
    /// Additional cost model notes and assumptions.
    #[serde(default)]
    pub cost_notes: Option<String>,

    /// Source of vendor data (book, expert interview, vendor docs).
    pub evidence_source: String,
    /// Last time this record was updated.
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
    /// Expert who validated this vendor data.
    #[serde(default)]
    pub validated_by: Option<String>,

    /// Additional tags for flexible filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Vendor {
    /// Validates the record's identity invariants.
    ///
    /// `id` must be non-empty, lowercase, and contain no spaces; `name` must
    /// be non-empty. Capability-level data quality is deliberately not
    /// validated here: incomplete capability data is handled fail-open by
    /// the engines.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if self.id.contains(' ') || self.id.chars().any(|c| c.is_uppercase()) {
            return Err(ValidationError::invalid_format(
                "id",
                "must be lowercase with hyphens (e.g. 'amazon-athena')",
            ));
        }
        if self.name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }

    /// True if the vendor carries any of the given tags.
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }
}
