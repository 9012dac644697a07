//! In-memory vendor catalog with lookup helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::{Vendor, VendorCategory};

/// The complete set of vendors available for filtering, plus catalog
/// metadata.
///
/// Passed by reference into each pipeline call; nothing in the core mutates
/// it, so concurrent invocations over the same catalog are safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCatalog {
    vendors: Vec<Vendor>,
    /// How often the catalog is refreshed.
    #[serde(default = "default_update_cadence")]
    pub update_cadence: String,
    /// Last time the full catalog was refreshed.
    #[serde(default = "Utc::now")]
    pub last_full_update: DateTime<Utc>,
}

fn default_update_cadence() -> String {
    "quarterly".to_string()
}

impl VendorCatalog {
    /// Creates a catalog from a vendor list.
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self {
            vendors,
            update_cadence: default_update_cadence(),
            last_full_update: Utc::now(),
        }
    }

    /// All vendors, in catalog order.
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Number of vendors in the catalog.
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// True when the catalog holds no vendors.
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Looks a vendor up by id.
    pub fn get_by_id(&self, vendor_id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == vendor_id)
    }

    /// All vendors in a category, in catalog order.
    pub fn get_by_category(&self, category: VendorCategory) -> Vec<&Vendor> {
        self.vendors
            .iter()
            .filter(|v| v.category == category)
            .collect()
    }

    /// All vendors carrying any of the given tags.
    pub fn filter_by_tags(&self, tags: &[String]) -> Vec<&Vendor> {
        self.vendors
            .iter()
            .filter(|v| v.has_any_tag(tags))
            .collect()
    }

    /// Validates every vendor's identity invariants and checks id uniqueness.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for vendor in &self.vendors {
            vendor.validate()?;
        }
        for (i, vendor) in self.vendors.iter().enumerate() {
            if self.vendors[..i].iter().any(|v| v.id == vendor.id) {
                return Err(ValidationError::invalid_format(
                    "id",
                    format!("duplicate vendor id '{}'", vendor.id),
                ));
            }
        }
        Ok(())
    }
}
