//! Vendor platform categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary platform category for a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    #[serde(rename = "SIEM")]
    Siem,
    #[serde(rename = "Query Engine")]
    QueryEngine,
    #[serde(rename = "Data Lakehouse")]
    DataLakehouse,
    #[serde(rename = "Streaming Platform")]
    Streaming,
    #[serde(rename = "Data Virtualization")]
    Virtualization,
    #[serde(rename = "Observability Platform")]
    Observability,
    #[serde(rename = "Object Storage")]
    ObjectStorage,
    #[serde(rename = "Data Catalog & Governance")]
    DataCatalog,
    #[serde(rename = "ETL/ELT Platform")]
    EtlElt,
    #[serde(rename = "Other")]
    Other,
}

impl VendorCategory {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorCategory::Siem => "SIEM",
            VendorCategory::QueryEngine => "Query Engine",
            VendorCategory::DataLakehouse => "Data Lakehouse",
            VendorCategory::Streaming => "Streaming Platform",
            VendorCategory::Virtualization => "Data Virtualization",
            VendorCategory::Observability => "Observability Platform",
            VendorCategory::ObjectStorage => "Object Storage",
            VendorCategory::DataCatalog => "Data Catalog & Governance",
            VendorCategory::EtlElt => "ETL/ELT Platform",
            VendorCategory::Other => "Other",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
