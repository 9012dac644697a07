//! Open table format support, classified for scoring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vendor's open-table-format support ("iceberg-native", "delta",
/// "proprietary", ...).
///
/// Kept as a string rather than a closed enum: catalog data spells variants
/// inconsistently ("delta" vs "delta_lake") and the scoring ladder only needs
/// the substring classification below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenTableFormat(String);

impl OpenTableFormat {
    /// Creates a new format value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for any Iceberg flavor (native or plugin).
    pub fn is_iceberg(&self) -> bool {
        self.0.to_lowercase().contains("iceberg")
    }

    /// True for Delta Lake or Apache Hudi.
    pub fn is_delta_or_hudi(&self) -> bool {
        let lower = self.0.to_lowercase();
        lower.contains("delta") || lower.contains("hudi")
    }

    /// True for vendor-proprietary formats.
    pub fn is_proprietary(&self) -> bool {
        self.0.to_lowercase().contains("proprietary")
    }
}

impl fmt::Display for OpenTableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OpenTableFormat {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iceberg_variants_classify_as_iceberg() {
        assert!(OpenTableFormat::new("iceberg-native").is_iceberg());
        assert!(OpenTableFormat::new("iceberg-support").is_iceberg());
        assert!(OpenTableFormat::new("Iceberg").is_iceberg());
        assert!(!OpenTableFormat::new("delta").is_iceberg());
    }

    #[test]
    fn delta_and_hudi_spellings_classify_together() {
        assert!(OpenTableFormat::new("delta").is_delta_or_hudi());
        assert!(OpenTableFormat::new("delta_lake").is_delta_or_hudi());
        assert!(OpenTableFormat::new("hudi").is_delta_or_hudi());
        assert!(!OpenTableFormat::new("iceberg-native").is_delta_or_hudi());
    }

    #[test]
    fn proprietary_classifies_as_proprietary() {
        assert!(OpenTableFormat::new("proprietary").is_proprietary());
        assert!(!OpenTableFormat::new("multiple").is_proprietary());
    }

    #[test]
    fn format_serializes_transparently() {
        let fmt = OpenTableFormat::new("iceberg-native");
        assert_eq!(serde_json::to_string(&fmt).unwrap(), "\"iceberg-native\"");
        let back: OpenTableFormat = serde_json::from_str("\"delta_lake\"").unwrap();
        assert_eq!(back.as_str(), "delta_lake");
    }
}
