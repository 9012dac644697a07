//! BudgetRange value object (annual budget bands).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual platform budget band.
///
/// The budget filter compares a vendor's parsed cost ceiling against
/// [`BudgetRange::ceiling_thousands`]; `Over10M` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "<500K")]
    Under500K,
    #[serde(rename = "500K-2M")]
    Range500KTo2M,
    #[serde(rename = "2M-10M")]
    Range2MTo10M,
    #[serde(rename = "10M+")]
    Over10M,
}

impl BudgetRange {
    /// Budget ceiling in thousands of dollars, `None` when unbounded.
    pub fn ceiling_thousands(&self) -> Option<f64> {
        match self {
            BudgetRange::Under500K => Some(500.0),
            BudgetRange::Range500KTo2M => Some(2_000.0),
            BudgetRange::Range2MTo10M => Some(10_000.0),
            BudgetRange::Over10M => None,
        }
    }

    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Under500K => "<500K",
            BudgetRange::Range500KTo2M => "500K-2M",
            BudgetRange::Range2MTo10M => "2M-10M",
            BudgetRange::Over10M => "10M+",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceilings_match_budget_bands() {
        assert_eq!(BudgetRange::Under500K.ceiling_thousands(), Some(500.0));
        assert_eq!(BudgetRange::Range500KTo2M.ceiling_thousands(), Some(2_000.0));
        assert_eq!(BudgetRange::Range2MTo10M.ceiling_thousands(), Some(10_000.0));
        assert_eq!(BudgetRange::Over10M.ceiling_thousands(), None);
    }

    #[test]
    fn budget_range_serializes_to_band_labels() {
        assert_eq!(
            serde_json::to_string(&BudgetRange::Under500K).unwrap(),
            "\"<500K\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetRange::Over10M).unwrap(),
            "\"10M+\""
        );
    }

    #[test]
    fn budget_range_deserializes_from_band_labels() {
        let band: BudgetRange = serde_json::from_str("\"500K-2M\"").unwrap();
        assert_eq!(band, BudgetRange::Range500KTo2M);
    }

    #[test]
    fn budget_range_displays_label() {
        assert_eq!(format!("{}", BudgetRange::Range2MTo10M), "2M-10M");
    }
}
