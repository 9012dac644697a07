//! Parser for the catalog's free-text annual cost ranges.
//!
//! Vendor records carry ranges like `"$50K-200K/year"` or
//! `"$3M-12M/year for 5TB/day"`. The parser is intentionally forgiving
//! about decoration (currency sign, period suffix, trailing qualifiers) and
//! strict about shape: anything that does not reduce to `min-max` yields
//! `None`, and callers decide what absence means.

/// A parsed annual cost range in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRange {
    min_dollars: f64,
    max_dollars: f64,
}

impl CostRange {
    /// Parses a catalog cost-range string.
    ///
    /// Returns `None` when the string has no usable `min-max` shape or the
    /// upper bound is not positive.
    pub fn parse(raw: &str) -> Option<CostRange> {
        let mut cost_str = raw.replace("/year", "").replace("/month", "").replace('$', "");

        // Trailing qualifiers like " for 5TB/day" or " at list price"
        for separator in [" for ", " FOR ", " at ", " AT ", ","] {
            if let Some(prefix) = cost_str.split(separator).next() {
                if prefix.len() < cost_str.len() {
                    cost_str = prefix.to_string();
                    break;
                }
            }
        }

        let parts: Vec<&str> = cost_str.split('-').collect();
        if parts.len() != 2 {
            return None;
        }

        let min_dollars = parse_amount(parts[0]);
        let max_dollars = parse_amount(parts[1]);
        if max_dollars > 0.0 {
            Some(CostRange {
                min_dollars,
                max_dollars,
            })
        } else {
            None
        }
    }

    /// Lower bound in dollars.
    pub fn min_dollars(&self) -> f64 {
        self.min_dollars
    }

    /// Upper bound in dollars.
    pub fn max_dollars(&self) -> f64 {
        self.max_dollars
    }

    /// Upper bound in thousands of dollars, for budget-ceiling comparison.
    pub fn max_thousands(&self) -> f64 {
        self.max_dollars / 1000.0
    }

    /// Midpoint of the range, the TCO baseline.
    pub fn midpoint(&self) -> f64 {
        (self.min_dollars + self.max_dollars) / 2.0
    }
}

/// Parses one side of a range, honoring K/M magnitude suffixes.
/// Unparseable amounts collapse to zero rather than erroring.
fn parse_amount(raw: &str) -> f64 {
    let upper = raw.trim().to_uppercase();
    let cleaned: String = upper
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | 'K' | 'M'))
        .collect();

    if cleaned.contains('M') {
        cleaned.replace('M', "").parse::<f64>().unwrap_or(0.0) * 1_000_000.0
    } else if cleaned.contains('K') {
        cleaned.replace('K', "").parse::<f64>().unwrap_or(0.0) * 1_000.0
    } else {
        cleaned.parse::<f64>().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thousands_range() {
        let range = CostRange::parse("$50K-200K/year").unwrap();
        assert_eq!(range.min_dollars(), 50_000.0);
        assert_eq!(range.max_dollars(), 200_000.0);
        assert_eq!(range.midpoint(), 125_000.0);
    }

    #[test]
    fn parses_millions_range() {
        let range = CostRange::parse("$3M-12M/year").unwrap();
        assert_eq!(range.min_dollars(), 3_000_000.0);
        assert_eq!(range.max_dollars(), 12_000_000.0);
        assert_eq!(range.max_thousands(), 12_000.0);
    }

    #[test]
    fn parses_mixed_magnitudes() {
        let range = CostRange::parse("$800K-1.5M/year").unwrap();
        assert_eq!(range.min_dollars(), 800_000.0);
        assert_eq!(range.max_dollars(), 1_500_000.0);
    }

    #[test]
    fn strips_trailing_qualifier() {
        let range = CostRange::parse("$3M-12M/year for 5TB/day").unwrap();
        assert_eq!(range.max_dollars(), 12_000_000.0);
    }

    #[test]
    fn strips_comma_qualifier() {
        let range = CostRange::parse("$100K-300K, infrastructure extra").unwrap();
        assert_eq!(range.max_dollars(), 300_000.0);
    }

    #[test]
    fn accepts_monthly_suffix_without_conversion() {
        // "/month" is stripped, not normalized; catalog data is annual
        let range = CostRange::parse("$10K-50K/month").unwrap();
        assert_eq!(range.max_dollars(), 50_000.0);
    }

    #[test]
    fn parses_bare_numbers() {
        let range = CostRange::parse("50000-200000").unwrap();
        assert_eq!(range.min_dollars(), 50_000.0);
        assert_eq!(range.max_dollars(), 200_000.0);
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(CostRange::parse(""), None);
    }

    #[test]
    fn rejects_prose_without_a_range() {
        assert_eq!(CostRange::parse("Contact vendor for pricing"), None);
        assert_eq!(CostRange::parse("Free"), None);
    }

    #[test]
    fn rejects_single_value() {
        assert_eq!(CostRange::parse("$500K/year"), None);
    }

    #[test]
    fn rejects_zero_upper_bound() {
        assert_eq!(CostRange::parse("$0-0/year"), None);
    }

    #[test]
    fn unparseable_lower_bound_collapses_to_zero() {
        let range = CostRange::parse("varies-200K").unwrap();
        assert_eq!(range.min_dollars(), 0.0);
        assert_eq!(range.max_dollars(), 200_000.0);
    }
}
