//! DataSovereignty value object (deployment/compliance requirement).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the organization's data is allowed to live.
///
/// `CloudFirst` is a soft preference and never eliminates a vendor; the
/// other three modes are hard constraints enforced by the sovereignty filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSovereignty {
    CloudFirst,
    Hybrid,
    OnPremOnly,
    MultiRegion,
}

impl DataSovereignty {
    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSovereignty::CloudFirst => "cloud-first",
            DataSovereignty::Hybrid => "hybrid",
            DataSovereignty::OnPremOnly => "on-prem-only",
            DataSovereignty::MultiRegion => "multi-region",
        }
    }
}

impl fmt::Display for DataSovereignty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
