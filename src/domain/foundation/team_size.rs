//! TeamSize value object (lean < standard < large).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engineering team capacity available to operate a platform.
///
/// Totally ordered: a `Standard` team can run anything a `Lean` team can.
/// The team-capacity filter depends on this ordering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TeamSize {
    /// 1-2 engineers.
    Lean,
    /// 3-5 engineers.
    #[default]
    Standard,
    /// 6+ engineers.
    Large,
}

impl TeamSize {
    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSize::Lean => "lean",
            TeamSize::Standard => "standard",
            TeamSize::Large => "large",
        }
    }

    /// Typical fully-staffed FTE count for this capacity tier.
    ///
    /// Used only in TCO assumption strings; operational cost is driven by
    /// vendor complexity, not team size.
    pub fn typical_fte(&self) -> f64 {
        match self {
            TeamSize::Lean => 1.5,
            TeamSize::Standard => 4.0,
            TeamSize::Large => 8.0,
        }
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
