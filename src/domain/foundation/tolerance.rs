//! VendorTolerance value object (OSS vs commercial relationship).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much vendor relationship the organization requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VendorTolerance {
    /// Open source preferred; commercial acceptable. Eliminates nothing.
    OssFirst,
    /// OSS acceptable only with a declared vendor-support tier.
    OssWithSupport,
    /// Requires vendor SLA and enterprise/standard support.
    CommercialOnly,
}

impl VendorTolerance {
    /// Returns the wire/display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorTolerance::OssFirst => "oss-first",
            VendorTolerance::OssWithSupport => "oss-with-support",
            VendorTolerance::CommercialOnly => "commercial-only",
        }
    }
}

impl fmt::Display for VendorTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
