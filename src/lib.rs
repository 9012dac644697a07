//! Vendor Compass - decision support for security data platform selection.
//!
//! Filters a curated vendor catalog against hard organizational constraints,
//! ranks the survivors on weighted technical preferences, and projects
//! deterministic 5-year total cost of ownership.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
