//! Vendor catalog data model.
//!
//! The catalog is a read-only, in-memory collection of [`Vendor`] records.
//! Identity is immutable after load and no engine mutates a vendor in place;
//! filtering and scoring produce new derived records.
//!
//! # Components
//!
//! - `Vendor` / `Capabilities` - the typed vendor record
//! - `VendorCatalog` - lookup by id, category, and tags
//! - capability registry - explicit name -> typed accessor mapping, replacing
//!   dynamic attribute lookup so unknown capability names resolve predictably

mod capabilities;
mod catalog;
mod category;
mod registry;
mod table_format;
mod vendor;

pub use capabilities::{Capabilities, CostModel, DeploymentModel, Maturity};
pub use catalog::VendorCatalog;
pub use category::VendorCategory;
pub use registry::{capability_value, is_known_capability, CapabilityValue};
pub use table_format::OpenTableFormat;
pub use vendor::Vendor;
