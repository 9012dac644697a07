//! Shared domain primitives (value objects, enums, errors).
//!
//! Everything in this module is a small, serde-friendly value type used
//! across the filtering, scoring, and cost engines.

mod budget;
mod errors;
mod level;
mod sovereignty;
mod team_size;
mod tolerance;

pub use budget::BudgetRange;
pub use errors::ValidationError;
pub use level::Level;
pub use sovereignty::DataSovereignty;
pub use team_size::TeamSize;
pub use tolerance::VendorTolerance;
