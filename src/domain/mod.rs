//! Domain layer containing the decision-support pipeline.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `catalog` - Vendor data model, catalog lookups, capability registry
//! - `filtering` - Tier-1 mandatory-constraint elimination pipeline
//! - `scoring` - Tier-2 weighted-preference ranking
//! - `cost` - Cost-range parsing and 5-year TCO projection
//!
//! # Design Philosophy
//!
//! The whole pipeline is synchronous, single-threaded, and side-effect-free:
//! each invocation reads an immutable vendor collection and returns newly
//! allocated result objects. Malformed vendor data never raises; parsing
//! ambiguity always resolves toward keeping a vendor in play (fail-open).
//! Only malformed caller input (an invalid preference weight) is an error.

pub mod catalog;
pub mod cost;
pub mod filtering;
pub mod foundation;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_support;
