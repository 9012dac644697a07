//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod catalog_source;

pub use catalog_source::{CatalogError, CatalogSource};
