//! Adapters - concrete implementations of ports plus presentation-layer
//! surfaces.

pub mod http;
pub mod json_catalog;
pub mod report;

pub use json_catalog::JsonCatalogSource;
