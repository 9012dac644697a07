//! Query handlers, one use case per file.

mod compare_costs;
mod evaluate_vendors;

pub use compare_costs::{CompareCostsError, CompareCostsHandler, CompareCostsQuery};
pub use evaluate_vendors::{
    EvaluateVendorsError, EvaluateVendorsHandler, EvaluateVendorsQuery, EvaluateVendorsResult,
};
