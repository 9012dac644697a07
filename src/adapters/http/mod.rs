//! HTTP adapter - REST exposure of the evaluation pipeline.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::api_router;
