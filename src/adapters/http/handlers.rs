//! HTTP handlers connecting axum routes to application query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;
use http::StatusCode;

use crate::application::handlers::{
    CompareCostsError, CompareCostsHandler, CompareCostsQuery, EvaluateVendorsError,
    EvaluateVendorsHandler,
};
use crate::ports::CatalogSource;

use super::dto::{ErrorResponse, EvaluateRequest, TcoCompareRequest};

/// API error mapped onto HTTP status codes.
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<EvaluateVendorsError> for ApiError {
    fn from(error: EvaluateVendorsError) -> Self {
        match error {
            // the catalog is server-side state; failing to load it is never
            // the caller's fault
            EvaluateVendorsError::Catalog(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CompareCostsError> for ApiError {
    fn from(error: CompareCostsError) -> Self {
        match error {
            CompareCostsError::NoVendorsRequested => ApiError::BadRequest(error.to_string()),
            CompareCostsError::VendorNotFound { .. } => ApiError::NotFound(error.to_string()),
            CompareCostsError::Catalog(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog_source: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog_source: Arc<dyn CatalogSource>) -> Self {
        Self { catalog_source }
    }

    pub fn evaluate_handler(&self) -> EvaluateVendorsHandler {
        EvaluateVendorsHandler::new(self.catalog_source.clone())
    }

    pub fn compare_costs_handler(&self) -> CompareCostsHandler {
        CompareCostsHandler::new(self.catalog_source.clone())
    }
}

/// POST /api/v1/evaluate
pub async fn evaluate_vendors(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.evaluate_handler().handle(request.into()).await?;
    Ok(Json(result))
}

/// POST /api/v1/tco/compare
pub async fn compare_tco(
    State(state): State<AppState>,
    Json(request): Json<TcoCompareRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let query = CompareCostsQuery {
        vendor_ids: request.vendor_ids.clone(),
        assumptions: request.assumptions(),
    };
    let projections = state.compare_costs_handler().handle(query).await?;
    Ok(Json(projections))
}

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
