//! Route table for the evaluation API.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{compare_tco, evaluate_vendors, healthz, AppState};

/// Builds the full API router.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/v1/evaluate", post(evaluate_vendors))
        .route("/api/v1/tco/compare", post(compare_tco))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Vendor, VendorCatalog};
    use crate::domain::foundation::{Level, TeamSize};
    use crate::domain::test_support::vendor_fixture;
    use crate::ports::{CatalogError, CatalogSource};
    use async_trait::async_trait;
    use axum::body::Body;
    use http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StaticCatalog {
        catalog: VendorCatalog,
    }

    #[async_trait]
    impl CatalogSource for StaticCatalog {
        async fn load(&self) -> Result<VendorCatalog, CatalogError> {
            Ok(self.catalog.clone())
        }

        async fn save(&self, _catalog: &VendorCatalog) -> Result<(), CatalogError> {
            unimplemented!()
        }
    }

    fn sample_vendors() -> Vec<Vendor> {
        let athena = vendor_fixture("amazon-athena");
        let mut splunk = vendor_fixture("splunk");
        splunk.capabilities.team_size_required = TeamSize::Large;
        splunk.capabilities.operational_complexity = Level::High;
        vec![athena, splunk]
    }

    fn test_router() -> Router {
        let state = AppState::new(Arc::new(StaticCatalog {
            catalog: VendorCatalog::new(sample_vendors()),
        }));
        api_router(state, Duration::from_secs(5))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let response = test_router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn evaluate_filters_and_scores() {
        let body = r#"{
            "team_size": "lean",
            "preferences": {"open_table_format": 3}
        }"#;
        let response = test_router()
            .oneshot(post_json("/api/v1/evaluate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["filter"]["initial_count"], 2);
        assert_eq!(
            json["filter"]["eliminated"]["splunk"]["kind"],
            "team_capacity"
        );
        assert_eq!(json["scores"]["scored_vendors"][0]["score"], 3);
    }

    #[tokio::test]
    async fn evaluate_rejects_bad_weight() {
        let body = r#"{"preferences": {"multi_cloud": 9}}"#;
        let response = test_router()
            .oneshot(post_json("/api/v1/evaluate", body))
            .await
            .unwrap();
        // serde-level rejection from the Json extractor
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn tco_compare_ranks_cheapest_first() {
        let body = r#"{"vendor_ids": ["splunk", "amazon-athena"], "daily_ingest_tb": 2.0}"#;
        let response = test_router()
            .oneshot(post_json("/api/v1/tco/compare", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);
        let first = json[0]["year5_total"].as_f64().unwrap();
        let second = json[1]["year5_total"].as_f64().unwrap();
        assert!(first <= second);
    }

    #[tokio::test]
    async fn tco_compare_unknown_vendor_is_404() {
        let body = r#"{"vendor_ids": ["nonexistent"]}"#;
        let response = test_router()
            .oneshot(post_json("/api/v1/tco/compare", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn tco_compare_empty_ids_is_400() {
        let body = r#"{"vendor_ids": []}"#;
        let response = test_router()
            .oneshot(post_json("/api/v1/tco/compare", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
