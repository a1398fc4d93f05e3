//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the router around a
//! recommender, so API tests run without binding a port.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use marquee_core::{sample_catalog, Catalog, Config, SimilarityRecommender};
use marquee_server::{api::create_router, state::AppState};

/// Test fixture wrapping an in-process router.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health() {
///     let fixture = TestFixture::new();
///     let response = fixture.get("/api/v1/health").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Fixture over the sample catalog with default configuration.
    pub fn new() -> Self {
        Self::with_catalog(sample_catalog(), Config::default())
    }

    /// Fixture over the sample catalog with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self::with_catalog(sample_catalog(), config)
    }

    /// Fixture over an arbitrary catalog.
    pub fn with_catalog(catalog: Catalog, config: Config) -> Self {
        let recommender = SimilarityRecommender::build_with_options(
            catalog,
            (&config.recommender).into(),
        )
        .expect("Failed to build recommender");

        let state = Arc::new(AppState::new(config, Arc::new(recommender)));
        let router = create_router(state);

        Self { router }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&body_bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }
}

/// Titles of the `recommendations` array in a response body.
pub fn recommended_titles(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .expect("recommendations array")
        .iter()
        .map(|r| r["movie"]["title"].as_str().unwrap().to_string())
        .collect()
}
