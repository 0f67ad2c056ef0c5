//! Common test utilities for in-process HTTP testing.
//!
//! This module provides a test fixture that builds the full router over a
//! chosen catalog, so requests run end to end without binding a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use marquee_core::{CatalogStore, Config, Movie, MovieService};
use marquee_server::state::AppState;

/// Re-export fixtures for test convenience
pub use marquee_core::testing::fixtures;

/// Test fixture wrapping a router over an in-memory catalog.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new();
///     let response = fixture.get("/api/v1/movies/search?name=prison").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
}

/// JSON response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// HTML (or other text) response from a test request
#[derive(Debug)]
pub struct TextResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub body: String,
}

impl TestFixture {
    /// Fixture over the four sample movies.
    pub fn new() -> Self {
        Self::with_movies(fixtures::sample_movies())
    }

    /// Fixture over the given movies.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self::with_service(MovieService::new(CatalogStore::from_movies(movies)))
    }

    /// Fixture over an already built service.
    pub fn with_service(service: MovieService) -> Self {
        let state = Arc::new(AppState::new(Config::default(), service));
        Self {
            router: marquee_server::api::create_router(state),
        }
    }

    /// Send a GET request and parse the body as JSON.
    pub async fn get(&self, path: &str) -> TestResponse {
        let response = self.send(path).await;
        let body: Value = if response.body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).unwrap_or(Value::Null)
        };
        TestResponse {
            status: response.status,
            body,
        }
    }

    /// Send a GET request and keep the body as text.
    pub async fn get_text(&self, path: &str) -> TextResponse {
        self.send(path).await
    }

    async fn send(&self, path: &str) -> TextResponse {
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
        let header_value = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header_value(header::CONTENT_TYPE);
        let location = header_value(header::LOCATION);

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TextResponse {
            status,
            content_type,
            location,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Collect the `id` of every entry in a JSON array.
pub fn ids(results: &Value) -> Vec<i64> {
    results
        .as_array()
        .map(|items| items.iter().filter_map(|m| m["id"].as_i64()).collect())
        .unwrap_or_default()
}
