//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use swatchbook::models::AppConfig;
use swatchbook::server::{build_router, create_app_state};
use swatchbook::services::SharedLibrary;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub library: SharedLibrary,
}

impl TestApp {
    /// Create a test application with an empty library and no data locations
    pub fn new() -> Self {
        Self::with_config(offline_config())
    }

    /// Create a test application from a configuration
    pub fn with_config(config: AppConfig) -> Self {
        // Create application state using shared server module
        let state = create_app_state(config).expect("Failed to create app state");

        // Keep a reference for test assertions
        let library = state.library.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, library }
    }

    /// Create a test application with colors and segments already loaded
    pub async fn with_library(colors: &[(&str, &str)], segments: &[&str]) -> Self {
        let app = Self::new();
        {
            let mut library = app.library.write().await;
            library.set_colors(colors.iter().copied());
            library.set_segments(segments.iter().copied());
        }
        app
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request without a body
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let builder = Request::post(path).header("Content-Type", "application/json");
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            body,
        }
    }
}

/// Configuration without any data locations, so nothing hits the network
pub fn offline_config() -> AppConfig {
    AppConfig {
        colors_url: None,
        segments_url: None,
        ..AppConfig::default()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
