//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{ColorLibrary, LibraryEvent, LibraryLoader, SharedLibrary};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub library: SharedLibrary,
    pub loader: LibraryLoader,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for SharedLibrary {
    fn from_ref(state: &AppState) -> Self {
        state.library.clone()
    }
}

impl FromRef<AppState> for LibraryLoader {
    fn from_ref(state: &AppState) -> Self {
        state.loader.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Create application state with an empty library.
///
/// Nothing is fetched here; call [`LibraryLoader::download_configured`] on
/// `state.loader` to populate the library.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let library = ColorLibrary::with_sort(config.sort_by, config.ascending).into_shared();
    let loader = LibraryLoader::with_timeout(
        library.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    )?;

    Ok(AppState {
        library,
        loader,
        config: Arc::new(config),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Library
        .route("/api/colors", get(api::handle_colors))
        .route("/api/colors/groups", get(api::handle_groups))
        .route("/api/gradient", get(api::handle_gradient))
        .route("/api/reload", post(api::handle_reload))
        // Tools
        .route("/api/match", get(api::handle_match))
        .route("/api/blend", post(api::handle_blend))
        .route("/api/validate", get(api::handle_validate))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Log library events until the library is dropped.
pub fn spawn_event_logger(library: &ColorLibrary) -> tokio::task::JoinHandle<()> {
    let mut rx = library.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(LibraryEvent::ColorsChanged { count }) => {
                    tracing::info!(count, "Library colors changed");
                }
                Ok(LibraryEvent::SegmentsChanged { count }) => {
                    tracing::info!(count, "Library segments changed");
                }
                Ok(LibraryEvent::Loaded(report)) => {
                    tracing::info!(
                        success = report.success(),
                        finished_at = %report.finished_at,
                        "Library loaded"
                    );
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Library event logger lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
