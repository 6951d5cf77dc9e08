use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::models::AppConfig;
use crate::services::{LibraryLoader, LoadReport};

/// Reload colors and segments
///
/// Fetches both configured locations concurrently and replaces whatever
/// loaded successfully. Failures are reported per location and leave the
/// previous data in place.
#[utoipa::path(
    post,
    path = "/api/reload",
    responses(
        (status = 200, description = "Outcome of both fetches", body = LoadReport),
    ),
    tag = "Library"
)]
pub async fn handle_reload(
    State(loader): State<LibraryLoader>,
    State(config): State<Arc<AppConfig>>,
) -> Json<LoadReport> {
    tracing::info!(
        colors = config.colors_url.as_deref().unwrap_or("-"),
        segments = config.segments_url.as_deref().unwrap_or("-"),
        "Reload requested"
    );
    Json(loader.download_configured(&config).await)
}
