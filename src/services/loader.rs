//! Combined colors + segments download.
//!
//! Both fetches run concurrently. Each result is applied to the library on
//! its own, and a single [`LibraryEvent::Loaded`] is published once both
//! have finished, whatever their outcome.
//!
//! [`LibraryEvent::Loaded`]: super::library::LibraryEvent::Loaded

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

use super::library::SharedLibrary;
use super::source::{AnySource, ColorPayload, ColorSource};
use crate::error::FetchError;
use crate::models::AppConfig;

/// Outcome of one fetch
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FetchOutcome {
    pub success: bool,
    /// Failure cause; absent on success and when no location was given
    #[schema(value_type = Option<String>)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchError>,
    /// Entries stored in the library
    pub count: usize,
}

impl FetchOutcome {
    pub fn succeeded(count: usize) -> Self {
        Self {
            success: true,
            error: None,
            count,
        }
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            success: false,
            error: Some(error),
            count: 0,
        }
    }

    /// No location was configured
    pub fn skipped() -> Self {
        Self {
            success: false,
            error: None,
            count: 0,
        }
    }
}

/// Outcome of a combined download
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoadReport {
    pub colors: FetchOutcome,
    pub segments: FetchOutcome,
    #[schema(value_type = String, format = DateTime)]
    pub finished_at: DateTime<Utc>,
}

impl LoadReport {
    pub fn success(&self) -> bool {
        self.colors.success && self.segments.success
    }
}

/// Fetches color data and applies it to a shared library
#[derive(Clone)]
pub struct LibraryLoader {
    library: SharedLibrary,
    source: Arc<dyn ColorSource>,
}

impl LibraryLoader {
    pub fn new(library: SharedLibrary, source: Arc<dyn ColorSource>) -> Self {
        Self { library, source }
    }

    /// Loader for URLs and file paths with the given HTTP timeout
    pub fn with_timeout(library: SharedLibrary, timeout: Duration) -> Result<Self, FetchError> {
        let source = AnySource::new(timeout)?;
        Ok(Self::new(library, Arc::new(source)))
    }

    pub fn library(&self) -> &SharedLibrary {
        &self.library
    }

    /// Fetch colors and segments concurrently and apply both.
    ///
    /// A `None` location is reported as a failed fetch without a cause and
    /// leaves the corresponding library data untouched, as does a failed
    /// fetch.
    pub async fn download(&self, colors: Option<&str>, segments: Option<&str>) -> LoadReport {
        let (colors, segments) = tokio::join!(
            self.download_colors(colors),
            self.download_segments(segments)
        );

        let report = LoadReport {
            colors,
            segments,
            finished_at: Utc::now(),
        };

        tracing::info!(
            colors_ok = report.colors.success,
            colors = report.colors.count,
            segments_ok = report.segments.success,
            segments = report.segments.count,
            "Library download finished"
        );

        self.library.read().await.notify_loaded(report.clone());
        report
    }

    /// Download from the locations in the configuration
    pub async fn download_configured(&self, config: &AppConfig) -> LoadReport {
        self.download(config.colors_url.as_deref(), config.segments_url.as_deref())
            .await
    }

    /// Fetch colors only
    pub async fn download_colors(&self, location: Option<&str>) -> FetchOutcome {
        match self.fetch("colors", location).await {
            Ok(Some(payload)) => {
                let count = self.library.write().await.set_colors(payload.into_entries());
                FetchOutcome::succeeded(count)
            }
            Ok(None) => FetchOutcome::skipped(),
            Err(e) => FetchOutcome::failed(e),
        }
    }

    /// Fetch segments only
    pub async fn download_segments(&self, location: Option<&str>) -> FetchOutcome {
        match self.fetch("segments", location).await {
            Ok(Some(payload)) => {
                let count = self.library.write().await.set_segments(payload.into_hexes());
                FetchOutcome::succeeded(count)
            }
            Ok(None) => FetchOutcome::skipped(),
            Err(e) => FetchOutcome::failed(e),
        }
    }

    async fn fetch(
        &self,
        what: &'static str,
        location: Option<&str>,
    ) -> Result<Option<ColorPayload>, FetchError> {
        let Some(location) = location else {
            tracing::debug!(what, "No location given, skipping fetch");
            return Ok(None);
        };

        match self.source.fetch(location).await {
            Ok(payload) => {
                tracing::debug!(what, location, count = payload.len(), "Fetched payload");
                Ok(Some(payload))
            }
            Err(e) => {
                tracing::warn!(what, location, error = %e, "Fetch failed");
                Err(e)
            }
        }
    }
}
