use serde::Deserialize;
use std::path::Path;

use super::SortBy;

/// Folder holding the sample color files of the RFUIColor project.
pub const SAMPLE_FOLDER_URL: &str =
    "https://raw.githubusercontent.com/rysfa/RFUIColor/master/Sample%20JSON%20Files/";
/// Sample colors, mapping hex values to names.
pub const SAMPLE_COLORS_FILE: &str = "Sample%20Colors%20with%20Names.json";
/// Sample segments, a list of hex values.
pub const SAMPLE_SEGMENTS_FILE: &str = "Sample%20Segments.json";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Where to load colors from (URL or file path)
    #[serde(default = "default_colors_url")]
    pub colors_url: Option<String>,

    /// Where to load segments from (URL or file path)
    #[serde(default = "default_segments_url")]
    pub segments_url: Option<String>,

    /// Initial ordering of the library
    #[serde(default)]
    pub sort_by: SortBy,

    /// Initial direction of the library ordering
    #[serde(default = "default_ascending")]
    pub ascending: bool,

    /// Timeout for a single HTTP fetch, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_colors_url() -> Option<String> {
    Some(format!("{SAMPLE_FOLDER_URL}{SAMPLE_COLORS_FILE}"))
}

fn default_segments_url() -> Option<String> {
    Some(format!("{SAMPLE_FOLDER_URL}{SAMPLE_SEGMENTS_FILE}"))
}

fn default_ascending() -> bool {
    true
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        colors = config.colors_url.as_deref().unwrap_or("-"),
                        segments = config.segments_url.as_deref().unwrap_or("-"),
                        sort_by = %config.sort_by,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            colors_url: default_colors_url(),
            segments_url: default_segments_url(),
            sort_by: SortBy::default(),
            ascending: default_ascending(),
            fetch_timeout_secs: default_fetch_timeout(),
            bind_addr: default_bind_addr(),
        }
    }
}
