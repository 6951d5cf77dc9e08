//! Where color data comes from.
//!
//! A location is either an `http(s)://` URL or a file path. Both yield a
//! JSON document that [`ColorPayload::from_json`] turns into hex/name pairs.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use swatch_core::hex;

use crate::error::FetchError;

/// Hex/name pairs decoded from a JSON document, in document order.
///
/// Accepted shapes:
///
/// ```text
/// {"#FF0000": "Red", "#00FF00": "Green"}     mapping hex -> name
/// ["#FF0000", "#00FF00"]                     list, names default to the hex
/// {"colors": <mapping or list>}              envelope around either form
/// ```
///
/// Entries that are not strings or not valid hex colors are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorPayload {
    entries: Vec<(String, String)>,
    skipped: usize,
}

impl ColorPayload {
    pub fn from_json(text: &str) -> Result<Self, FetchError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| FetchError::Payload(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        let value = match value {
            Value::Object(mut map) if map.contains_key("colors") => {
                map.remove("colors").unwrap_or(Value::Null)
            }
            other => other,
        };

        let mut payload = Self::default();
        match value {
            Value::Object(map) => {
                for (key, name) in map {
                    match name {
                        Value::String(name) => payload.push(key, name),
                        _ => payload.skipped += 1,
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(s) => payload.push(s.clone(), s),
                        _ => payload.skipped += 1,
                    }
                }
            }
            other => {
                return Err(FetchError::Payload(format!(
                    "expected an object or array, found {}",
                    json_kind(&other)
                )))
            }
        }

        if payload.skipped > 0 {
            tracing::debug!(
                kept = payload.entries.len(),
                skipped = payload.skipped,
                "Skipped invalid payload entries"
            );
        }
        Ok(payload)
    }

    fn push(&mut self, key: String, name: String) {
        if hex::is_complete_hex(&key) {
            self.entries.push((key, name));
        } else {
            self.skipped += 1;
        }
    }

    /// Hex/name pairs in document order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }

    /// Hex values in document order, names discarded
    pub fn into_hexes(self) -> Vec<String> {
        self.entries.into_iter().map(|(hex, _)| hex).collect()
    }

    /// Number of entries dropped while decoding
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Something that can produce a color payload for a location
#[async_trait]
pub trait ColorSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<ColorPayload, FetchError>;
}

/// Fetches payloads over HTTP(S)
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("swatchbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ColorSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<ColorPayload, FetchError> {
        tracing::debug!(url = %url, "Fetching colors");

        let request_error = |e: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        ColorPayload::from_json(&body)
    }
}

/// Reads payloads from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[async_trait]
impl ColorSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<ColorPayload, FetchError> {
        tracing::debug!(path = %path, "Reading colors");

        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::Io {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        ColorPayload::from_json(&body)
    }
}

/// Dispatches to HTTP for `http://` and `https://` locations, files otherwise
#[derive(Clone)]
pub struct AnySource {
    http: HttpSource,
    file: FileSource,
}

impl AnySource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpSource::new(timeout)?,
            file: FileSource,
        })
    }
}

/// Whether a location should be fetched over HTTP
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[async_trait]
impl ColorSource for AnySource {
    async fn fetch(&self, location: &str) -> Result<ColorPayload, FetchError> {
        if is_remote(location) {
            self.http.fetch(location).await
        } else {
            self.file.fetch(location).await
        }
    }
}
