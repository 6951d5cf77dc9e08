use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use swatch_core::SortMetric;
use utoipa::ToSchema;

/// Ordering applied to the library's colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Gradient order through the segment list
    #[default]
    Segment,
    /// HSB hue
    Hue,
    /// Luma brightness
    Brightness,
}

impl SortBy {
    /// Metric for metric orderings, `None` for segment order.
    pub fn metric(self) -> Option<SortMetric> {
        match self {
            SortBy::Segment => None,
            SortBy::Hue => Some(SortMetric::Hue),
            SortBy::Brightness => Some(SortMetric::Brightness),
        }
    }
}

impl From<SortMetric> for SortBy {
    fn from(metric: SortMetric) -> Self {
        match metric {
            SortMetric::Hue => SortBy::Hue,
            SortMetric::Brightness => SortBy::Brightness,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Segment => write!(f, "segment"),
            SortBy::Hue => write!(f, "hue"),
            SortBy::Brightness => write!(f, "brightness"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "segment" | "segments" => Ok(SortBy::Segment),
            "hue" => Ok(SortBy::Hue),
            "brightness" => Ok(SortBy::Brightness),
            other => Err(format!(
                "unknown sort {other:?} (expected segment, hue or brightness)"
            )),
        }
    }
}
