//! swatch-core: color math for curated color libraries
//!
//! This crate holds the pure, synchronous part of Swatchbook: parsing and
//! formatting hex colors, color metrics, blending, nearest-segment
//! matching and the orderings used to present color lists.
//!
//! # Quick Start
//!
//! ```
//! use swatch_core::{hex, sort, Color, Segments, SortMetric};
//!
//! let colors = ["#FF0000", "#00FF00", "#0000FF"];
//! let by_hue = sort::sort_hex_by_metric(&colors, SortMetric::Hue, false);
//! assert_eq!(by_hue, vec!["#FF0000", "#00FF00", "#0000FF"]);
//!
//! let segments = Segments::from_hex_lossy(["#000", "#FFF"]);
//! let groups = segments.group_hex(&["#111", "#EEE"]);
//! assert_eq!(groups, vec![vec!["#111"], vec!["#EEE"]]);
//!
//! assert_eq!(hex::parse("F00").unwrap(), Color::rgb(1.0, 0.0, 0.0));
//! ```
//!
//! # Distance
//!
//! Matching uses a luma-weighted Manhattan distance on RGB:
//!
//! ```text
//! d = trunc(299 * |dR| + 587 * |dG| + 114 * |dB|)      0 <= d <= 1000
//! ```
//!
//! The weights are the ITU-R BT.601 luma coefficients in per-mille. The
//! same weights give [`metrics::brightness`], so a distance of 1000 is the
//! gap between black and white. [`metrics::similarity`] is `1 - d / 1000`.
//!
//! The metric is deliberately cheap and integer valued: segment lists are
//! short and sorting compares every pair many times.
//!
//! # Segment Order
//!
//! Given segments `s0 .. sn`, each color gets a [`sort::SegmentPosition`]:
//! the index of its nearest segment and a signed offset inside that
//! segment.
//!
//! ```text
//!   s0 ---------- s1 ---------- s2 ---------- s3
//!   [ -d(c, s1) ] [ -d(c,s0) | +d(c,s2) ]  [ +d(c, s2) ]
//!   first         interior: closer side      last
//! ```
//!
//! Inside the first segment, colors further from `s1` come first; inside
//! the last, colors closer to the previous segment come first; inside an
//! interior segment, colors leaning towards the previous segment come
//! before those leaning towards the next. Reading the sorted list then
//! moves smoothly from `s0` to `sn`.

pub mod blend;
pub mod color;
pub mod error;
pub mod segment;
pub mod sort;


pub use color::{hex, metrics, Color};
pub use error::{DistributionError, ParseColorError};
pub use segment::Segments;
pub use sort::{SegmentPosition, SortMetric};
