//! Color ordering
//!
//! Two independent orderings are provided:
//!
//! - **Metric order** by hue or brightness. Note the polarity:
//!   `ascending = true` puts the *highest* metric value first,
//!   `ascending = false` the lowest first.
//! - **Segment order**, which walks through the segment list. Colors are
//!   ordered by nearest segment first, then by where they sit between that
//!   segment and its closest neighbour, so consecutive entries flow from
//!   one segment into the next. This is what gradient-ordered color lists
//!   are built from.
//!
//! All sorts are stable. Hex string variants always move strings that do
//! not parse to the end, whatever the direction, and keep those in their
//! input order.

use std::cmp::Ordering;

use crate::color::{hex, Color};
use crate::segment::Segments;

/// Metric used by the metric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMetric {
    /// HSB hue, see [`crate::metrics::hue`]
    Hue,
    /// Luma brightness, see [`crate::metrics::brightness`]
    Brightness,
}

impl SortMetric {
    /// Metric value of `color`.
    #[inline]
    pub fn value(self, color: Color) -> f64 {
        match self {
            SortMetric::Hue => color.hue(),
            SortMetric::Brightness => color.brightness(),
        }
    }
}

/// Compare two colors by metric.
///
/// `Ordering::Less` means `a` sorts before `b`.
pub fn compare_by_metric(a: Color, b: Color, metric: SortMetric, ascending: bool) -> Ordering {
    let va = metric.value(a);
    let vb = metric.value(b);
    if ascending {
        vb.total_cmp(&va)
    } else {
        va.total_cmp(&vb)
    }
}

/// Sort colors by metric. See [`compare_by_metric`].
///
/// ```
/// use swatch_core::{sort, Color, SortMetric};
///
/// let colors = [Color::BLACK, Color::WHITE];
/// let sorted = sort::sort_by_metric(&colors, SortMetric::Brightness, true);
/// assert_eq!(sorted, vec![Color::WHITE, Color::BLACK]);
/// ```
pub fn sort_by_metric(colors: &[Color], metric: SortMetric, ascending: bool) -> Vec<Color> {
    let mut keyed: Vec<(f64, Color)> = colors.iter().map(|&c| (metric.value(c), c)).collect();
    keyed.sort_by(|(va, _), (vb, _)| {
        if ascending {
            vb.total_cmp(va)
        } else {
            va.total_cmp(vb)
        }
    });
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Sort hex strings by metric. Invalid strings go last.
pub fn sort_hex_by_metric<S: AsRef<str>>(
    hexes: &[S],
    metric: SortMetric,
    ascending: bool,
) -> Vec<String> {
    let mut keyed: Vec<(Option<f64>, &str)> = hexes
        .iter()
        .map(|s| {
            let s = s.as_ref();
            (hex::parse(s).ok().map(|c| metric.value(c)), s)
        })
        .collect();
    keyed.sort_by(|(va, _), (vb, _)| {
        invalid_last(*va, *vb, |va, vb| {
            if ascending {
                vb.total_cmp(&va)
            } else {
                va.total_cmp(&vb)
            }
        })
    });
    keyed.into_iter().map(|(_, s)| s.to_string()).collect()
}

/// Where a color sits within a segment list.
///
/// Ordering positions gives the ascending segment order: first by the
/// nearest segment index, then by `offset` within that segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentPosition {
    /// Index of the nearest segment
    pub index: usize,
    /// Signed offset within the segment.
    ///
    /// - first segment: minus the distance to the second segment, so colors
    ///   leaning towards the next segment come last
    /// - last segment: the distance to the second to last segment, so
    ///   colors leaning towards the previous segment come first
    /// - interior segment: distance to the closer neighbour, negative when
    ///   that neighbour is the previous segment (ties pick the next one)
    pub offset: i64,
}

/// Position of `color` within `segments`.
///
/// Returns `None` if there are fewer than two segments, since a single
/// segment cannot order anything.
pub fn segment_position(color: Color, segments: &Segments) -> Option<SegmentPosition> {
    if !segments.is_partitioning() {
        return None;
    }
    let index = segments.best_match(color)?;
    let colors = segments.as_slice();
    let last = colors.len() - 1;
    let dist = |i: usize| color.rgb_distance(colors[i]) as i64;

    let offset = if index == 0 {
        -dist(1)
    } else if index == last {
        dist(last - 1)
    } else {
        let left = -dist(index - 1);
        let right = dist(index + 1);
        if left.abs() < right.abs() {
            left
        } else {
            right
        }
    };

    Some(SegmentPosition { index, offset })
}

/// Compare two colors by their position in `segments`.
///
/// With fewer than two segments every pair compares equal. The
/// `ascending` flag reverses the whole comparison.
pub fn compare_in_segments(a: Color, b: Color, segments: &Segments, ascending: bool) -> Ordering {
    match (segment_position(a, segments), segment_position(b, segments)) {
        (Some(pa), Some(pb)) => directed(pa.cmp(&pb), ascending),
        _ => Ordering::Equal,
    }
}

/// Sort colors in segment order. See [`compare_in_segments`].
///
/// ```
/// use swatch_core::{sort, Color, Segments};
///
/// let segments = Segments::new(&[Color::BLACK, Color::WHITE]);
/// let colors = [Color::WHITE, Color::rgb(0.2, 0.2, 0.2), Color::BLACK];
/// let sorted = sort::sort_into_segments(&colors, &segments, true);
/// assert_eq!(sorted, vec![Color::BLACK, Color::rgb(0.2, 0.2, 0.2), Color::WHITE]);
/// ```
pub fn sort_into_segments(colors: &[Color], segments: &Segments, ascending: bool) -> Vec<Color> {
    if !segments.is_partitioning() {
        return colors.to_vec();
    }
    let mut keyed: Vec<(Option<SegmentPosition>, Color)> = colors
        .iter()
        .map(|&c| (segment_position(c, segments), c))
        .collect();
    keyed.sort_by(|(pa, _), (pb, _)| directed(pa.cmp(pb), ascending));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Sort hex strings in segment order. Invalid strings go last.
pub fn sort_hex_into_segments<S: AsRef<str>>(
    hexes: &[S],
    segments: &Segments,
    ascending: bool,
) -> Vec<String> {
    let mut keyed: Vec<(Option<Option<SegmentPosition>>, &str)> = hexes
        .iter()
        .map(|s| {
            let s = s.as_ref();
            (
                hex::parse(s).ok().map(|c| segment_position(c, segments)),
                s,
            )
        })
        .collect();
    keyed.sort_by(|(pa, _), (pb, _)| {
        invalid_last(*pa, *pb, |pa, pb| match (pa, pb) {
            (Some(pa), Some(pb)) => directed(pa.cmp(&pb), ascending),
            _ => Ordering::Equal,
        })
    });
    keyed.into_iter().map(|(_, s)| s.to_string()).collect()
}

#[inline]
fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Order parsed values with `cmp`, pushing unparsed ones (`None`) last.
#[inline]
fn invalid_last<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
