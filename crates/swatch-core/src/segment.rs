//! Segments: ordered reference colors for matching and grouping
//!
//! A segment list is a sequence of anchor colors. Every color belongs to
//! the segment it is closest to (by [`rgb_distance`]), and the position of
//! a segment in the list defines the order of the groups.
//!
//! [`rgb_distance`]: crate::metrics::rgb_distance

use crate::color::{hex, metrics, Color};

/// An ordered list of segment colors.
///
/// # Example
///
/// ```
/// use swatch_core::{Color, Segments};
///
/// let segments = Segments::from_hex_lossy(["#000", "#FFF", "not a color"]);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments.best_match(Color::rgb(0.9, 0.9, 0.9)), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segments {
    colors: Vec<Color>,
}

impl Segments {
    /// Create a segment list from colors, keeping their order.
    pub fn new(colors: &[Color]) -> Self {
        Self {
            colors: colors.to_vec(),
        }
    }

    /// Create a segment list from hex strings.
    ///
    /// Strings that are not valid hex colors are dropped, so indices refer
    /// to the valid entries only.
    pub fn from_hex_lossy<I, S>(hexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            colors: hexes
                .into_iter()
                .filter_map(|s| hex::parse(s.as_ref()).ok())
                .collect(),
        }
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if there are no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Segment color at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Color> {
        self.colors.get(idx).copied()
    }

    /// All segment colors in order.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// True when the list can partition colors, i.e. has two or more entries.
    #[inline]
    pub fn is_partitioning(&self) -> bool {
        self.colors.len() > 1
    }

    /// Index of the nearest segment. Ties go to the earlier segment.
    #[inline]
    pub fn best_match(&self, color: Color) -> Option<usize> {
        metrics::index_of_best_match(color, &self.colors)
    }

    /// Group colors into one bucket per segment.
    ///
    /// With fewer than two segments there is nothing to partition by, and
    /// the result is a single bucket holding every input color in order.
    pub fn group(&self, colors: &[Color]) -> Vec<Vec<Color>> {
        if !self.is_partitioning() {
            return vec![colors.to_vec()];
        }

        let mut buckets = vec![Vec::new(); self.colors.len()];
        for &color in colors {
            if let Some(idx) = self.best_match(color) {
                buckets[idx].push(color);
            }
        }
        buckets
    }

    /// Group hex strings into one bucket per segment.
    ///
    /// Strings that do not parse are skipped. With fewer than two segments
    /// the input is returned verbatim as a single bucket.
    pub fn group_hex<S: AsRef<str>>(&self, hexes: &[S]) -> Vec<Vec<String>> {
        if !self.is_partitioning() {
            return vec![hexes.iter().map(|s| s.as_ref().to_string()).collect()];
        }

        let mut buckets = vec![Vec::new(); self.colors.len()];
        for s in hexes {
            let Ok(color) = hex::parse(s.as_ref()) else {
                continue;
            };
            if let Some(idx) = self.best_match(color) {
                buckets[idx].push(s.as_ref().to_string());
            }
        }
        buckets
    }
}

impl From<Vec<Color>> for Segments {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

/// Index of the segment nearest to `color`, `None` if `segments` is empty.
pub fn best_match_index(color: Color, segments: &[Color]) -> Option<usize> {
    metrics::index_of_best_match(color, segments)
}

/// Group `colors` by nearest segment. See [`Segments::group`].
pub fn group_by_segment(colors: &[Color], segments: &[Color]) -> Vec<Vec<Color>> {
    Segments::new(segments).group(colors)
}

/// Group hex strings by nearest segment, with segments given as hex too.
///
/// Invalid segment strings are dropped before counting buckets. See
/// [`Segments::group_hex`].
pub fn group_hex_by_segment<S: AsRef<str>, T: AsRef<str>>(
    hexes: &[S],
    segments: &[T],
) -> Vec<Vec<String>> {
    Segments::from_hex_lossy(segments).group_hex(hexes)
}
