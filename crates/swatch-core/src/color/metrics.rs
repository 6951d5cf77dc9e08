//! Color metrics: hue, brightness, weighted distance and best match
//!
//! Brightness and distance use the ITU-R BT.601 luma weights expressed in
//! per-mille (299, 587, 114), so a full-scale difference on every channel
//! is exactly 1000.

use super::rgba::Color;

/// Red luma weight, per mille.
pub const RED_WEIGHT: u32 = 299;
/// Green luma weight, per mille.
pub const GREEN_WEIGHT: u32 = 587;
/// Blue luma weight, per mille.
pub const BLUE_WEIGHT: u32 = 114;
/// Sum of the three weights; the maximum [`rgb_distance`].
pub const WEIGHT_TOTAL: u32 = RED_WEIGHT + GREEN_WEIGHT + BLUE_WEIGHT;

/// HSB hue of a color, in `0.0..1.0`.
///
/// Achromatic colors (all channels equal) have hue 0.
///
/// ```
/// use swatch_core::{metrics, Color};
/// assert_eq!(metrics::hue(Color::rgb(0.0, 1.0, 0.0)), 1.0 / 3.0);
/// ```
pub fn hue(color: Color) -> f64 {
    let Color { r, g, b, .. } = color;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = sector / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    // -epsilon + 1.0 can round up to exactly 1.0
    if h >= 1.0 {
        h = 0.0;
    }
    h
}

/// Perceptual brightness, `(299 R + 587 G + 114 B) / 1000`, in `0.0..=1.0`.
pub fn brightness(color: Color) -> f64 {
    (color.r * RED_WEIGHT as f64 + color.g * GREEN_WEIGHT as f64 + color.b * BLUE_WEIGHT as f64)
        / WEIGHT_TOTAL as f64
}

/// Luma-weighted absolute channel difference, truncated to an integer in
/// `0..=1000`. Alpha is ignored.
pub fn rgb_distance(a: Color, b: Color) -> u32 {
    let red = (a.r - b.r).abs() * RED_WEIGHT as f64;
    let green = (a.g - b.g).abs() * GREEN_WEIGHT as f64;
    let blue = (a.b - b.b).abs() * BLUE_WEIGHT as f64;
    (red + green + blue) as u32
}

/// Similarity in `0.0..=1.0`, where 1.0 means identical RGB channels.
pub fn similarity(a: Color, b: Color) -> f64 {
    1.0 - rgb_distance(a, b) as f64 / WEIGHT_TOTAL as f64
}

/// Complementary color: every RGB channel inverted, alpha kept.
pub fn complement(color: Color) -> Color {
    Color::new(1.0 - color.r, 1.0 - color.g, 1.0 - color.b, color.a)
}

/// Index of the candidate closest to `color` by [`rgb_distance`].
///
/// Ties go to the earliest candidate. Returns `None` for an empty slice.
///
/// ```
/// use swatch_core::{metrics, Color};
///
/// let candidates = [Color::BLACK, Color::WHITE];
/// let idx = metrics::index_of_best_match(Color::rgb(0.9, 0.9, 0.9), &candidates);
/// assert_eq!(idx, Some(1));
/// assert_eq!(metrics::index_of_best_match(Color::BLACK, &[]), None);
/// ```
pub fn index_of_best_match(color: Color, candidates: &[Color]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, &candidate) in candidates.iter().enumerate() {
        let dist = rgb_distance(color, candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

impl Color {
    /// See [`hue`].
    #[inline]
    pub fn hue(self) -> f64 {
        hue(self)
    }

    /// See [`brightness`].
    #[inline]
    pub fn brightness(self) -> f64 {
        brightness(self)
    }

    /// See [`rgb_distance`].
    #[inline]
    pub fn rgb_distance(self, other: Color) -> u32 {
        rgb_distance(self, other)
    }

    /// See [`similarity`].
    #[inline]
    pub fn similarity(self, other: Color) -> f64 {
        similarity(self, other)
    }

    /// See [`complement`].
    #[inline]
    pub fn complement(self) -> Color {
        complement(self)
    }
}
