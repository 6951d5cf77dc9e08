//! Blending of two or more colors
//!
//! [`blend`] interpolates linearly between two colors. [`blend_many`]
//! computes a weighted average of any number of colors, with the weights
//! either given explicitly (they must form a distribution, i.e. be
//! non-negative and add up to 1.0) or implied as equal shares.

use crate::color::Color;
use crate::error::DistributionError;

/// Blend factor giving both colors equal weight.
pub const DEFAULT_BLEND: f64 = 0.5;

/// Tolerance when checking that weights add up to 1.0.
pub const DISTRIBUTION_EPSILON: f64 = 1e-9;

/// Linear interpolation `a * (1 - t) + b * t` on R, G, B and A.
///
/// `t` is not clamped: values outside `0.0..=1.0` extrapolate past either
/// color, and callers use that for effects.
///
/// # Example
/// ```
/// use swatch_core::{blend, Color};
///
/// let grey = blend::blend(Color::BLACK, Color::WHITE, 0.5);
/// assert_eq!(grey, Color::rgb(0.5, 0.5, 0.5));
/// ```
pub fn blend(a: Color, b: Color, t: f64) -> Color {
    let s = 1.0 - t;
    Color::new(
        a.r * s + b.r * t,
        a.g * s + b.g * t,
        a.b * s + b.b * t,
        a.a * s + b.a * t,
    )
}

/// Weighted average of `colors`.
///
/// With an empty `weights` slice every color contributes `1 / N`.
/// Otherwise `weights[i]` is the share of `colors[i]`.
///
/// # Errors
///
/// - [`DistributionError::Empty`] if `colors` is empty
/// - [`DistributionError::LengthMismatch`] if weights are given for a
///   different number of colors
/// - [`DistributionError::InvalidSum`] if the weights do not add up to 1.0
/// - [`DistributionError::NegativeWeight`] for a weight below zero
/// - [`DistributionError::Overflow`] if the running total passes 1.0
///
/// # Example
/// ```
/// use swatch_core::{blend, Color};
///
/// let colors = [Color::BLACK, Color::WHITE];
/// let c = blend::blend_many(&colors, &[0.25, 0.75]).unwrap();
/// assert_eq!(c, Color::rgb(0.75, 0.75, 0.75));
///
/// assert!(blend::blend_many(&colors, &[0.4, 0.4]).is_err());
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn blend_many(colors: &[Color], weights: &[f64]) -> Result<Color, DistributionError> {
    if colors.is_empty() {
        return Err(DistributionError::Empty);
    }

    if !weights.is_empty() {
        if weights.len() != colors.len() {
            return Err(DistributionError::LengthMismatch {
                colors: colors.len(),
                weights: weights.len(),
            });
        }
        let sum: f64 = weights.iter().sum();
        // NaN fails every comparison, so each check only accepts
        if !((sum - 1.0).abs() <= DISTRIBUTION_EPSILON) {
            return Err(DistributionError::InvalidSum { sum });
        }
    }

    let equal_share = 1.0 / colors.len() as f64;
    let mut total = 0.0;
    let mut out = Color::new(0.0, 0.0, 0.0, 0.0);

    for (i, color) in colors.iter().enumerate() {
        let weight = if weights.is_empty() {
            equal_share
        } else {
            weights[i]
        };
        if !(weight >= 0.0) {
            return Err(DistributionError::NegativeWeight { index: i });
        }
        total += weight;
        if !(total <= 1.0 + DISTRIBUTION_EPSILON) {
            return Err(DistributionError::Overflow { index: i });
        }

        out.r += color.r * weight;
        out.g += color.g * weight;
        out.b += color.b * weight;
        out.a += color.a * weight;
    }

    Ok(out)
}

impl Color {
    /// See [`blend`].
    #[inline]
    pub fn blend_with(self, other: Color, t: f64) -> Color {
        blend(self, other, t)
    }
}
