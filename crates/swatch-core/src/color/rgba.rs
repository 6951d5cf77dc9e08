//! RGBA color value type

/// An RGBA color with every channel normalized to `0.0..=1.0`.
///
/// `Color` is a plain value: two colors are equal when their channels are.
/// Channels are not clamped on construction, so blending with an
/// extrapolating factor can produce values outside the unit range. Those
/// are clamped only when converting to bytes or hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
    /// Alpha channel (0.0..=1.0)
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create a color from float channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from float channels.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use swatch_core::Color;
    /// let red = Color::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.a, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Create an opaque color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Each channel is scaled by 255, rounded half away from zero and
    /// clamped to 0..=255. Alpha is dropped.
    ///
    /// # Example
    /// ```
    /// use swatch_core::Color;
    /// let grey = Color::rgb(0.5, 0.5, 0.5);
    /// assert_eq!(grey.to_bytes(), [128, 128, 128]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

#[inline]
fn channel_to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let color = Color::from_u8(255, 128, 0);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);

        assert_eq!(Color::from_bytes([255, 128, 0]), color);
        assert_eq!(Color::from([255, 128, 0]), color);
    }

    #[test]
    fn test_to_bytes_rounding_and_clamping() {
        assert_eq!(Color::from_u8(0, 0, 0).to_bytes(), [0, 0, 0]);
        assert_eq!(Color::from_u8(127, 127, 127).to_bytes(), [127, 127, 127]);
        assert_eq!(Color::from_u8(255, 255, 255).to_bytes(), [255, 255, 255]);

        // 0.5 * 255 = 127.5 rounds away from zero
        assert_eq!(Color::rgb(0.5, 0.5, 0.5).to_bytes(), [128, 128, 128]);

        // Out of range channels clamp
        assert_eq!(Color::rgb(-0.2, 1.4, 0.0).to_bytes(), [0, 255, 0]);
    }

    #[test]
    fn test_every_byte_round_trips() {
        for i in 0..=255u8 {
            assert_eq!(Color::from_u8(i, i, i).to_bytes(), [i, i, i]);
        }
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.25);
        assert_eq!(c, Color::new(1.0, 1.0, 1.0, 0.25));
    }
}
