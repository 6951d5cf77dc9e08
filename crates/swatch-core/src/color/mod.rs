//! Color value type, hex codec and color metrics
//!
//! # Example
//!
//! ```
//! use swatch_core::Color;
//!
//! let orange: Color = "#FF8000".parse().unwrap();
//! assert_eq!(orange.to_hex(), "#FF8000");
//! assert!(orange.brightness() > 0.5);
//! ```

pub mod hex;
pub mod metrics;
mod rgba;

pub use rgba::Color;
