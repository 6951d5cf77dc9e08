//! Error types for hex parsing and blending
//!
//! Both errors are recoverable: callers decide whether to skip, default or
//! abort. Nothing in this crate panics on bad input.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not an optional `#` followed by exactly three
/// or six hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after stripping one leading '#' is not 3 or 6
    InvalidLength {
        /// Number of characters found after the optional '#'
        len: usize,
    },
    /// A character that is not a hexadecimal digit was found
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Character position in the original string
        position: usize,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { len } => {
                write!(
                    f,
                    "invalid hex color length {} (expected 3 or 6 digits)",
                    len
                )
            }
            ParseColorError::InvalidCharacter { ch, position } => {
                write!(f, "invalid hex character {:?} at position {}", ch, position)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for multi-color blending.
///
/// Every variant means the requested weight distribution cannot produce a
/// weighted average.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// No colors to blend
    Empty,
    /// Weights were given but their count differs from the color count
    LengthMismatch {
        /// Number of colors
        colors: usize,
        /// Number of weights
        weights: usize,
    },
    /// Weights do not add up to 1.0
    InvalidSum {
        /// The actual sum
        sum: f64,
    },
    /// A weight is below zero
    NegativeWeight {
        /// Index of the negative weight
        index: usize,
    },
    /// The running total passed 1.0 at the given index
    Overflow {
        /// Index where the cumulative weight exceeded 1.0
        index: usize,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::Empty => write!(f, "cannot blend an empty list of colors"),
            DistributionError::LengthMismatch { colors, weights } => {
                write!(
                    f,
                    "distribution length mismatch: {} colors, {} weights",
                    colors, weights
                )
            }
            DistributionError::InvalidSum { sum } => {
                write!(f, "distribution weights sum to {} (expected 1.0)", sum)
            }
            DistributionError::NegativeWeight { index } => {
                write!(f, "negative distribution weight at index {}", index)
            }
            DistributionError::Overflow { index } => {
                write!(f, "cumulative distribution exceeds 1.0 at index {}", index)
            }
        }
    }
}

impl std::error::Error for DistributionError {}
