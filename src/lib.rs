//! Swatchbook
//!
//! Color library service built on the `swatch-core` engine: fetches named
//! colors and segments, keeps them sorted by segment, hue or brightness,
//! and serves them over a JSON API.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
