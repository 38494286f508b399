//! Centralized theme for the console.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: status glyphs and the loading spinner

pub mod icons;
pub mod palette;
pub mod styles;
