//! Palette types and generators
//!
//! This module provides the [`Palette`] type, nearest-color matching, and
//! the canonical palette constructors (grayscale ramp, the fixed 16-color
//! table, custom lists, and median-cut palettes).

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{nearest_color, Palette, MAX_GRAY_LEVELS, STANDARD_RGB};
