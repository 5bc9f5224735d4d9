//! Unified error type for the palette-dither public API.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::color::ParseColorError;
use crate::palette::PaletteError;
use crate::quantize::QuantizeError;

/// Unified error type for the palette-dither public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use palette_dither::{Palette, PixelBuffer, ReduceError};
///
/// fn auto_palette(image: &PixelBuffer) -> Result<Palette, ReduceError> {
///     Ok(Palette::from_samples(&image.samples(), 8)?)
/// }
/// ```
#[derive(Debug, Error)]
pub enum ReduceError {
    /// Palette construction failed
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Quantization failed
    #[error("quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    /// Pixel buffer construction failed
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// A color could not be parsed
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}
