//! Error type for palette construction

use thiserror::Error;

use crate::color::ParseColorError;
use crate::quantize::QuantizeError;

/// Error returned when a palette cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A grayscale ramp needs at least black and white
    #[error("grayscale palette needs at least 2 levels, got {0}")]
    TooFewLevels(usize),

    /// More levels than there are distinct 8-bit greys
    #[error("grayscale palette allows at most 256 levels, got {0}")]
    TooManyLevels(usize),

    /// Content-derived palettes must have a power-of-two size
    #[error("palette size must be a positive power of 2, got {0}")]
    SizeNotPowerOfTwo(usize),

    /// The custom palette text ended before all triplets were read
    #[error("expected {expected} colors, input ended after {found}")]
    TruncatedInput {
        /// Number of colors requested
        expected: usize,
        /// Number of complete colors read
        found: usize,
    },

    /// A custom palette entry could not be parsed
    #[error("invalid color at index {index}: {source}")]
    ParseColor {
        /// Palette index of the bad entry
        index: usize,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },

    /// Quantization of the sample set failed
    #[error(transparent)]
    Quantize(#[from] QuantizeError),
}
