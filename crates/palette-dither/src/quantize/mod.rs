//! Content-derived palette generation.
//!
//! The only algorithm provided is median cut ([`MedianCut`]), reachable
//! either through the [`Quantizer`] trait or the [`quantize`] function.
//!
//! # Example
//!
//! ```
//! use palette_dither::{quantize, ColorSample, Rgb};
//!
//! let samples = [
//!     ColorSample::new(0, 0, 0),
//!     ColorSample::new(10, 10, 10),
//!     ColorSample::new(250, 250, 250),
//!     ColorSample::new(255, 255, 255),
//! ];
//! let colors = quantize(&samples, 1).unwrap();
//! assert_eq!(colors, vec![Rgb::new(5, 5, 5), Rgb::new(253, 253, 253)]);
//! ```

mod error;
mod median_cut;

pub use error::QuantizeError;
pub use median_cut::{quantize, MedianCut, MAX_DEPTH};

use crate::color::{ColorSample, Rgb};

/// A palette derivation algorithm.
///
/// `depth` is the number of bisections; implementors return exactly
/// `2^depth` colors.
pub trait Quantizer {
    /// Derive `2^depth` representative colors from `samples`.
    fn quantize(&self, samples: &[ColorSample], depth: u32) -> Result<Vec<Rgb>, QuantizeError>;
}
