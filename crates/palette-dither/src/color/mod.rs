//! Color types
//!
//! - [`Rgb`]: an 8-bit-per-channel color, the unit stored in pixel buffers
//!   and palettes.
//! - [`ColorSample`]: the same triplet as fed to the median-cut quantizer.
//!
//! # Example
//!
//! ```
//! use palette_dither::{ColorSample, Rgb};
//!
//! let color: Rgb = "255 128 0".parse().unwrap();
//! assert_eq!(color, Rgb::new(255, 128, 0));
//! assert_eq!(color.to_string(), "255 128 0");
//!
//! let sample = ColorSample::from(color);
//! assert_eq!(sample.value, [255, 128, 0]);
//! ```

mod error;
mod rgb;
mod sample;

pub use error::ParseColorError;
pub use rgb::Rgb;
pub use sample::ColorSample;
