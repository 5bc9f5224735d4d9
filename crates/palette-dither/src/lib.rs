#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! palette-dither: median-cut palettes and Floyd-Steinberg dithering
//!
//! This library reduces a full-color image to a small palette. It covers
//! three pieces:
//!
//! - nearest-color matching against a [`Palette`]
//! - palette generation: a grayscale ramp, a fixed 16-color table, a custom
//!   list, or a median-cut palette derived from the image ([`quantize`])
//! - mapping an image onto a palette, either with Floyd-Steinberg error
//!   diffusion ([`dither`]) or by direct nearest-color replacement
//!
//! Decoding and encoding image files is left to the caller; the crate works
//! on an in-memory [`PixelBuffer`].
//!
//! # Quick Start
//!
//! ```
//! use palette_dither::{Palette, PixelBuffer, Reducer, Rgb};
//!
//! let pixels: Vec<Rgb> = (0..64u8).map(|i| Rgb::new(i * 4, 255 - i * 4, 128)).collect();
//! let mut image = PixelBuffer::new(8, 8, pixels).unwrap();
//!
//! // Derive an 8-color palette from the image itself.
//! let palette = Palette::from_samples(&image.samples(), 8).unwrap();
//! assert_eq!(palette.len(), 8);
//!
//! Reducer::new(palette.clone()).reduce(&mut image);
//! assert!(image.pixels().iter().all(|px| palette.colors().contains(px)));
//! ```
//!
//! # Determinism
//!
//! Every operation is a pure function of its input. Fixed rules make the
//! output bit-exact across runs and implementations:
//!
//! | Step | Rule |
//! |------|------|
//! | Nearest color | squared RGB distance, ties go to the lowest palette index |
//! | Median-cut axis | widest channel range, ties go to red, then green, then blue |
//! | Median-cut split | stable sort, lower half takes the extra sample |
//! | Median-cut average | mean rounded half away from zero |
//! | Error diffusion | raster order, each 7/3/5/1 share truncated toward zero |
//!
//! Diffused error is accumulated unclamped and clamped to `0..=255` only when
//! the receiving pixel is read.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod palette;
pub mod quantize;


pub use api::{ReduceError, Reducer};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{ColorSample, ParseColorError, Rgb};
pub use dither::{dither, Dither, DitherMethod, FloydSteinberg, NearestOnly};
pub use palette::{nearest_color, Palette, PaletteError, MAX_GRAY_LEVELS, STANDARD_RGB};
pub use quantize::{quantize, MedianCut, QuantizeError, Quantizer, MAX_DEPTH};
