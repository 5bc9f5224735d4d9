//! Floyd-Steinberg error diffusion.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Error diffusion with the 7/3/5/1 weights of [`FLOYD_STEINBERG`].
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// All of a pixel's quantization error is handed on. Rows are always
/// scanned left to right (no serpentine), and each share is truncated
/// toward zero before it is added to the neighbor.
///
/// # Example
///
/// ```
/// use palette_dither::{Dither, FloydSteinberg, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::grayscale(2).unwrap();
/// let mut image = PixelBuffer::filled(8, 8, Rgb::new(128, 128, 128)).unwrap();
/// FloydSteinberg.dither(&mut image, &palette);
///
/// assert!(image.pixels().iter().all(|&px| px == Rgb::BLACK || px == Rgb::WHITE));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &mut PixelBuffer, palette: &Palette) {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG);
    }
}
