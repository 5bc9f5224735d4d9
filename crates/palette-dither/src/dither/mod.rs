//! Palette mapping passes.
//!
//! Two passes replace every pixel of a [`PixelBuffer`] with a palette member:
//!
//! - [`FloydSteinberg`]: error diffusion in strict raster order
//! - [`NearestOnly`]: direct nearest-color replacement, no diffusion
//!
//! Both implement the [`Dither`] trait; [`DitherMethod`] selects one at
//! runtime.
//!
//! # Example
//!
//! ```
//! use palette_dither::{dither, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
//! let mut image = PixelBuffer::filled(4, 1, Rgb::new(100, 100, 100)).unwrap();
//!
//! dither(&mut image, &palette);
//! assert_eq!(
//!     image.pixels(),
//!     &[Rgb::BLACK, Rgb::WHITE, Rgb::BLACK, Rgb::BLACK]
//! );
//! ```

mod floyd_steinberg;
mod kernel;
mod nearest;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use nearest::NearestOnly;

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::palette::Palette;

/// Palette mapping selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMethod {
    /// Floyd-Steinberg error diffusion.
    #[default]
    FloydSteinberg,

    /// Replace each pixel by its nearest palette color without diffusing
    /// the residual.
    None,
}

impl DitherMethod {
    /// Run the selected pass over `image`.
    pub fn apply(self, image: &mut PixelBuffer, palette: &Palette) {
        match self {
            DitherMethod::FloydSteinberg => FloydSteinberg.dither(image, palette),
            DitherMethod::None => NearestOnly.dither(image, palette),
        }
    }
}

/// A pass that maps every pixel of an image onto a palette.
///
/// Implementations mutate `image` in place and never touch `palette`.
/// After the call every pixel is a member of `palette`.
pub trait Dither {
    /// Replace every pixel of `image` with a member of `palette`.
    fn dither(&self, image: &mut PixelBuffer, palette: &Palette);
}

/// Floyd-Steinberg dither `image` against `palette` in place.
pub fn dither(image: &mut PixelBuffer, palette: &Palette) {
    FloydSteinberg.dither(image, palette);
}

/// Pending error for rows the kernel can still reach.
///
/// Stores `max_dy + 1` rows of per-channel signed error. Values are
/// unclamped; clamping happens when a pixel is read.
///
/// The scan reads a pixel's total with `get_accumulated`, pushes its own
/// error forward with `add_error`, and calls `advance_row` at the end of
/// each row so the window slides down by one.
#[derive(Debug)]
pub struct ErrorBuffer {
    /// `rows[dy]` holds error for the row `dy` below the current one
    rows: Vec<Vec<[i32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer of `row_depth` rows, each `width` wide.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for pixel `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [i32; 3] {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [i32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    ///
    /// The first row is discarded, the rest shift forward, and a zeroed row
    /// is appended.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0; 3]);
        }
    }
}

/// Add pending error to a pixel and clamp each channel to `0..=255`.
#[inline]
pub(crate) fn apply_error(pixel: Rgb, error: [i32; 3]) -> Rgb {
    let channel = |value: u8, err: i32| (value as i32 + err).clamp(0, 255) as u8;
    Rgb::new(
        channel(pixel.r, error[0]),
        channel(pixel.g, error[1]),
        channel(pixel.b, error[2]),
    )
}

/// Error diffusion loop parameterized by kernel.
///
/// Pixels are visited left to right, top to bottom. For each pixel the
/// pending error is added and clamped, the nearest palette color is written
/// back, and `value - chosen` is spread over the kernel's neighbors.
/// Contributions aimed outside the image are dropped.
pub(crate) fn dither_with_kernel(image: &mut PixelBuffer, palette: &Palette, kernel: &Kernel) {
    let width = image.width();
    let height = image.height();
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let pixel = apply_error(image.pixels()[idx], error_buf.get_accumulated(x));

            let chosen = palette.nearest_color(pixel);
            image.pixels_mut()[idx] = chosen;

            let error = [
                pixel.r as i32 - chosen.r as i32,
                pixel.g as i32 - chosen.g as i32,
                pixel.b as i32 - chosen.b as i32,
            ];
            if error == [0; 3] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                if nx < 0 || nx >= width as i64 {
                    continue;
                }
                if y + dy as usize >= height {
                    continue;
                }
                let scaled = [
                    kernel.scale(error[0], weight),
                    kernel.scale(error[1], weight),
                    kernel.scale(error[2], weight),
                ];
                error_buf.add_error(nx as usize, dy as usize, scaled);
            }
        }
        error_buf.advance_row();
    }

    debug!(
        width,
        height,
        colors = palette.len(),
        "Error diffusion pass complete"
    );
}
