//! Reducer builder -- the primary ergonomic entry point for the crate.

use tracing::info;

use crate::buffer::PixelBuffer;
use crate::dither::DitherMethod;
use crate::palette::Palette;

/// Palette reduction builder.
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`reduce()`](Self::reduce) takes `&self`, so one reducer can process
///   any number of images
///
/// # Example
///
/// ```
/// use palette_dither::{DitherMethod, Palette, PixelBuffer, Reducer, Rgb};
///
/// let reducer = Reducer::new(Palette::grayscale(4).unwrap())
///     .method(DitherMethod::FloydSteinberg);
///
/// let mut image = PixelBuffer::filled(2, 2, Rgb::new(90, 90, 90)).unwrap();
/// reducer.reduce(&mut image);
///
/// assert!(image
///     .pixels()
///     .iter()
///     .all(|px| reducer.palette().colors().contains(px)));
/// ```
#[derive(Debug, Clone)]
pub struct Reducer {
    palette: Palette,
    method: DitherMethod,
}

impl Reducer {
    /// Create a reducer for `palette` using Floyd-Steinberg dithering.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            method: DitherMethod::default(),
        }
    }

    /// Set the mapping pass.
    #[inline]
    pub fn method(mut self, method: DitherMethod) -> Self {
        self.method = method;
        self
    }

    /// Enable or disable error diffusion.
    ///
    /// `false` selects direct nearest-color replacement.
    #[inline]
    pub fn dither(self, enabled: bool) -> Self {
        self.method(if enabled {
            DitherMethod::FloydSteinberg
        } else {
            DitherMethod::None
        })
    }

    /// The palette every pixel is mapped onto.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The selected mapping pass.
    #[inline]
    pub fn selected_method(&self) -> DitherMethod {
        self.method
    }

    /// Map every pixel of `image` onto the palette in place.
    pub fn reduce(&self, image: &mut PixelBuffer) {
        info!(
            width = image.width(),
            height = image.height(),
            colors = self.palette.len(),
            method = ?self.method,
            "Reducing image"
        );
        self.method.apply(image, &self.palette);
    }
}
