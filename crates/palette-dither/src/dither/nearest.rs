//! Direct nearest-color replacement.

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::Dither;

/// Replace each pixel with its nearest palette color, without diffusion.
///
/// Every pixel is mapped independently, so the result does not depend on
/// scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestOnly;

impl Dither for NearestOnly {
    fn dither(&self, image: &mut PixelBuffer, palette: &Palette) {
        for px in image.pixels_mut() {
            *px = palette.nearest_color(*px);
        }
        debug!(
            width = image.width(),
            height = image.height(),
            colors = palette.len(),
            "Nearest-color pass complete"
        );
    }
}
