use std::io::Cursor;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use palette_dither::PixelBuffer;

use crate::error::ImageError;

/// Decode a netpbm image (`P3`/`P6` pixmaps, also graymaps and bitmaps).
///
/// Samples with a maxval other than 255 are rescaled to 8 bits. Header
/// dimensions are checked against the decoder's allocation limits before
/// any pixel storage is reserved.
pub fn decode_ppm(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let rgb = image::load_from_memory_with_format(bytes, ImageFormat::Pnm)?.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    tracing::debug!(width, height, "Decoded PPM");
    Ok(PixelBuffer::from_rgb_bytes(width, height, rgb.as_raw())?)
}

/// Encode as binary `P6` with maxval 255.
pub fn encode_ppm(image: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let width = u32::try_from(image.width())
        .map_err(|_| ImageError::UnsupportedDimensions(image.width(), image.height()))?;
    let height = u32::try_from(image.height())
        .map_err(|_| ImageError::UnsupportedDimensions(image.width(), image.height()))?;

    let mut buf = Cursor::new(Vec::new());
    PnmEncoder::new(&mut buf)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(&image.to_rgb_bytes(), width, height, ExtendedColorType::Rgb8)?;
    Ok(buf.into_inner())
}
