//! Reading and writing image files.
//!
//! The format is chosen from the file extension. PNG goes through the `png`
//! crate, PPM through the netpbm codec of the `image` crate.

mod png_codec;
mod ppm_codec;

use std::path::Path;

use palette_dither::PixelBuffer;

use crate::error::ImageError;

pub use png_codec::{decode_png, encode_png};
pub use ppm_codec::{decode_ppm, encode_ppm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Ppm,
}

impl ImageFormat {
    /// Pick a format from the extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "ppm" => Ok(ImageFormat::Ppm),
            _ => Err(ImageError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
        match self {
            ImageFormat::Png => decode_png(bytes),
            ImageFormat::Ppm => decode_ppm(bytes),
        }
    }

    pub fn encode(self, image: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
        match self {
            ImageFormat::Png => encode_png(image),
            ImageFormat::Ppm => encode_ppm(image),
        }
    }
}

pub fn read_image(path: &Path) -> Result<PixelBuffer, ImageError> {
    let format = ImageFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    let image = format.decode(&bytes)?;
    tracing::info!(
        path = %path.display(),
        ?format,
        width = image.width(),
        height = image.height(),
        "Read image"
    );
    Ok(image)
}

pub fn write_image(image: &PixelBuffer, path: &Path) -> Result<(), ImageError> {
    let format = ImageFormat::from_path(path)?;
    let bytes = format.encode(image)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), ?format, bytes = bytes.len(), "Wrote image");
    Ok(())
}
