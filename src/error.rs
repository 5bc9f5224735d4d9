use std::path::PathBuf;

use palette_dither::{BufferError, PaletteError, ReduceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read input image {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Failed to write output image {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteSpecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this failure.
    ///
    /// 2 for an unreadable input image, 3 for a palette problem, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Input { .. } => 2,
            AppError::Palette(_) => 3,
            AppError::Output { .. } | AppError::Io(_) => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG layout: {0}")]
    PngLayout(String),

    #[error("PPM codec error: {0}")]
    Pnm(#[from] image::ImageError),

    #[error("Image dimensions {0}x{1} are not supported")]
    UnsupportedDimensions(usize, usize),

    #[error("Invalid image buffer: {0}")]
    Buffer(#[from] BufferError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PaletteSpecError {
    #[error("Invalid palette size: {0:?}")]
    InvalidSize(String),

    #[error("Invalid palette size for B&W: must be at least 2")]
    GrayscaleTooSmall,

    #[error("Size required for {0} palette")]
    SizeRequired(&'static str),

    #[error("Size must be a power of 2, got {0}")]
    NotPowerOfTwo(usize),

    #[error("Unrecognized palette identifier: {0:?}")]
    UnknownName(String),

    #[error("Failed to read custom palette: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Palette(#[from] ReduceError),
}

impl From<PaletteError> for PaletteSpecError {
    fn from(err: PaletteError) -> Self {
        PaletteSpecError::Palette(err.into())
    }
}
