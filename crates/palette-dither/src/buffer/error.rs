use thiserror::Error;

/// Error returned when a pixel buffer cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height is zero
    #[error("image dimensions cannot be zero ({width}x{height})")]
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Pixel or byte count does not match the dimensions
    #[error("buffer length {len} does not match {width}x{height} (expected {expected})")]
    DimensionMismatch {
        /// Length actually supplied
        len: usize,
        /// Length implied by the dimensions
        expected: usize,
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}
