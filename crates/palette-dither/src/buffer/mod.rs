//! Owned pixel storage.
//!
//! [`PixelBuffer`] is the in-memory image the ditherer mutates. Decoding and
//! encoding image files is left to the caller; the buffer only converts to
//! and from packed RGB8 bytes.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
