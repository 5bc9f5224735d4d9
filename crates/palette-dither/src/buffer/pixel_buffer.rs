use super::error::BufferError;
use crate::color::{ColorSample, Rgb};

/// A row-major RGB image owned in memory.
///
/// Pixel `(x, y)` lives at index `y * width + x`. Accessors are
/// bounds-checked; out-of-range coordinates return `None` / `false`
/// instead of touching neighboring rows.
///
/// # Example
///
/// ```
/// use palette_dither::{PixelBuffer, Rgb};
///
/// let mut image = PixelBuffer::filled(3, 2, Rgb::BLACK).unwrap();
/// assert_eq!(image.resolution(), 6);
///
/// assert!(image.set(2, 1, Rgb::WHITE));
/// assert_eq!(image.get(2, 1), Some(Rgb::WHITE));
/// assert_eq!(image.get(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Wrap `pixels` (row-major) as a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroDimension`] if either dimension is zero
    /// - [`BufferError::DimensionMismatch`] if `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        let expected = Self::checked_resolution(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::DimensionMismatch {
                len: pixels.len(),
                expected,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, BufferError> {
        let resolution = Self::checked_resolution(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; resolution],
        })
    }

    /// Build an image from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, BufferError> {
        let resolution = Self::checked_resolution(width, height)?;
        if bytes.len() != resolution * 3 {
            return Err(BufferError::DimensionMismatch {
                len: bytes.len(),
                expected: resolution * 3,
                width,
                height,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn checked_resolution(width: usize, height: usize) -> Result<usize, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        Ok(width * height)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count, `width * height`.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite pixel `(x, y)`. Returns `false` (and does nothing) outside
    /// the image.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) -> bool {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
            true
        } else {
            false
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// One row of pixels, or `None` if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        if y < self.height {
            Some(&self.pixels[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// Copy the pixels into quantizer samples.
    pub fn samples(&self) -> Vec<ColorSample> {
        self.pixels.iter().map(|&px| ColorSample::from(px)).collect()
    }

    /// Pack the pixels as `[R, G, B, R, G, B, ...]`.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            rgb.extend_from_slice(&px.to_bytes());
        }
        rgb
    }
}
