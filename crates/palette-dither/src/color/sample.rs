//! Quantizer input sample

use super::rgb::Rgb;

/// A color sample handed to the median-cut quantizer.
///
/// Same shape as [`Rgb`], but indexed by channel (`value[0]` red,
/// `value[1]` green, `value[2]` blue) so the quantizer can sort and measure
/// along an arbitrary axis without matching on field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSample {
    /// Channel values in R, G, B order.
    pub value: [u8; 3],
}

impl ColorSample {
    /// Create a sample from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { value: [r, g, b] }
    }
}

impl From<Rgb> for ColorSample {
    #[inline]
    fn from(color: Rgb) -> Self {
        Self {
            value: color.to_bytes(),
        }
    }
}

impl From<ColorSample> for Rgb {
    #[inline]
    fn from(sample: ColorSample) -> Self {
        Rgb::from_bytes(sample.value)
    }
}
