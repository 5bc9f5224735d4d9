//! Palette struct with nearest-color matching and the canonical generators.

use tracing::debug;

use super::error::PaletteError;
use crate::color::{ColorSample, ParseColorError, Rgb};
use crate::quantize::{MedianCut, Quantizer};

/// The fixed 16-color table used when no palette is requested.
///
/// Six saturated primaries and secondaries, black and white, followed by
/// half-intensity (`0x88`) versions of the six, black again, and grey.
pub const STANDARD_RGB: [Rgb; 16] = [
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0x00, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x00, 0xFF),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0x88, 0x00, 0x00),
    Rgb::new(0x00, 0x88, 0x00),
    Rgb::new(0x00, 0x00, 0x88),
    Rgb::new(0x00, 0x88, 0x88),
    Rgb::new(0x88, 0x00, 0x88),
    Rgb::new(0x88, 0x88, 0x00),
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x88, 0x88, 0x88),
];

/// Largest grayscale ramp; every 8-bit grey appears exactly once.
pub const MAX_GRAY_LEVELS: usize = 256;

/// An ordered, non-empty set of colors.
///
/// A palette's index is the color id used to replace pixels. Palettes are
/// immutable once built; duplicates are allowed (the standard table holds
/// black twice, and quantizing a flat image yields one color repeated).
///
/// # Example
///
/// ```
/// use palette_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest_color(Rgb::new(200, 180, 190)), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        Self::custom(colors.to_vec())
    }

    /// Take ownership of an externally supplied color list.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn custom(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// The canonical 16-color palette ([`STANDARD_RGB`]).
    pub fn standard_rgb() -> Self {
        Self {
            colors: STANDARD_RGB.to_vec(),
        }
    }

    /// A grayscale ramp of `levels` evenly spaced greys from 0 to 255.
    ///
    /// Level `i` is `round(i * 255 / (levels - 1))`, rounded half away
    /// from zero.
    ///
    /// ```
    /// use palette_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::grayscale(3).unwrap();
    /// assert_eq!(palette.get(1), Some(Rgb::new(128, 128, 128)));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`PaletteError::TooFewLevels`] if `levels < 2`
    /// - [`PaletteError::TooManyLevels`] if `levels > MAX_GRAY_LEVELS`
    pub fn grayscale(levels: usize) -> Result<Self, PaletteError> {
        if levels < 2 {
            return Err(PaletteError::TooFewLevels(levels));
        }
        if levels > MAX_GRAY_LEVELS {
            return Err(PaletteError::TooManyLevels(levels));
        }
        let step = 255.0f32 / (levels - 1) as f32;
        let colors = (0..levels)
            .map(|i| {
                let v = (i as f32 * step).round().clamp(0.0, 255.0) as u8;
                Rgb::new(v, v, v)
            })
            .collect();
        Ok(Self { colors })
    }

    /// Read exactly `size` whitespace-separated `R G B` triplets.
    ///
    /// Anything after the last requested triplet is ignored. `size` is not
    /// trusted for allocation; storage grows with the triplets actually read.
    ///
    /// ```
    /// use palette_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::parse_triplets("0 0 0\n255 0 0\n", 2).unwrap();
    /// assert_eq!(palette.colors(), &[Rgb::BLACK, Rgb::new(255, 0, 0)]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `size` is zero
    /// - [`PaletteError::TruncatedInput`] if fewer than `size` triplets are present
    /// - [`PaletteError::ParseColor`] if a component is not an integer in `0..=255`
    pub fn parse_triplets(text: &str, size: usize) -> Result<Self, PaletteError> {
        if size == 0 {
            return Err(PaletteError::EmptyPalette);
        }

        let mut tokens = text.split_whitespace();
        let mut colors = Vec::new();
        for index in 0..size {
            let mut channels = [0u8; 3];
            for channel in channels.iter_mut() {
                let token = tokens.next().ok_or(PaletteError::TruncatedInput {
                    expected: size,
                    found: index,
                })?;
                *channel = ParseColorError::component(token)
                    .map_err(|source| PaletteError::ParseColor { index, source })?;
            }
            colors.push(Rgb::from_bytes(channels));
        }

        debug!(colors = colors.len(), "Read custom palette");
        Ok(Self { colors })
    }

    /// Derive a `size`-color palette from image samples with median cut.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::SizeNotPowerOfTwo`] if `size` is zero or not a power of two
    /// - [`PaletteError::Quantize`] if the quantizer rejects the input
    pub fn from_samples(samples: &[ColorSample], size: usize) -> Result<Self, PaletteError> {
        Self::from_samples_with(&MedianCut, samples, size)
    }

    /// Like [`from_samples`](Self::from_samples) with an explicit quantizer.
    pub fn from_samples_with<Q: Quantizer + ?Sized>(
        quantizer: &Q,
        samples: &[ColorSample],
        size: usize,
    ) -> Result<Self, PaletteError> {
        if !size.is_power_of_two() {
            return Err(PaletteError::SizeNotPowerOfTwo(size));
        }
        let depth = size.trailing_zeros();
        let colors = quantizer.quantize(samples, depth)?;
        debug!(size, depth, "Built quantized palette");
        Self::custom(colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`, if in range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// True if every entry is a neutral grey.
    pub fn is_greyscale(&self) -> bool {
        self.colors.iter().all(|c| c.is_grey())
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Distance is squared Euclidean distance in RGB. The scan visits every
    /// entry in order and only replaces the current best on a strictly
    /// smaller distance, so ties resolve to the lowest index.
    ///
    /// # Returns
    ///
    /// `(index, distance_squared)` of the nearest entry.
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_sq(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }

    /// The palette member closest to `color`.
    #[inline]
    pub fn nearest_color(&self, color: Rgb) -> Rgb {
        self.colors[self.find_nearest(color).0]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Return the member of `palette` nearest to `query`.
///
/// Free-function form of [`Palette::nearest_color`].
#[inline]
pub fn nearest_color(query: Rgb, palette: &Palette) -> Rgb {
    palette.nearest_color(query)
}
