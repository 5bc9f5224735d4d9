//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color with three independent 8-bit channels.
///
/// `Rgb` is a plain value type: two colors with equal channels are the same
/// color. It is what pixel buffers store and what palettes hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Black, `0 0 0`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White, `255 255 255`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance to `other` in RGB space.
    ///
    /// The maximum is `3 * 255^2`, which fits comfortably in a `u32`.
    ///
    /// ```
    /// use palette_dither::Rgb;
    /// assert_eq!(Rgb::BLACK.distance_sq(Rgb::new(1, 2, 3)), 14);
    /// ```
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// True if all three channels are equal.
    #[inline]
    pub fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

/// Formats as `R G B`, space-separated decimal.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a whitespace-separated decimal triplet such as `"255 0 128"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let mut channels = [0u8; 3];
        for (found, channel) in channels.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or(ParseColorError::MissingComponent { found })?;
            *channel = ParseColorError::component(token)?;
        }
        if let Some(extra) = tokens.next() {
            return Err(ParseColorError::TrailingInput(extra.to_string()));
        }
        Ok(Self::from_bytes(channels))
    }
}
