use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use palette_dither::{Palette, PixelBuffer};

use crate::error::PaletteSpecError;

/// Palette selection parsed from a `name[.size]` identifier.
///
/// | Identifier | Palette |
/// |------------|---------|
/// | `rgb` | the fixed 16-color table (size ignored) |
/// | `bw[.N]` | N-level grayscale ramp, default 2 |
/// | `custom.N` | N `R G B` triplets read from a stream |
/// | `auto.N` | median-cut palette of the input image, N a power of two |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteSpec {
    #[default]
    Rgb,
    Grayscale(usize),
    Custom(usize),
    Auto(usize),
}

impl PaletteSpec {
    /// Number of colors the resolved palette will hold.
    pub fn size(&self) -> usize {
        match *self {
            PaletteSpec::Rgb => palette_dither::STANDARD_RGB.len(),
            PaletteSpec::Grayscale(n) | PaletteSpec::Custom(n) | PaletteSpec::Auto(n) => n,
        }
    }

    /// Build the palette.
    ///
    /// `image` is only consulted for `auto`, `custom_source` only for
    /// `custom`. Reading stops as soon as enough components are buffered, so
    /// an interactive stdin does not have to be closed.
    pub fn resolve<R: BufRead>(
        &self,
        image: &PixelBuffer,
        custom_source: R,
    ) -> Result<Palette, PaletteSpecError> {
        let palette = match *self {
            PaletteSpec::Rgb => Palette::standard_rgb(),
            PaletteSpec::Grayscale(levels) => Palette::grayscale(levels)?,
            PaletteSpec::Custom(size) => {
                let text = read_components(custom_source, size.saturating_mul(3))?;
                Palette::parse_triplets(&text, size)?
            }
            PaletteSpec::Auto(size) => Palette::from_samples(&image.samples(), size)?,
        };
        tracing::debug!(spec = %self, colors = palette.len(), "Resolved palette");
        Ok(palette)
    }
}

/// Read lines until `wanted` whitespace-separated tokens are buffered or the
/// stream ends.
fn read_components<R: BufRead>(mut reader: R, wanted: usize) -> std::io::Result<String> {
    let mut text = String::new();
    let mut found = 0;
    while found < wanted {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        found += line.split_whitespace().count();
        text.push_str(&line);
    }
    Ok(text)
}

fn parse_size(text: &str) -> Result<usize, PaletteSpecError> {
    match text.trim().parse::<i64>() {
        Ok(n) if n > 0 => {
            usize::try_from(n).map_err(|_| PaletteSpecError::InvalidSize(text.to_string()))
        }
        _ => Err(PaletteSpecError::InvalidSize(text.to_string())),
    }
}

impl FromStr for PaletteSpec {
    type Err = PaletteSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, size) = match s.split_once('.') {
            Some((name, size)) => (name, Some(parse_size(size)?)),
            None => (s, None),
        };

        match name {
            "rgb" => {
                if size.is_some() {
                    tracing::warn!(palette = s, "Ignored palette size");
                }
                Ok(PaletteSpec::Rgb)
            }
            "bw" => match size.unwrap_or(2) {
                0 | 1 => Err(PaletteSpecError::GrayscaleTooSmall),
                n => Ok(PaletteSpec::Grayscale(n)),
            },
            "custom" => size
                .map(PaletteSpec::Custom)
                .ok_or(PaletteSpecError::SizeRequired("custom")),
            "auto" => {
                let size = size.ok_or(PaletteSpecError::SizeRequired("auto"))?;
                if !size.is_power_of_two() {
                    return Err(PaletteSpecError::NotPowerOfTwo(size));
                }
                Ok(PaletteSpec::Auto(size))
            }
            other => Err(PaletteSpecError::UnknownName(other.to_string())),
        }
    }
}

impl fmt::Display for PaletteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteSpec::Rgb => write!(f, "rgb"),
            PaletteSpec::Grayscale(n) => write!(f, "bw.{n}"),
            PaletteSpec::Custom(n) => write!(f, "custom.{n}"),
            PaletteSpec::Auto(n) => write!(f, "auto.{n}"),
        }
    }
}
