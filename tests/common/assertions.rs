//! Assertion helpers for tests.

use palette_dither::{Palette, PixelBuffer, Rgb};
use pretty_assertions::assert_eq;

/// Assert every pixel is one of the palette colors
pub fn assert_palette_members(image: &PixelBuffer, palette: &[Rgb]) {
    for (i, px) in image.pixels().iter().enumerate() {
        assert!(
            palette.contains(px),
            "Pixel {} ({}) is not in palette {:?}",
            i,
            px,
            palette
        );
    }
}

/// Assert dimensions survived the round trip
pub fn assert_same_size(actual: &PixelBuffer, expected: &PixelBuffer) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Image dimensions changed"
    );
}

/// Parse the verbose palette dump back into colors
pub fn parse_palette_dump(out: &[u8]) -> Vec<Rgb> {
    let text = std::str::from_utf8(out).expect("palette dump should be UTF-8");
    text.lines()
        .map(|line| line.parse().expect("each line should be an R G B triplet"))
        .collect()
}

/// Assert the dump lists exactly the palette, in order
pub fn assert_palette_dump(out: &[u8], palette: &Palette) {
    assert_eq!(parse_palette_dump(out), palette.colors().to_vec());
}
