//! Test fixtures and constants.

use palette_dither::{PixelBuffer, Rgb};

/// Palette identifiers used across the suite
pub mod palettes {
    pub const STANDARD: &str = "rgb";
    pub const BLACK_WHITE: &str = "bw";
    pub const FOUR_GREYS: &str = "bw.4";
    pub const AUTO_EIGHT: &str = "auto.8";
}

/// Three-color custom palette as it would arrive on stdin
pub const CUSTOM_RGB_STDIN: &str = "255 0 0\n0 255 0\n0 0 255\n";

pub fn grey(v: u8) -> Rgb {
    Rgb::new(v, v, v)
}

/// 4x1 strip of mid grey; diffused onto black/white it becomes B, W, B, B
pub fn grey_strip() -> PixelBuffer {
    PixelBuffer::filled(4, 1, grey(100)).unwrap()
}

/// Horizontal grey ramp, each row identical
pub fn grey_ramp(width: usize, height: usize) -> PixelBuffer {
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| grey((x * 255 / (width - 1).max(1)) as u8)))
        .collect();
    PixelBuffer::new(width, height, pixels).unwrap()
}

/// Colorful test card: red/green gradient with a blue diagonal
pub fn color_card(width: usize, height: usize) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = if x == y { 255 } else { 40 };
            pixels.push(Rgb::new(r, g, b));
        }
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}
