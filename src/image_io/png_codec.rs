use std::io::Cursor;

use palette_dither::{PixelBuffer, Rgb};

use crate::error::ImageError;

/// Decode a PNG into an RGB buffer.
///
/// Palette and low bit depth images are expanded to 8 bits per channel and
/// 16-bit images are stripped to 8. Alpha is dropped.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::PngDecode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::PngLayout(format!("{:?} bits", info.bit_depth)));
    }
    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(ImageError::PngLayout(format!("{other:?}"))),
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let row_bytes = width * channels;
    let data = &buf[..info.buffer_size()];

    let mut pixels = Vec::with_capacity(width * height);
    for row in data.chunks(info.line_size).take(height) {
        let row = row
            .get(..row_bytes)
            .ok_or_else(|| ImageError::PngDecode("short row".to_string()))?;
        pixels.extend(row.chunks_exact(channels).map(|px| match channels {
            1 | 2 => Rgb::new(px[0], px[0], px[0]),
            _ => Rgb::new(px[0], px[1], px[2]),
        }));
    }

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
    Ok(PixelBuffer::new(width, height, pixels)?)
}

/// Encode as 8-bit RGB.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let width = u32::try_from(image.width())
        .map_err(|_| ImageError::UnsupportedDimensions(image.width(), image.height()))?;
    let height = u32::try_from(image.height())
        .map_err(|_| ImageError::UnsupportedDimensions(image.width(), image.height()))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgb_bytes())
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode_raw(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_encode_then_decode_rgb() {
        let pixels = vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(12, 34, 56),
            Rgb::BLACK,
            Rgb::WHITE,
        ];
        let image = PixelBuffer::new(3, 2, pixels).unwrap();

        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(decode_png(&bytes).unwrap(), image);
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let data = [10, 20, 30, 0, 40, 50, 60, 255];
        let bytes = encode_raw(2, 1, png::ColorType::Rgba, png::BitDepth::Eight, &data);
        let image = decode_png(&bytes).unwrap();
        assert_eq!(image.pixels(), &[Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]);
    }

    #[test]
    fn test_decode_grayscale() {
        let bytes = encode_raw(
            3,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Eight,
            &[0, 100, 255],
        );
        let image = decode_png(&bytes).unwrap();
        assert_eq!(
            image.pixels(),
            &[Rgb::BLACK, Rgb::new(100, 100, 100), Rgb::WHITE]
        );
    }

    #[test]
    fn test_decode_gray_alpha() {
        let bytes = encode_raw(
            1,
            1,
            png::ColorType::GrayscaleAlpha,
            png::BitDepth::Eight,
            &[77, 0],
        );
        assert_eq!(decode_png(&bytes).unwrap().pixels(), &[Rgb::new(77, 77, 77)]);
    }

    #[test]
    fn test_decode_one_bit_gray_is_expanded() {
        // 0b1010_0000: white, black, white, black
        let bytes = encode_raw(4, 1, png::ColorType::Grayscale, png::BitDepth::One, &[0xA0]);
        let image = decode_png(&bytes).unwrap();
        assert_eq!(
            image.pixels(),
            &[Rgb::WHITE, Rgb::BLACK, Rgb::WHITE, Rgb::BLACK]
        );
    }

    #[test]
    fn test_decode_sixteen_bit_is_stripped() {
        let data = [0xAB, 0xCD, 0x12, 0x34, 0xFF, 0xFF];
        let bytes = encode_raw(1, 1, png::ColorType::Rgb, png::BitDepth::Sixteen, &data);
        assert_eq!(
            decode_png(&bytes).unwrap().pixels(),
            &[Rgb::new(0xAB, 0x12, 0xFF)]
        );
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_png(b"not a png"),
            Err(ImageError::PngDecode(_))
        ));
    }
}
