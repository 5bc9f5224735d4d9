use std::io::{BufRead, Write};
use std::path::PathBuf;

use palette_dither::{DitherMethod, Palette, Reducer};

use crate::error::AppError;
use crate::image_io::{read_image, write_image};
use crate::models::PaletteSpec;

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub palette: PaletteSpec,
    pub dither: bool,
    pub verbose: bool,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub palette: Palette,
    pub method: DitherMethod,
}

/// Read, reduce and write one image.
///
/// `custom_source` supplies triplets for a `custom` palette. With `verbose`
/// set the palette is printed to `out`, one `R G B` line per color.
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    custom_source: R,
    out: &mut W,
) -> Result<RunSummary, AppError> {
    let mut image = read_image(&options.input).map_err(|source| AppError::Input {
        path: options.input.clone(),
        source,
    })?;

    let palette = options.palette.resolve(&image, custom_source)?;
    tracing::info!(spec = %options.palette, colors = palette.len(), "Palette ready");

    if options.verbose {
        write_palette(&palette, out)?;
    }

    let reducer = Reducer::new(palette).dither(options.dither);
    reducer.reduce(&mut image);

    write_image(&image, &options.output).map_err(|source| AppError::Output {
        path: options.output.clone(),
        source,
    })?;

    let method = reducer.selected_method();
    Ok(RunSummary {
        width: image.width(),
        height: image.height(),
        palette: reducer.palette().clone(),
        method,
    })
}

/// Print one `R G B` line per palette entry.
pub fn write_palette<W: Write>(palette: &Palette, out: &mut W) -> std::io::Result<()> {
    for color in palette {
        writeln!(out, "{color}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_dither::{PixelBuffer, Rgb};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn options(dir: &tempfile::TempDir, palette: PaletteSpec) -> RunOptions {
        RunOptions {
            input: dir.path().join("in.ppm"),
            output: dir.path().join("out.ppm"),
            palette,
            dither: true,
            verbose: false,
        }
    }

    fn write_input(path: &std::path::Path, image: &PixelBuffer) {
        crate::image_io::write_image(image, path).unwrap();
    }

    #[test]
    fn test_write_palette_lines() {
        let palette = Palette::new(&[Rgb::BLACK, Rgb::new(1, 22, 255)]).unwrap();
        let mut out = Vec::new();
        write_palette(&palette, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0 0\n1 22 255\n");
    }

    #[test]
    fn test_run_grayscale_strip() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir, PaletteSpec::Grayscale(2));
        let grey = Rgb::new(100, 100, 100);
        write_input(&opts.input, &PixelBuffer::filled(4, 1, grey).unwrap());

        let mut out = Vec::new();
        let summary = run(&opts, Cursor::new(""), &mut out).unwrap();

        assert_eq!(summary.width, 4);
        assert_eq!(summary.method, DitherMethod::FloydSteinberg);
        assert!(out.is_empty());

        let result = read_image(&opts.output).unwrap();
        assert_eq!(
            result.pixels(),
            &[Rgb::BLACK, Rgb::WHITE, Rgb::BLACK, Rgb::BLACK]
        );
    }

    #[test]
    fn test_run_without_dither_uses_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir, PaletteSpec::Grayscale(2));
        opts.dither = false;
        write_input(
            &opts.input,
            &PixelBuffer::filled(4, 1, Rgb::new(100, 100, 100)).unwrap(),
        );

        let summary = run(&opts, Cursor::new(""), &mut Vec::new()).unwrap();
        assert_eq!(summary.method, DitherMethod::None);
        assert_eq!(read_image(&opts.output).unwrap().pixels(), &[Rgb::BLACK; 4]);
    }

    #[test]
    fn test_run_verbose_custom_palette() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir, PaletteSpec::Custom(2));
        opts.verbose = true;
        write_input(&opts.input, &PixelBuffer::filled(2, 2, Rgb::new(250, 10, 10)).unwrap());

        let mut out = Vec::new();
        let summary = run(&opts, Cursor::new("255 0 0\n0 0 255\n"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "255 0 0\n0 0 255\n");
        assert_eq!(summary.palette.len(), 2);
    }

    #[test]
    fn test_missing_input_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir, PaletteSpec::Rgb);
        let err = run(&opts, Cursor::new(""), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Input { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_palette_failure_is_palette_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir, PaletteSpec::Custom(3));
        write_input(&opts.input, &PixelBuffer::filled(1, 1, Rgb::WHITE).unwrap());

        let err = run(&opts, Cursor::new("1 2 3"), &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(!opts.output.exists());
    }

    #[test]
    fn test_unsupported_output_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir, PaletteSpec::Rgb);
        opts.output = dir.path().join("out.gif");
        write_input(&opts.input, &PixelBuffer::filled(1, 1, Rgb::WHITE).unwrap());

        let err = run(&opts, Cursor::new(""), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Output { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
