//! Temporary directory holding input and output images for one test.

use std::io::Cursor;
use std::path::PathBuf;

use dither::error::AppError;
use dither::image_io::{read_image, write_image};
use dither::models::PaletteSpec;
use dither::services::{run, RunOptions, RunSummary};
use palette_dither::PixelBuffer;
use tempfile::TempDir;

pub struct TestWorkspace {
    dir: TempDir,
}

/// Result of one pipeline run, with whatever went to stdout
pub struct RunOutput {
    pub result: Result<RunSummary, AppError>,
    pub stdout: Vec<u8>,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` under `name`, format picked from the extension
    pub fn put(&self, name: &str, image: &PixelBuffer) -> PathBuf {
        let path = self.path(name);
        write_image(image, &path).expect("Failed to write fixture image");
        path
    }

    pub fn put_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture bytes");
        path
    }

    pub fn get(&self, name: &str) -> PixelBuffer {
        read_image(&self.path(name)).expect("Failed to read output image")
    }

    pub fn options(&self, input: &str, output: &str, palette: &str) -> RunOptions {
        RunOptions {
            input: self.path(input),
            output: self.path(output),
            palette: palette.parse::<PaletteSpec>().expect("valid palette id"),
            dither: true,
            verbose: false,
        }
    }

    pub fn run(&self, options: &RunOptions, stdin: &str) -> RunOutput {
        let mut stdout = Vec::new();
        let result = run(options, Cursor::new(stdin.as_bytes()), &mut stdout);
        RunOutput { result, stdout }
    }
}
