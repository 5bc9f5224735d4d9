//! dither - reduce images to a small palette
//!
//! Command-line front end for the `palette-dither` core: image file I/O,
//! palette identifiers, YAML defaults and the processing pipeline.
//! This library exposes modules for integration testing.

pub mod error;
pub mod image_io;
pub mod models;
pub mod services;
