//! Public API for the palette-dither crate.
//!
//! This module provides the high-level API: [`Reducer`] builder and
//! [`ReduceError`] unified error type.

mod builder;
mod error;

pub use builder::Reducer;
pub use error::ReduceError;
