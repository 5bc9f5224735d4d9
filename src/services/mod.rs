pub mod pipeline;

pub use pipeline::{run, write_palette, RunOptions, RunSummary};
