mod config;
mod palette_spec;

pub use config::{AppConfig, CONFIG_ENV};
pub use palette_spec::PaletteSpec;
