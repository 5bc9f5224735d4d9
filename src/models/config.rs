use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "DITHER_CONFIG";

/// Defaults loaded from an optional YAML file.
///
/// ```yaml
/// palette: auto.16
/// dither: true
/// verbose: false
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Palette identifier, same syntax as `--palette`
    #[serde(default)]
    pub palette: Option<String>,

    /// Error diffusion on or off
    #[serde(default = "default_dither")]
    pub dither: bool,

    /// Print the palette to stdout
    #[serde(default)]
    pub verbose: bool,
}

fn default_dither() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: None,
            dither: default_dither(),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to `$DITHER_CONFIG`, then to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::load_from_file(&path),
            None => Self::default(),
        }
    }

    /// Read and parse a YAML file. Errors are logged and yield defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        palette = ?config.palette,
                        dither = config.dither,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
