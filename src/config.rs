use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brush::DEFAULT_BRUSH_SIZE;
use crate::error::{PaintError, Result};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "RASTER_PAINT_CONFIG";

/// Startup configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub brush_size: u32,
    /// Maximum undo depth; 0 keeps every state
    pub history_limit: usize,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 600,
            brush_size: DEFAULT_BRUSH_SIZE,
            history_limit: 50,
        }
    }
}

impl PaintConfig {
    /// Read a JSON config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PaintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Use the file named by `RASTER_PAINT_CONFIG` when set, defaults otherwise.
    /// A broken config file is logged and ignored.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config: {}", err);
                Self::default()
            }
        }
    }
}
