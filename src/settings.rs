//! World and grid configuration
//!
//! Persisted as JSON next to the game; missing or invalid files fall back
//! to the defaults.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CELLS_HORIZONTAL, DEFAULT_CELLS_VERTICAL, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH,
};
use crate::maze::{GridSize, SizeError};

/// Game settings: world extents and grid density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// World width in world units
    pub world_width: f32,
    /// World height in world units
    pub world_height: f32,
    /// Number of cells across (grid columns)
    pub cells_horizontal: usize,
    /// Number of cells down (grid rows)
    pub cells_vertical: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            cells_horizontal: DEFAULT_CELLS_HORIZONTAL,
            cells_vertical: DEFAULT_CELLS_VERTICAL,
        }
    }
}

impl Settings {
    /// Validated grid dimensions (rows = vertical cells, cols = horizontal)
    pub fn grid_size(&self) -> Result<GridSize, SizeError> {
        GridSize::new(self.cells_vertical, self.cells_horizontal)
    }

    /// Cell unit lengths: world extent divided by cell count per axis
    pub fn unit_lengths(&self) -> Vec2 {
        Vec2::new(
            self.world_width / self.cells_horizontal as f32,
            self.world_height / self.cells_vertical as f32,
        )
    }

    /// Load from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("invalid settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}
