//! Board configuration.
//!
//! Everything has a default, so an empty JSON object (or no file at all)
//! yields the stock fridge-poetry board.

use crate::constants::{
    CANVAS_TARGET_ID, DEFAULT_GRID_SIZE, DEFAULT_TILE_SIZE, DROP_ANIMATION_DURATION_MS,
    DROP_ANIMATION_EASING, MAX_ZOOM, MIN_ZOOM, TRAY_TARGET_ID,
};
use crate::error::{BoardError, BoardResult};
use crate::types::TargetId;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Easing used when a dropped word settles into place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropAnimation {
    pub duration_ms: u64,
    pub easing: String,
}

impl Default for DropAnimation {
    fn default() -> Self {
        Self {
            duration_ms: DROP_ANIMATION_DURATION_MS,
            easing: DROP_ANIMATION_EASING.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Grid used when snapping committed positions
    pub grid_size: f64,
    /// Snap committed positions to the grid
    pub snap_to_grid: bool,
    /// Droppable that wins every collision tie
    pub tray_target: TargetId,
    /// Droppable that accepts tiles
    pub canvas_target: TargetId,
    /// Logical tile size used for tile overlap highlighting
    pub tile_size: (f64, f64),
    /// Scale bounds applied by `zoom_around` (not by wholesale replacement)
    pub scale_extent: (f64, f64),
    pub drop_animation: DropAnimation,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: false,
            tray_target: TargetId::from(TRAY_TARGET_ID),
            canvas_target: TargetId::from(CANVAS_TARGET_ID),
            tile_size: DEFAULT_TILE_SIZE,
            scale_extent: (MIN_ZOOM, MAX_ZOOM),
            drop_animation: DropAnimation::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: BoardConfig = serde_json::from_str(json).context("Failed to parse board config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board config {}", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("Invalid board config {}", path.display()))?;
        debug!(path = %path.display(), "loaded board config");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> BoardResult<()> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(BoardError::Domain(format!("grid_size must be positive, got {}", self.grid_size)));
        }
        let (min, max) = self.scale_extent;
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(BoardError::Domain(format!("invalid scale_extent [{min}, {max}]")));
        }
        let (w, h) = self.tile_size;
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(BoardError::Domain(format!("invalid tile_size [{w}, {h}]")));
        }
        if self.tray_target == self.canvas_target {
            return Err(BoardError::Domain(format!(
                "tray and canvas targets must differ, both are {}",
                self.tray_target
            )));
        }
        Ok(())
    }
}

/// `<config dir>/fridgeboard/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fridgeboard").join("config.json"))
}
