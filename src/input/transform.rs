//! Canvas transformations - pan, zoom, and the store holding the current transform.

use crate::constants::ZOOM_EPSILON;
use crate::error::{BoardError, BoardResult};
use crate::types::{Point, Transform};
use tracing::{debug, warn};

/// Holds the pan/zoom transform of the canvas viewport.
///
/// Single writer (the host's pan/zoom gesture handler), read by the
/// coordinate mapper and the renderer.
#[derive(Debug, Clone, Default)]
pub struct TransformStore {
    current: Transform,
}

impl TransformStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Transform {
        self.current
    }

    /// Replace the transform wholesale. Values are accepted as-is as long as
    /// the scale is positive; an invalid transform leaves the store untouched.
    pub fn replace(&mut self, transform: Transform) -> BoardResult<()> {
        if let Err(e) = transform.validate() {
            warn!(?transform, "rejected transform change: {}", e);
            return Err(e);
        }
        self.current = transform;
        Ok(())
    }

    /// Pan by a viewport pixel offset.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> BoardResult<()> {
        let next = Transform::new(self.current.x + dx, self.current.y + dy, self.current.k);
        self.replace(next)
    }

    /// Multiply the scale by `factor` while keeping `anchor` (viewport space)
    /// fixed on screen. The resulting scale is clamped to `extent`.
    ///
    /// Returns `Ok(false)` when the zoom would not change anything.
    pub fn zoom_around(&mut self, factor: f64, anchor: Point, extent: (f64, f64)) -> BoardResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(BoardError::Domain(format!("zoom factor must be positive, got {factor}")));
        }
        if (factor - 1.0).abs() <= ZOOM_EPSILON {
            return Ok(false);
        }

        let old = self.current;
        let k = (old.k * factor).clamp(extent.0, extent.1);
        if (k - old.k).abs() <= f64::EPSILON {
            return Ok(false);
        }

        // Logical point under the anchor stays under the anchor
        let logical = Point::new((anchor.x - old.x) / old.k, (anchor.y - old.y) / old.k);
        let next = Transform::new(anchor.x - logical.x * k, anchor.y - logical.y * k, k);
        self.replace(next)?;
        debug!(from = old.k, to = k, "zoomed canvas");
        Ok(true)
    }

    pub fn reset(&mut self) {
        self.current = Transform::IDENTITY;
    }
}
