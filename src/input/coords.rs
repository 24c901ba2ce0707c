//! Coordinate conversion utilities for canvas interactions.
//!
//! Every conversion between viewport pixel space and canvas logical space
//! goes through [`CoordinateConverter`], so the pan/zoom formulas live in
//! one place. Conversions validate the transform first and fail with
//! [`BoardError::Domain`] instead of producing NaN or infinite positions.

use crate::error::{BoardError, BoardResult};
use crate::types::{Point, Rect, Transform};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a viewport position to canvas logical space
    #[inline]
    pub fn to_logical(viewport: Point, transform: &Transform) -> BoardResult<Point> {
        transform.validate()?;
        finite(
            "logical position",
            Point::new(
                (viewport.x - transform.x) / transform.k,
                (viewport.y - transform.y) / transform.k,
            ),
        )
    }

    /// Convert a canvas logical position to viewport space
    #[inline]
    pub fn to_viewport(logical: Point, transform: &Transform) -> BoardResult<Point> {
        transform.validate()?;
        finite(
            "viewport position",
            Point::new(
                logical.x * transform.k + transform.x,
                logical.y * transform.k + transform.y,
            ),
        )
    }

    /// Logical position of an item released over a drop target.
    ///
    /// The item's initial top-left corner is displaced by the pointer delta,
    /// made relative to the target's own top-left corner, then unpanned and
    /// unscaled.
    pub fn drop_position(
        initial_rect: &Rect,
        target_rect: &Rect,
        delta: Point,
        transform: &Transform,
    ) -> BoardResult<Point> {
        let relative = Point::new(
            initial_rect.left + delta.x - target_rect.left,
            initial_rect.top + delta.y - target_rect.top,
        );
        Self::to_logical(relative, transform)
    }

    /// Convert a delta from viewport to logical space (for drag operations)
    #[inline]
    pub fn delta_to_logical(delta: Point, transform: &Transform) -> BoardResult<Point> {
        transform.validate()?;
        finite("logical delta", Point::new(delta.x / transform.k, delta.y / transform.k))
    }

    /// Convert a delta from logical to viewport space
    #[inline]
    pub fn delta_to_viewport(delta: Point, transform: &Transform) -> BoardResult<Point> {
        transform.validate()?;
        finite("viewport delta", Point::new(delta.x * transform.k, delta.y * transform.k))
    }

    /// Round each axis to the nearest multiple of `grid_size`, halves away
    /// from zero.
    pub fn snap_to_grid(point: Point, grid_size: f64) -> BoardResult<Point> {
        if !grid_size.is_finite() || grid_size <= 0.0 {
            return Err(BoardError::Domain(format!(
                "grid size must be positive, got {grid_size}"
            )));
        }
        finite(
            "snapped position",
            Point::new(
                snap_coordinate(point.x, grid_size),
                snap_coordinate(point.y, grid_size),
            ),
        )
    }
}

/// Pass `point` through, or fail if a conversion overflowed.
pub(crate) fn finite(what: &str, point: Point) -> BoardResult<Point> {
    if !point.is_finite() {
        return Err(BoardError::Domain(format!("{what} is not finite: {point:?}")));
    }
    Ok(point)
}

#[inline]
fn snap_coordinate(value: f64, grid_size: f64) -> f64 {
    // f64::round already rounds halves away from zero
    (value / grid_size).round() * grid_size
}
