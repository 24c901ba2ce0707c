//! Board-wide constants.
//!
//! Centralizes magic numbers and well-known identifiers so the coordinate,
//! collision and drag code never hard-codes them.

// ============================================================================
// Drop Targets
// ============================================================================

/// Identifier of the tray droppable. Wins every collision tie.
pub const TRAY_TARGET_ID: &str = "tray";

/// Identifier of the canvas droppable
pub const CANVAS_TARGET_ID: &str = "canvas";

// ============================================================================
// Grid & Tiles
// ============================================================================

/// Default snapping grid in logical pixels
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Logical size of a placed tile, used for overlap queries between tiles
pub const DEFAULT_TILE_SIZE: (f64, f64) = (60.0, 24.0);

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level reachable through `zoom_around`
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level reachable through `zoom_around`
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom factors closer to 1.0 than this are ignored
pub const ZOOM_EPSILON: f64 = 0.001;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Drop completion animation duration in milliseconds (snaps instantly)
pub const DROP_ANIMATION_DURATION_MS: u64 = 0;

/// CSS easing applied to the drop completion animation
pub const DROP_ANIMATION_EASING: &str = "ease";

/// Scopes slower than this are reported by the profiler
pub const SLOW_SCOPE_MS: f64 = 4.0;
