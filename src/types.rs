//! Core types for the board.
//!
//! Points and rectangles are used in two spaces: viewport pixel space (what
//! the pointer and DOM rectangles report) and canvas logical space (where
//! tiles live, independent of pan/zoom). Nothing here converts between them;
//! that is the job of [`crate::input::coords`].

use crate::error::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::{Add, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point or displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Exactly zero on both axes (a click, not a drag)
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Rectangle with its top-left corner at `origin`
    pub fn from_origin(origin: Point, size: (f64, f64)) -> Self {
        Self::new(origin.y, origin.x, size.0, size.1)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Same size, moved by `delta`
    pub fn translate(&self, delta: Point) -> Rect {
        Rect::new(self.top + delta.y, self.left + delta.x, self.width, self.height)
    }

    /// Area shared with `other`, or 0.0 unless both axes overlap by a
    /// positive amount. Rectangles that only touch along an edge do not
    /// intersect.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let overlap_x = self.right().min(other.right()) - self.left.max(other.left);
        let overlap_y = self.bottom().min(other.bottom()) - self.top.max(other.top);
        if overlap_x > 0.0 && overlap_y > 0.0 {
            overlap_x * overlap_y
        } else {
            0.0
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection_area(other) > 0.0
    }

    /// Finite components and a non-negative size
    pub fn is_well_formed(&self) -> bool {
        [self.top, self.left, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Pan/zoom applied to the canvas viewport: translation in viewport pixels
/// and a uniform scale factor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    #[inline]
    pub fn translation(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Fails unless `k > 0` and every component is finite.
    pub fn validate(&self) -> BoardResult<()> {
        if !(self.x.is_finite() && self.y.is_finite() && self.k.is_finite()) {
            return Err(BoardError::Domain(format!(
                "transform has non-finite component: {self:?}"
            )));
        }
        if self.k <= 0.0 {
            return Err(BoardError::Domain(format!(
                "transform scale must be positive, got {}",
                self.k
            )));
        }
        Ok(())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a droppable region (the tray, the canvas)
    TargetId
);

string_id!(
    /// Identifier of a draggable word, unique within the registry
    TileId
);

// ============================================================================
// Tiles
// ============================================================================

/// A word placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Canvas logical space, independent of pan/zoom
    pub position: Point,
    pub text: String,
}

impl Tile {
    pub fn new(id: impl Into<TileId>, position: Point, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            text: text.into(),
        }
    }

    /// Logical bounds of the tile for the given tile size
    pub fn bounds(&self, size: (f64, f64)) -> Rect {
        Rect::from_origin(self.position, size)
    }
}
