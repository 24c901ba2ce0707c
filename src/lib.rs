//! Headless core of a drag-and-drop fridge-poetry board.
//!
//! The host UI owns rendering and pointer sensors. It forwards drag lifecycle
//! events and pan/zoom changes to a [`Board`], which maps pointer-space
//! deltas into canvas logical space, resolves drop targets, and keeps the
//! ordered tile registry.

pub mod board;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod palette;
pub mod perf;
pub mod registry;
pub mod spatial_index;
pub mod types;

pub use board::{Board, BoardSnapshot};
pub use collision::{Collision, CollisionStrategy, DropTargets, PriorityTargetStrategy, RectIntersection};
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use events::{BoardEvent, DragCancel, DragEnd, DragMove, DragSource, DragStart, Over};
pub use input::{DragOutcome, DragSession, DragState, NoOpReason};
pub use registry::TileRegistry;
pub use types::{Point, Rect, TargetId, Tile, TileId, Transform};
