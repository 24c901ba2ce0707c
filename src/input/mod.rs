//! Drag and pan/zoom input handling for the board.
//!
//! ## Architecture
//!
//! A single explicit state machine (`DragState`) tracks the drag gesture.
//! Each transition lives in its own module and receives the latest
//! transform and registry through a `DragContext`.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum, session, outcomes
//! - `drag_start` - Drag start handling (open a session)
//! - `drag` - Drag move handling (live target and tile highlighting)
//! - `drag_end` - Drag end and cancel handling (commit or discard)
//! - `coords` - Viewport/logical coordinate conversion
//! - `transform` - Pan/zoom transform store

pub mod coords;
mod drag;
mod drag_end;
mod drag_start;
mod state;
pub mod transform;

pub use coords::CoordinateConverter;
pub use state::{DragContext, DragOutcome, DragSession, DragState, NoOpReason};
pub use transform::TransformStore;
