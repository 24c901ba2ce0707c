//! Drag state machine - a single explicit state for the drag gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (drag start)
//! Dragging -> Dragging         (drag move, recomputes highlights only)
//! Dragging -> Idle             (drag end: drop or no-op)
//! Dragging -> Idle             (drag cancel)
//! ```
//!
//! Transitions never capture renderer state. Each one receives a
//! [`DragContext`] carrying the latest transform, registry and drop targets.

use crate::collision::{CollisionStrategy, DropTargets};
use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::events::DragSource;
use crate::registry::TileRegistry;
use crate::types::{Point, Rect, TargetId, Tile, TileId, Transform};
use serde::Serialize;

/// The in-flight drag. Owned by [`DragState::Dragging`] and dropped with it.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub active_id: TileId,
    pub source: DragSource,
    /// Viewport rect of the dragged item when the drag started
    pub initial_rect: Rect,
    /// Accumulated pointer displacement since start
    pub current_delta: Point,
    /// Targets the drag currently intersects, for highlighting
    pub over: Vec<TargetId>,
    /// Placed tiles the dragged word would land on
    pub colliding_tiles: Vec<TileId>,
}

impl DragSession {
    pub fn new(active_id: TileId, source: DragSource, initial_rect: Rect) -> Self {
        Self {
            active_id,
            source,
            initial_rect,
            current_delta: Point::ZERO,
            over: Vec::new(),
            colliding_tiles: Vec::new(),
        }
    }

    /// Viewport rect of the dragged item at the current delta
    pub fn drag_rect(&self) -> Rect {
        self.initial_rect.translate(self.current_delta)
    }

    /// Fails unless `id` names the item being dragged.
    pub fn expect_active(&self, id: &TileId) -> BoardResult<()> {
        if *id != self.active_id {
            return Err(BoardError::unknown_id(id.as_str()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No active gesture
    #[default]
    Idle,

    /// Exactly one item being dragged
    Dragging(DragSession),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Get the id being dragged, if any
    pub fn active_id(&self) -> Option<&TileId> {
        self.session().map(|s| &s.active_id)
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Session for an event naming `id`; `UnknownId` when idle or when the
    /// event is about some other item.
    pub(crate) fn active_session(&self, id: &TileId) -> BoardResult<&DragSession> {
        let session = self.session().ok_or_else(|| BoardError::unknown_id(id.as_str()))?;
        session.expect_active(id)?;
        Ok(session)
    }
}

/// Everything a transition may read or write, passed fresh on every event.
pub struct DragContext<'a> {
    pub registry: &'a mut TileRegistry,
    pub transform: Transform,
    pub targets: &'a DropTargets,
    pub strategy: &'a dyn CollisionStrategy,
    pub config: &'a BoardConfig,
}

/// Why a drag end (or start) changed nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoOpReason {
    /// Released over no drop target
    NoTarget,
    /// Released over a target that does not accept tiles (e.g. the tray)
    NotCanvas { target: TargetId },
    /// Pointer never moved
    NoMovement,
    /// A start arrived while another item was already being dragged
    AlreadyDragging { active: TileId },
}

/// Observable result of handling one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    Started { id: TileId },
    Moved {
        id: TileId,
        over: Vec<TargetId>,
        colliding: Vec<TileId>,
    },
    /// A tray word became a new tile
    Placed { tile: Tile },
    /// An existing tile moved in place
    Repositioned { id: TileId, from: Point, to: Point },
    NoOp { id: TileId, reason: NoOpReason },
    Cancelled { id: TileId },
    TransformChanged { transform: Transform },
    /// The event was rejected and nothing changed
    Discarded { error: BoardError },
}

impl DragOutcome {
    /// True when the tile registry was changed
    pub fn mutated_registry(&self) -> bool {
        matches!(self, Self::Placed { .. } | Self::Repositioned { .. })
    }
}
