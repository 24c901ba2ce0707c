//! Host-facing input events.
//!
//! The host's drag sensors and pan/zoom handler report these. All geometry
//! is in viewport pixel space.

use crate::error::{BoardError, BoardResult};
use crate::types::{Point, Rect, TargetId, TileId, Transform};
use serde::{Deserialize, Serialize};

/// Where a drag started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragSource {
    /// A word picked from the tray; dropping it creates a tile
    Tray,
    /// A tile already placed on the canvas; dropping it moves the tile
    Canvas,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragStart {
    pub id: TileId,
    pub initial_rect: Rect,
    pub source: DragSource,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragMove {
    pub id: TileId,
    /// Accumulated pointer displacement since the drag started
    pub delta: Point,
}

/// The drop target the pointer was released over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Over {
    pub id: TargetId,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragEnd {
    pub id: TileId,
    pub delta: Point,
    pub over: Option<Over>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragCancel {
    pub id: TileId,
}

/// Everything the host can tell the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    DragStart(DragStart),
    DragMove(DragMove),
    DragEnd(DragEnd),
    DragCancel(DragCancel),
    TransformChange(Transform),
}

impl BoardEvent {
    /// Short name for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::DragStart(_) => "drag_start",
            BoardEvent::DragMove(_) => "drag_move",
            BoardEvent::DragEnd(_) => "drag_end",
            BoardEvent::DragCancel(_) => "drag_cancel",
            BoardEvent::TransformChange(_) => "transform_change",
        }
    }

    /// Reject payloads the state machine cannot act on.
    ///
    /// Transform changes are checked by the transform store instead, since a
    /// bad scale there is a domain error rather than a malformed event.
    pub fn validate(&self) -> BoardResult<()> {
        match self {
            BoardEvent::DragStart(e) => {
                require_id(&e.id)?;
                require_rect("initial_rect", &e.initial_rect)
            }
            BoardEvent::DragMove(e) => {
                require_id(&e.id)?;
                require_delta(&e.delta)
            }
            BoardEvent::DragEnd(e) => {
                require_id(&e.id)?;
                require_delta(&e.delta)?;
                match &e.over {
                    Some(over) => require_rect("over.rect", &over.rect),
                    None => Ok(()),
                }
            }
            BoardEvent::DragCancel(e) => require_id(&e.id),
            BoardEvent::TransformChange(_) => Ok(()),
        }
    }
}

fn require_id(id: &TileId) -> BoardResult<()> {
    if id.as_str().is_empty() {
        return Err(BoardError::InvalidEvent("empty item id".to_string()));
    }
    Ok(())
}

fn require_delta(delta: &Point) -> BoardResult<()> {
    if !delta.is_finite() {
        return Err(BoardError::InvalidEvent(format!("non-finite delta {delta:?}")));
    }
    Ok(())
}

fn require_rect(field: &str, rect: &Rect) -> BoardResult<()> {
    if !rect.is_well_formed() {
        return Err(BoardError::InvalidEvent(format!("malformed {field}: {rect:?}")));
    }
    Ok(())
}
