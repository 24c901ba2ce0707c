//! Drag start handling - open a session, or refuse a second concurrent drag.

use super::state::{DragContext, DragOutcome, DragSession, DragState, NoOpReason};
use crate::error::{BoardError, BoardResult};
use crate::events::{DragSource, DragStart};
use tracing::{debug, warn};

impl DragState {
    pub fn handle_drag_start(&mut self, event: DragStart, ctx: &DragContext<'_>) -> BoardResult<DragOutcome> {
        if let Some(active) = self.active_id() {
            warn!(active = %active, ignored = %event.id, "drag start while already dragging");
            return Ok(DragOutcome::NoOp {
                id: event.id,
                reason: NoOpReason::AlreadyDragging {
                    active: active.clone(),
                },
            });
        }

        // Only placed tiles can be picked up from the canvas
        if event.source == DragSource::Canvas && !ctx.registry.contains(event.id.as_str()) {
            return Err(BoardError::unknown_id(event.id.as_str()));
        }

        debug!(id = %event.id, source = ?event.source, "drag started");
        let id = event.id.clone();
        *self = DragState::Dragging(DragSession::new(event.id, event.source, event.initial_rect));
        Ok(DragOutcome::Started { id })
    }
}
