//! Drag end handling - commit the drop, or finish as a no-op.

use super::drag::pending_position;
use super::state::{DragContext, DragOutcome, DragSession, DragState, NoOpReason};
use crate::collision::CollisionStrategy;
use crate::error::BoardResult;
use crate::events::{DragCancel, DragEnd, DragSource};
use crate::types::{Rect, TargetId, Tile};
use tracing::{debug, info};

impl DragState {
    /// Finish the drag. On success the state is always Idle afterwards; on
    /// error nothing changes, the session included.
    pub fn handle_drag_end(&mut self, event: DragEnd, ctx: &mut DragContext<'_>) -> BoardResult<DragOutcome> {
        let session = self.active_session(&event.id)?;

        let Some((target, target_rect)) = drop_target(session, &event, ctx) else {
            debug!(id = %event.id, "dropped outside any target");
            self.reset();
            return Ok(DragOutcome::NoOp {
                id: event.id,
                reason: NoOpReason::NoTarget,
            });
        };

        if target != ctx.config.canvas_target {
            debug!(id = %event.id, drop_target = %target, "dropped on non-canvas target");
            self.reset();
            return Ok(DragOutcome::NoOp {
                id: event.id,
                reason: NoOpReason::NotCanvas { target },
            });
        }

        if event.delta.is_zero() {
            self.reset();
            return Ok(DragOutcome::NoOp {
                id: event.id,
                reason: NoOpReason::NoMovement,
            });
        }

        let position = pending_position(session, event.delta, &target_rect, ctx)?;

        let outcome = match session.source {
            DragSource::Tray => {
                let word = session.active_id.as_str();
                let tile = Tile::new(ctx.registry.unique_id_for(word), position, word);
                ctx.registry.append(tile.clone())?;
                info!(id = %tile.id, x = position.x, y = position.y, "placed tile");
                DragOutcome::Placed { tile }
            }
            DragSource::Canvas => {
                let from = ctx.registry.move_to(session.active_id.as_str(), position)?;
                debug!(id = %event.id, x = position.x, y = position.y, "moved tile");
                DragOutcome::Repositioned {
                    id: event.id,
                    from,
                    to: position,
                }
            }
        };

        self.reset();
        Ok(outcome)
    }

    pub fn handle_drag_cancel(&mut self, event: DragCancel) -> BoardResult<DragOutcome> {
        self.active_session(&event.id)?;
        debug!(id = %event.id, "drag cancelled");
        self.reset();
        Ok(DragOutcome::Cancelled { id: event.id })
    }
}

/// Where the item was released.
///
/// With drop targets registered the collision strategy decides, so the drop
/// agrees with the live highlight. The host's `over` is used only when the
/// board knows no targets.
fn drop_target(session: &DragSession, event: &DragEnd, ctx: &DragContext<'_>) -> Option<(TargetId, Rect)> {
    if ctx.targets.is_empty() {
        return event.over.as_ref().map(|over| (over.id.clone(), over.rect));
    }

    let drop_rect = session.initial_rect.translate(event.delta);
    let hit = ctx
        .strategy
        .resolve(&drop_rect, ctx.targets.as_slice())
        .into_iter()
        .next()?;
    let rect = ctx.targets.rect(hit.id.as_str())?;
    Some((hit.id, rect))
}
