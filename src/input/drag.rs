//! Drag move handling - live highlighting while the pointer moves.
//!
//! ## Performance Notes
//!
//! Move events arrive at pointer rate. The handler never touches the
//! registry's tiles, only reads the spatial index. Enable profiling with
//! `cargo build --features profiling` to see timing.

use super::coords::{finite, CoordinateConverter};
use super::state::{DragContext, DragOutcome, DragSession, DragState};
use crate::collision::CollisionStrategy;
use crate::error::{BoardError, BoardResult};
use crate::events::{DragMove, DragSource};
use crate::profile_scope;
use crate::types::{Point, Rect, TileId};
use tracing::trace;

impl DragState {
    pub fn handle_drag_move(&mut self, event: DragMove, ctx: &DragContext<'_>) -> BoardResult<DragOutcome> {
        profile_scope!("drag_move");

        let session = self.active_session(&event.id)?;
        let drag_rect = session.initial_rect.translate(event.delta);

        let over: Vec<_> = ctx
            .strategy
            .resolve(&drag_rect, ctx.targets.as_slice())
            .into_iter()
            .map(|hit| hit.id)
            .collect();

        let colliding = match ctx.targets.rect(ctx.config.canvas_target.as_str()) {
            Some(canvas_rect) if over.contains(&ctx.config.canvas_target) => {
                colliding_tiles(session, event.delta, &canvas_rect, ctx)?
            }
            _ => Vec::new(),
        };

        trace!(id = %event.id, ?over, ?colliding, "drag moved");

        // Only commit once every fallible step is done
        let Some(session) = self.session_mut() else {
            return Err(BoardError::unknown_id(event.id.as_str()));
        };
        session.current_delta = event.delta;
        session.over = over.clone();
        session.colliding_tiles = colliding.clone();

        Ok(DragOutcome::Moved {
            id: event.id,
            over,
            colliding,
        })
    }
}

/// Logical position the dragged word would take if released now.
pub(crate) fn pending_position(
    session: &DragSession,
    delta: Point,
    canvas_rect: &Rect,
    ctx: &DragContext<'_>,
) -> BoardResult<Point> {
    let position = match session.source {
        DragSource::Tray => {
            CoordinateConverter::drop_position(&session.initial_rect, canvas_rect, delta, &ctx.transform)?
        }
        DragSource::Canvas => {
            let tile = ctx
                .registry
                .get(session.active_id.as_str())
                .ok_or_else(|| BoardError::unknown_id(session.active_id.as_str()))?;
            let moved = tile.position + CoordinateConverter::delta_to_logical(delta, &ctx.transform)?;
            finite("tile position", moved)?
        }
    };

    if ctx.config.snap_to_grid {
        CoordinateConverter::snap_to_grid(position, ctx.config.grid_size)
    } else {
        Ok(position)
    }
}

fn colliding_tiles(
    session: &DragSession,
    delta: Point,
    canvas_rect: &Rect,
    ctx: &DragContext<'_>,
) -> BoardResult<Vec<TileId>> {
    let position = pending_position(session, delta, canvas_rect, ctx)?;
    let footprint = Rect::from_origin(position, ctx.registry.tile_size());
    Ok(ctx
        .registry
        .overlapping(&footprint, Some(session.active_id.as_str())))
}
