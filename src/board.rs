//! The board - owns every piece of mutable state and routes host events.
//!
//! The host forwards drag lifecycle events and pan/zoom changes to
//! [`Board::handle`] and reads back the transform, the ordered tiles, and the
//! current highlight data. Nothing here is shared: one owner, one writer.

use crate::collision::{CollisionStrategy, DropTargets, PriorityTargetStrategy};
use crate::config::BoardConfig;
use crate::error::BoardResult;
use crate::events::BoardEvent;
use crate::input::{DragContext, DragOutcome, DragState, TransformStore};
use crate::palette::demo_cards;
use crate::profile_scope;
use crate::registry::TileRegistry;
use crate::types::{Point, Rect, TargetId, Tile, TileId, Transform};
use serde::Serialize;
use tracing::{debug, warn};

/// What the renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub transform: Transform,
    pub tiles: Vec<Tile>,
    pub active: Option<TileId>,
    pub highlighted: Vec<TargetId>,
    pub colliding: Vec<TileId>,
}

pub struct Board {
    config: BoardConfig,
    registry: TileRegistry,
    transform: TransformStore,
    targets: DropTargets,
    strategy: Box<dyn CollisionStrategy>,
    drag: DragState,
}

impl Board {
    pub fn new(config: BoardConfig) -> BoardResult<Self> {
        Self::with_tiles(config, Vec::new())
    }

    /// Board starting with `tiles` already placed, in order.
    pub fn with_tiles(config: BoardConfig, tiles: Vec<Tile>) -> BoardResult<Self> {
        config.validate()?;
        let registry = TileRegistry::from_tiles(tiles, config.tile_size)?;
        let strategy = Box::new(PriorityTargetStrategy::new(config.tray_target.clone()));
        Ok(Self {
            config,
            registry,
            transform: TransformStore::new(),
            targets: DropTargets::new(),
            strategy,
            drag: DragState::Idle,
        })
    }

    /// Board seeded with the demo cards.
    pub fn with_demo_cards(config: BoardConfig) -> BoardResult<Self> {
        Self::with_tiles(config, demo_cards())
    }

    /// Replace the collision strategy.
    pub fn with_strategy(mut self, strategy: impl CollisionStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Handle one host event. Never fails: rejected events come back as
    /// [`DragOutcome::Discarded`] and leave the board untouched.
    pub fn handle(&mut self, event: BoardEvent) -> DragOutcome {
        profile_scope!("board_handle");

        let kind = event.kind();
        if let Err(error) = event.validate() {
            warn!(event = kind, "discarding event: {}", error);
            return DragOutcome::Discarded { error };
        }

        let mut ctx = DragContext {
            registry: &mut self.registry,
            transform: self.transform.current(),
            targets: &self.targets,
            strategy: &*self.strategy,
            config: &self.config,
        };

        let result = match event {
            BoardEvent::DragStart(e) => self.drag.handle_drag_start(e, &ctx),
            BoardEvent::DragMove(e) => self.drag.handle_drag_move(e, &ctx),
            BoardEvent::DragEnd(e) => self.drag.handle_drag_end(e, &mut ctx),
            BoardEvent::DragCancel(e) => self.drag.handle_drag_cancel(e),
            BoardEvent::TransformChange(transform) => self
                .transform
                .replace(transform)
                .map(|()| DragOutcome::TransformChanged { transform }),
        };

        result.unwrap_or_else(|error| {
            warn!(event = kind, "discarding event: {}", error);
            DragOutcome::Discarded { error }
        })
    }

    /// Pan/zoom notification from the host's gesture handler.
    pub fn on_transform_change(&mut self, transform: Transform) -> DragOutcome {
        self.handle(BoardEvent::TransformChange(transform))
    }

    /// Zoom by `factor` around a viewport point, within the configured
    /// scale extent.
    pub fn zoom_around(&mut self, factor: f64, anchor: Point) -> BoardResult<bool> {
        self.transform.zoom_around(factor, anchor, self.config.scale_extent)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> BoardResult<()> {
        self.transform.pan_by(dx, dy)
    }

    /// Register or update a droppable region (viewport space).
    pub fn register_target(&mut self, id: impl Into<TargetId>, rect: Rect) -> BoardResult<()> {
        let id = id.into();
        if let Err(error) = self.targets.register(id.clone(), rect) {
            warn!(drop_target = %id, "rejected drop target: {}", error);
            return Err(error);
        }
        debug!(drop_target = %id, ?rect, "registered drop target");
        Ok(())
    }

    pub fn unregister_target(&mut self, id: &str) -> bool {
        self.targets.unregister(id)
    }

    // ========================================================================
    // Outputs
    // ========================================================================

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn transform(&self) -> Transform {
        self.transform.current()
    }

    pub fn tiles(&self) -> &[Tile] {
        self.registry.tiles()
    }

    pub fn registry(&self) -> &TileRegistry {
        &self.registry
    }

    pub fn targets(&self) -> &DropTargets {
        &self.targets
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Targets the active drag intersects; empty when idle.
    pub fn highlighted_targets(&self) -> &[TargetId] {
        self.drag.session().map(|s| s.over.as_slice()).unwrap_or(&[])
    }

    /// Placed tiles the active drag would land on; empty when idle.
    pub fn colliding_tiles(&self) -> &[TileId] {
        self.drag
            .session()
            .map(|s| s.colliding_tiles.as_slice())
            .unwrap_or(&[])
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            transform: self.transform(),
            tiles: self.registry.snapshot(),
            active: self.drag.active_id().cloned(),
            highlighted: self.highlighted_targets().to_vec(),
            colliding: self.colliding_tiles().to_vec(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            config: BoardConfig::default(),
            registry: TileRegistry::default(),
            transform: TransformStore::new(),
            targets: DropTargets::new(),
            strategy: Box::new(PriorityTargetStrategy::new(crate::constants::TRAY_TARGET_ID)),
            drag: DragState::Idle,
        }
    }
}
