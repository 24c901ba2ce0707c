//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating test boards with tiles and targets
//! - Event shorthands like `start_tray()`, `move_to()`, `drop_on()`
//! - Assertion helpers for the registry

#![allow(dead_code)]

use fridgeboard::{
    Board, BoardConfig, BoardEvent, DragCancel, DragEnd, DragMove, DragSource, DragStart, Over,
    Point, Rect, Tile, Transform,
};

/// Tray sits along the left edge of the viewport.
pub const TRAY_RECT: Rect = Rect::new(0.0, 0.0, 200.0, 600.0);

/// Canvas fills the rest of the viewport.
pub const CANVAS_RECT: Rect = Rect::new(0.0, 200.0, 800.0, 600.0);

// ============================================================================
// TestBoardBuilder - Builder pattern for creating test boards
// ============================================================================

/// Builder for creating test boards.
///
/// # Example
/// ```ignore
/// let board = TestBoardBuilder::new()
///     .with_tile("cat", (10.0, 10.0))
///     .with_zoom(2.0)
///     .with_layout()
///     .build();
/// ```
pub struct TestBoardBuilder {
    config: BoardConfig,
    tiles: Vec<Tile>,
    transform: Transform,
    targets: Vec<(&'static str, Rect)>,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    pub fn new() -> Self {
        Self {
            config: BoardConfig::default(),
            tiles: Vec::new(),
            transform: Transform::IDENTITY,
            targets: Vec::new(),
        }
    }

    pub fn with_zoom(mut self, k: f64) -> Self {
        self.transform.k = k;
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.transform.x = x;
        self.transform.y = y;
        self
    }

    pub fn with_snapping(mut self, grid_size: f64) -> Self {
        self.config.snap_to_grid = true;
        self.config.grid_size = grid_size;
        self
    }

    pub fn with_tile_size(mut self, width: f64, height: f64) -> Self {
        self.config.tile_size = (width, height);
        self
    }

    /// Place a tile whose text equals its id.
    pub fn with_tile(mut self, word: &str, pos: (f64, f64)) -> Self {
        self.tiles.push(Tile::new(word, Point::new(pos.0, pos.1), word));
        self
    }

    pub fn with_target(mut self, id: &'static str, rect: Rect) -> Self {
        self.targets.push((id, rect));
        self
    }

    /// Register the standard tray and canvas rectangles.
    pub fn with_layout(self) -> Self {
        self.with_target("tray", TRAY_RECT).with_target("canvas", CANVAS_RECT)
    }

    pub fn build(self) -> Board {
        let mut board = Board::with_tiles(self.config, self.tiles).expect("valid test board");
        for (id, rect) in self.targets {
            board.register_target(id, rect).expect("valid test target");
        }
        board.on_transform_change(self.transform);
        board
    }
}

// ============================================================================
// Event shorthands
// ============================================================================

pub fn start_tray(id: &str, initial_rect: Rect) -> BoardEvent {
    BoardEvent::DragStart(DragStart {
        id: id.into(),
        initial_rect,
        source: DragSource::Tray,
    })
}

pub fn start_canvas(id: &str, initial_rect: Rect) -> BoardEvent {
    BoardEvent::DragStart(DragStart {
        id: id.into(),
        initial_rect,
        source: DragSource::Canvas,
    })
}

pub fn move_to(id: &str, dx: f64, dy: f64) -> BoardEvent {
    BoardEvent::DragMove(DragMove {
        id: id.into(),
        delta: Point::new(dx, dy),
    })
}

pub fn drop_on(id: &str, dx: f64, dy: f64, target: &str, rect: Rect) -> BoardEvent {
    BoardEvent::DragEnd(DragEnd {
        id: id.into(),
        delta: Point::new(dx, dy),
        over: Some(Over {
            id: target.into(),
            rect,
        }),
    })
}

pub fn drop_nowhere(id: &str, dx: f64, dy: f64) -> BoardEvent {
    BoardEvent::DragEnd(DragEnd {
        id: id.into(),
        delta: Point::new(dx, dy),
        over: None,
    })
}

pub fn cancel(id: &str) -> BoardEvent {
    BoardEvent::DragCancel(DragCancel { id: id.into() })
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_tile_count(board: &Board, expected: usize) {
    assert_eq!(
        board.tiles().len(),
        expected,
        "Expected {} tiles, found {}",
        expected,
        board.tiles().len()
    );
}

pub fn tile_ids(board: &Board) -> Vec<String> {
    board.tiles().iter().map(|t| t.id.to_string()).collect()
}

pub fn position_of(board: &Board, id: &str) -> Point {
    board
        .registry()
        .get(id)
        .unwrap_or_else(|| panic!("tile {id} not on board"))
        .position
}
