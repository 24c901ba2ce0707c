//! Live highlighting while a drag is in flight.

use crate::helpers::{
    drop_nowhere, drop_on, move_to, start_canvas, start_tray, TestBoardBuilder, CANVAS_RECT,
};
use fridgeboard::{DragOutcome, NoOpReason, Point, Rect, RectIntersection, TargetId, TileId};

fn targets(ids: &[&str]) -> Vec<TargetId> {
    ids.iter().map(|id| TargetId::from(*id)).collect()
}

fn tiles(ids: &[&str]) -> Vec<TileId> {
    ids.iter().map(|id| TileId::from(*id)).collect()
}

#[test]
fn test_tray_wins_while_straddling_edge() {
    let mut board = TestBoardBuilder::new().with_layout().build();
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));

    board.handle(move_to("cat", 10.0, 0.0));
    assert_eq!(board.highlighted_targets(), targets(&["tray"]).as_slice());

    // 190..230 overlaps the tray by 10px and the canvas by 30px
    board.handle(move_to("cat", 140.0, 0.0));
    assert_eq!(board.highlighted_targets(), targets(&["tray"]).as_slice());

    board.handle(move_to("cat", 300.0, 0.0));
    assert_eq!(board.highlighted_targets(), targets(&["canvas"]).as_slice());
}

#[test]
fn test_moving_outside_everything_clears_highlight() {
    let mut board = TestBoardBuilder::new().with_layout().build();
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));

    board.handle(move_to("cat", 300.0, 0.0));
    let outcome = board.handle(move_to("cat", -1000.0, -1000.0));

    assert_eq!(
        outcome,
        DragOutcome::Moved {
            id: "cat".into(),
            over: Vec::new(),
            colliding: Vec::new(),
        }
    );
    assert!(board.highlighted_targets().is_empty());
}

#[test]
fn test_tray_word_reports_tiles_it_would_cover() {
    let mut board = TestBoardBuilder::new()
        .with_tile("dog", (150.0, 100.0))
        .with_tile("far", (600.0, 500.0))
        .with_layout()
        .build();
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));

    // Would land at (50 + 300 - 200, 100) = (150, 100), right on "dog"
    let outcome = board.handle(move_to("cat", 300.0, 0.0));

    assert!(matches!(outcome, DragOutcome::Moved { .. }));
    assert_eq!(board.colliding_tiles(), tiles(&["dog"]).as_slice());
    assert_eq!(board.tiles().len(), 2);
}

#[test]
fn test_canvas_tile_ignores_itself_when_checking_overlap() {
    let mut board = TestBoardBuilder::new()
        .with_tile("a", (0.0, 0.0))
        .with_tile("b", (100.0, 0.0))
        .with_tile_size(60.0, 24.0)
        .with_zoom(2.0)
        .with_layout()
        .build();
    board.handle(start_canvas("a", Rect::new(10.0, 210.0, 120.0, 48.0)));

    // 200 viewport px at k = 2 is 100 logical px: "a" would sit on "b"
    board.handle(move_to("a", 200.0, 0.0));
    assert_eq!(board.highlighted_targets(), targets(&["canvas"]).as_slice());
    assert_eq!(board.colliding_tiles(), tiles(&["b"]).as_slice());

    // A small nudge only overlaps its own old footprint
    board.handle(move_to("a", 10.0, 0.0));
    assert!(board.colliding_tiles().is_empty());
}

#[test]
fn test_highlight_never_touches_registry() {
    let mut board = TestBoardBuilder::new().with_tile("a", (0.0, 0.0)).with_layout().build();
    let before = board.tiles().to_vec();

    board.handle(start_canvas("a", Rect::new(10.0, 210.0, 60.0, 24.0)));
    for step in 1..20 {
        board.handle(move_to("a", step as f64 * 15.0, step as f64 * 5.0));
    }
    assert_eq!(board.tiles(), before.as_slice());

    board.handle(drop_on("a", 0.0, 0.0, "canvas", CANVAS_RECT));
    assert!(board.colliding_tiles().is_empty());
    assert!(board.highlighted_targets().is_empty());
}

#[test]
fn test_plain_intersection_strategy_reports_both() {
    let mut board = TestBoardBuilder::new().with_layout().build().with_strategy(RectIntersection);
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));

    board.handle(move_to("cat", 140.0, 0.0));
    assert_eq!(board.highlighted_targets(), targets(&["tray", "canvas"]).as_slice());
}

#[test]
fn test_drop_agrees_with_tray_highlight() {
    let mut board = TestBoardBuilder::new().with_layout().build();
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));

    board.handle(move_to("cat", 140.0, 0.0));
    assert_eq!(board.highlighted_targets(), targets(&["tray"]).as_slice());

    // The host claims the canvas, but the word still touches the tray
    let outcome = board.handle(drop_on("cat", 140.0, 0.0, "canvas", CANVAS_RECT));
    assert_eq!(
        outcome,
        DragOutcome::NoOp {
            id: "cat".into(),
            reason: NoOpReason::NotCanvas { target: "tray".into() },
        }
    );
    assert!(board.tiles().is_empty());
}

#[test]
fn test_registered_targets_decide_drop_without_host_hint() {
    let mut board = TestBoardBuilder::new().with_layout().build();
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));

    let outcome = board.handle(drop_nowhere("cat", 300.0, 0.0));

    // (50 + 300 - 200, 100 - 0)
    assert!(matches!(outcome, DragOutcome::Placed { .. }));
    assert_eq!(board.tiles()[0].position, Point::new(150.0, 100.0));
}
