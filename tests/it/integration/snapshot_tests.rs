//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin down what the host receives back from the board:
//! drop outcomes and the per-frame render snapshot.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{drop_on, move_to, start_tray, TestBoardBuilder};
use fridgeboard::{DragOutcome, NoOpReason, Rect};

#[test]
fn snapshot_placed_outcome() {
    let mut board = TestBoardBuilder::new().build();
    board.handle(start_tray("word", Rect::new(0.0, 0.0, 40.0, 20.0)));
    let outcome = board.handle(drop_on("word", 50.0, 50.0, "canvas", Rect::new(0.0, 0.0, 800.0, 600.0)));

    insta::assert_debug_snapshot!(outcome, @r###"
    Placed {
        tile: Tile {
            id: TileId(
                "word",
            ),
            position: Point {
                x: 50.0,
                y: 50.0,
            },
            text: "word",
        },
    }
    "###);
}

#[test]
fn snapshot_board_mid_drag() {
    let mut board = TestBoardBuilder::new()
        .with_tile("dog", (150.0, 100.0))
        .with_layout()
        .build();
    board.handle(start_tray("cat", Rect::new(100.0, 50.0, 40.0, 20.0)));
    board.handle(move_to("cat", 300.0, 0.0));

    insta::assert_debug_snapshot!(board.snapshot(), @r###"
    BoardSnapshot {
        transform: Transform {
            x: 0.0,
            y: 0.0,
            k: 1.0,
        },
        tiles: [
            Tile {
                id: TileId(
                    "dog",
                ),
                position: Point {
                    x: 150.0,
                    y: 100.0,
                },
                text: "dog",
            },
        ],
        active: Some(
            TileId(
                "cat",
            ),
        ),
        highlighted: [
            TargetId(
                "canvas",
            ),
        ],
        colliding: [
            TileId(
                "dog",
            ),
        ],
    }
    "###);
}

#[test]
fn test_outcome_wire_format() {
    let noop = DragOutcome::NoOp {
        id: "cat".into(),
        reason: NoOpReason::NoMovement,
    };
    assert_eq!(
        serde_json::to_string(&noop).unwrap(),
        r#"{"outcome":"no_op","id":"cat","reason":{"reason":"no_movement"}}"#
    );

    let mut board = TestBoardBuilder::new().build();
    let discarded = board.handle(move_to("dog", 1.0, 1.0));
    assert_eq!(
        serde_json::to_string(&discarded).unwrap(),
        r#"{"outcome":"discarded","error":{"kind":"unknown_id","detail":{"id":"dog"}}}"#
    );
}
