//! Unit tests for collision strategies.

use fridgeboard::{CollisionStrategy, PriorityTargetStrategy, Rect, RectIntersection, TargetId};

fn candidates(list: &[(&str, Rect)]) -> Vec<(TargetId, Rect)> {
    list.iter().map(|(id, rect)| (TargetId::from(*id), *rect)).collect()
}

fn ids(hits: &[fridgeboard::Collision]) -> Vec<&str> {
    hits.iter().map(|hit| hit.id.as_str()).collect()
}

#[test]
fn test_priority_target_only_when_both_intersect() {
    let drag = Rect::new(0.0, 0.0, 10.0, 10.0);
    let targets = candidates(&[
        ("canvas", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ("tray", Rect::new(5.0, 5.0, 10.0, 10.0)),
    ]);

    let hits = PriorityTargetStrategy::new("tray").resolve(&drag, &targets);
    assert_eq!(ids(&hits), ["tray"]);
}

#[test]
fn test_no_intersections_returns_empty() {
    let drag = Rect::new(0.0, 0.0, 10.0, 10.0);
    let targets = candidates(&[
        ("tray", Rect::new(20.0, 20.0, 10.0, 10.0)),
        ("canvas", Rect::new(-50.0, -50.0, 10.0, 10.0)),
    ]);

    assert!(PriorityTargetStrategy::new("tray").resolve(&drag, &targets).is_empty());
}

#[test]
fn test_priority_absent_returns_others_in_supplied_order() {
    let drag = Rect::new(0.0, 0.0, 100.0, 100.0);
    let targets = candidates(&[
        ("small", Rect::new(90.0, 90.0, 50.0, 50.0)),
        ("canvas", Rect::new(0.0, 0.0, 500.0, 500.0)),
        ("tray", Rect::new(0.0, 300.0, 50.0, 50.0)),
    ]);

    let hits = PriorityTargetStrategy::new("tray").resolve(&drag, &targets);
    assert_eq!(ids(&hits), ["small", "canvas"]);
    assert_eq!(hits[0].area, 100.0);
    assert_eq!(hits[1].area, 10_000.0);
}

#[test]
fn test_rect_intersection_has_no_priority() {
    let drag = Rect::new(0.0, 0.0, 10.0, 10.0);
    let targets = candidates(&[
        ("canvas", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ("tray", Rect::new(5.0, 5.0, 10.0, 10.0)),
    ]);

    let hits = RectIntersection.resolve(&drag, &targets);
    assert_eq!(ids(&hits), ["canvas", "tray"]);
}

#[test]
fn test_edge_contact_is_not_a_collision() {
    let drag = Rect::new(0.0, 0.0, 10.0, 10.0);
    let targets = candidates(&[("tray", Rect::new(10.0, 0.0, 10.0, 10.0))]);
    assert!(RectIntersection.resolve(&drag, &targets).is_empty());
}
