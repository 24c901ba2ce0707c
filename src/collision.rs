//! Collision resolution between an in-flight drag and the droppable regions.
//!
//! A [`CollisionStrategy`] turns the dragged item's viewport rectangle and the
//! registered [`DropTargets`] into the ordered list of targets it currently
//! intersects. The board's default is [`PriorityTargetStrategy`]: anything
//! touching the tray counts as "back to the tray", even when it also overlaps
//! the canvas edge by more.

use crate::error::{BoardError, BoardResult};
use crate::profile_scope;
use crate::types::{Rect, TargetId};
use serde::Serialize;

/// A drop target hit by the drag rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Collision {
    pub id: TargetId,
    /// Overlap area in viewport pixels, always positive
    pub area: f64,
}

/// Selected once when the board is configured.
pub trait CollisionStrategy {
    /// Targets intersecting `drag_rect`, in the order they should be
    /// considered. Empty when nothing intersects.
    fn resolve(&self, drag_rect: &Rect, candidates: &[(TargetId, Rect)]) -> Vec<Collision>;
}

/// Plain axis-aligned overlap test. Returns every intersecting target in the
/// order the candidates were supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct RectIntersection;

impl RectIntersection {
    pub fn intersecting<'a, I>(drag_rect: &Rect, candidates: I) -> Vec<Collision>
    where
        I: IntoIterator<Item = &'a (TargetId, Rect)>,
    {
        candidates
            .into_iter()
            .filter_map(|(id, rect)| {
                let area = drag_rect.intersection_area(rect);
                (area > 0.0).then(|| Collision {
                    id: id.clone(),
                    area,
                })
            })
            .collect()
    }
}

impl CollisionStrategy for RectIntersection {
    fn resolve(&self, drag_rect: &Rect, candidates: &[(TargetId, Rect)]) -> Vec<Collision> {
        Self::intersecting(drag_rect, candidates)
    }
}

/// Gives one named target precedence over all others.
///
/// If the drag intersects the priority target, only that hit is returned;
/// the remaining candidates are not consulted.
#[derive(Clone, Debug)]
pub struct PriorityTargetStrategy {
    priority: TargetId,
}

impl PriorityTargetStrategy {
    pub fn new(priority: impl Into<TargetId>) -> Self {
        Self {
            priority: priority.into(),
        }
    }

    pub fn priority(&self) -> &TargetId {
        &self.priority
    }
}

impl CollisionStrategy for PriorityTargetStrategy {
    fn resolve(&self, drag_rect: &Rect, candidates: &[(TargetId, Rect)]) -> Vec<Collision> {
        profile_scope!("collision_resolve");

        let (priority, others): (Vec<_>, Vec<_>) =
            candidates.iter().partition(|(id, _)| *id == self.priority);

        let hits = RectIntersection::intersecting(drag_rect, priority);
        if !hits.is_empty() {
            return hits;
        }
        RectIntersection::intersecting(drag_rect, others)
    }
}

/// Ordered set of droppable regions, in viewport pixel space.
///
/// Registration order is the order candidates are handed to the strategy.
#[derive(Clone, Debug, Default)]
pub struct DropTargets {
    targets: Vec<(TargetId, Rect)>,
}

impl DropTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target, or update its rectangle in place if already registered.
    ///
    /// Empty ids and non-finite or negative-sized rectangles are rejected.
    pub fn register(&mut self, id: impl Into<TargetId>, rect: Rect) -> BoardResult<()> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(BoardError::InvalidEvent("empty drop target id".to_string()));
        }
        if !rect.is_well_formed() {
            return Err(BoardError::InvalidEvent(format!(
                "malformed rect for drop target {id}: {rect:?}"
            )));
        }
        match self.targets.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = rect,
            None => self.targets.push((id, rect)),
        }
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.targets.len();
        self.targets.retain(|(existing, _)| existing.as_str() != id);
        self.targets.len() != before
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, rect)| *rect)
    }

    pub fn as_slice(&self) -> &[(TargetId, Rect)] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
