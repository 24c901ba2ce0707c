//! Spatial Index Module
//!
//! R-tree over placed tiles' logical bounds. Used while dragging to find
//! the tiles the dragged word would land on top of.

use crate::types::Rect;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounds of one registry slot, in canvas logical space.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub slot: usize,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(slot: usize, bounds: &Rect) -> Self {
        Self {
            slot,
            min_x: bounds.left,
            min_y: bounds.top,
            max_x: bounds.right(),
            max_y: bounds.bottom(),
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.min_y, self.min_x, self.max_x - self.min_x, self.max_y - self.min_y)
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

/// Spatial index keyed by registry slot.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<usize, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert a slot, replacing its previous bounds if present.
    pub fn insert(&mut self, slot: usize, bounds: &Rect) {
        if let Some(old_entry) = self.entries.remove(&slot) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(slot, bounds);
        self.tree.insert(entry);
        self.entries.insert(slot, entry);
    }

    /// Slots whose bounds overlap `area` by a positive amount on both axes,
    /// sorted ascending (registry order).
    pub fn query_overlapping(&self, area: &Rect) -> Vec<usize> {
        let envelope = AABB::from_corners([area.left, area.top], [area.right(), area.bottom()]);

        // The envelope query is inclusive of touching edges; filter those out.
        let mut slots: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds().intersects(area))
            .map(|entry| entry.slot)
            .collect();
        slots.sort_unstable();
        slots
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, bounds: I)
    where
        I: Iterator<Item = (usize, Rect)>,
    {
        let entries: Vec<SpatialEntry> = bounds
            .map(|(slot, rect)| SpatialEntry::new(slot, &rect))
            .collect();

        self.entries = entries.iter().map(|e| (e.slot, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
