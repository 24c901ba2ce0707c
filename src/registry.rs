//! Tile registry - the ordered list of words placed on the canvas.
//!
//! New tiles are appended; moved tiles keep their slot, so render order is
//! stable. Only the drag state machine writes here.

use crate::error::{BoardError, BoardResult};
use crate::spatial_index::SpatialIndex;
use crate::types::{Point, Rect, Tile, TileId};
use std::collections::HashMap;
use uuid::Uuid;

pub struct TileRegistry {
    tiles: Vec<Tile>,
    slots: HashMap<TileId, usize>,
    index: SpatialIndex,
    tile_size: (f64, f64),
}

impl TileRegistry {
    pub fn new(tile_size: (f64, f64)) -> Self {
        Self {
            tiles: Vec::new(),
            slots: HashMap::new(),
            index: SpatialIndex::new(),
            tile_size,
        }
    }

    /// Build a registry from existing tiles, keeping their order.
    pub fn from_tiles(tiles: Vec<Tile>, tile_size: (f64, f64)) -> BoardResult<Self> {
        let mut slots = HashMap::with_capacity(tiles.len());
        for (slot, tile) in tiles.iter().enumerate() {
            require_finite(tile)?;
            if slots.insert(tile.id.clone(), slot).is_some() {
                return Err(BoardError::InvalidEvent(format!("duplicate tile id {}", tile.id)));
            }
        }

        let mut index = SpatialIndex::new();
        index.rebuild(tiles.iter().enumerate().map(|(slot, t)| (slot, t.bounds(tile_size))));

        Ok(Self {
            tiles,
            slots,
            index,
            tile_size,
        })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Tile> {
        self.slots.get(id).map(|&slot| &self.tiles[slot])
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tile_size(&self) -> (f64, f64) {
        self.tile_size
    }

    /// `word` itself when free, otherwise `word` with a random suffix.
    pub fn unique_id_for(&self, word: &str) -> TileId {
        if !self.contains(word) {
            return TileId::from(word);
        }
        TileId::new(format!("{word}-{}", Uuid::new_v4().simple()))
    }

    /// Append a new tile at the end of the sequence.
    pub fn append(&mut self, tile: Tile) -> BoardResult<()> {
        if self.contains(tile.id.as_str()) {
            return Err(BoardError::InvalidEvent(format!("duplicate tile id {}", tile.id)));
        }
        require_finite(&tile)?;
        let slot = self.tiles.len();
        self.index.insert(slot, &tile.bounds(self.tile_size));
        self.slots.insert(tile.id.clone(), slot);
        self.tiles.push(tile);
        Ok(())
    }

    /// Move a tile in place, returning its previous position.
    pub fn move_to(&mut self, id: &str, position: Point) -> BoardResult<Point> {
        let slot = *self.slots.get(id).ok_or_else(|| BoardError::unknown_id(id))?;
        if !position.is_finite() {
            return Err(BoardError::Domain(format!("tile {id} moved to non-finite {position:?}")));
        }
        let tile = &mut self.tiles[slot];
        let previous = tile.position;
        tile.position = position;
        self.index.insert(slot, &tile.bounds(self.tile_size));
        Ok(previous)
    }

    /// Ids of tiles overlapping `area` (logical space), in registry order.
    pub fn overlapping(&self, area: &Rect, exclude: Option<&str>) -> Vec<TileId> {
        self.index
            .query_overlapping(area)
            .into_iter()
            .map(|slot| &self.tiles[slot].id)
            .filter(|id| exclude != Some(id.as_str()))
            .cloned()
            .collect()
    }

    /// Owned copy of the tiles for handing to the renderer
    pub fn snapshot(&self) -> Vec<Tile> {
        self.tiles.clone()
    }
}

fn require_finite(tile: &Tile) -> BoardResult<()> {
    if !tile.position.is_finite() {
        return Err(BoardError::Domain(format!(
            "tile {} has non-finite position {:?}",
            tile.id, tile.position
        )));
    }
    Ok(())
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_TILE_SIZE)
    }
}

impl std::fmt::Debug for TileRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileRegistry")
            .field("tiles", &self.tiles)
            .field("tile_size", &self.tile_size)
            .finish()
    }
}
