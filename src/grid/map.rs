//! Board topology
//!
//! `GridTopology` is the read-only seam the pathfinder and session work
//! against. Its default neighbor enumeration is orientation-agnostic: rank
//! the 5x5 coordinate window around a cell by cell-center distance and keep
//! the six nearest. `HexGrid` overrides it with direct axial offsets, which
//! is equivalent on a uniform axial board and faster.

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::types::{ConstructionId, StructureId, TerrainId, Vec2};
use crate::grid::cell::Cell;
use crate::grid::tile::Tile;

/// Half-width of the candidate window used by the ranked-neighbor default
const NEIGHBOR_WINDOW_RADIUS: i32 = 2;

/// Horizontal spacing of axial cell centers (pointy-top layout)
const ROW_OFFSET: f32 = 0.5;
const ROW_HEIGHT: f32 = 0.866_025_4; // sqrt(3) / 2

/// Read-only view of board topology
pub trait GridTopology {
    /// Does a tile exist at this coordinate
    fn contains(&self, cell: &Cell) -> bool;

    /// Tile contents, if the cell exists
    fn tile(&self, cell: &Cell) -> Option<&Tile>;

    /// Geometric center of a cell, used for neighbor ranking
    fn cell_center(&self, cell: &Cell) -> Vec2 {
        Vec2::new(
            cell.q as f32 + cell.r as f32 * ROW_OFFSET,
            cell.r as f32 * ROW_HEIGHT,
        )
    }

    /// The six nearest distinct cells by center distance
    ///
    /// Scans the coordinate window in ascending (r, q) order; ties in
    /// distance keep scan order, so repeated calls produce identical results
    /// regardless of board orientation.
    fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        let center = self.cell_center(cell);
        let mut candidates: Vec<(f32, Cell)> = Vec::with_capacity(24);
        for dr in -NEIGHBOR_WINDOW_RADIUS..=NEIGHBOR_WINDOW_RADIUS {
            for dq in -NEIGHBOR_WINDOW_RADIUS..=NEIGHBOR_WINDOW_RADIUS {
                if dq == 0 && dr == 0 {
                    continue;
                }
                let candidate = Cell::new(cell.q + dq, cell.r + dr);
                let dist = center.distance(&self.cell_center(&candidate));
                candidates.push((dist, candidate));
            }
        }
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(6);
        candidates.into_iter().map(|(_, c)| c).collect()
    }
}

/// Concrete board storage over a single consistent axial orientation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexGrid {
    pub tiles: AHashMap<Cell, Tile>,
    pub width: i32,
    pub height: i32,
}

impl HexGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            tiles: AHashMap::new(),
            width,
            height,
        }
    }

    /// Fill a rectangular board with one terrain
    pub fn filled(width: i32, height: i32, terrain: TerrainId) -> Self {
        let mut grid = Self::new(width, height);
        for q in 0..width {
            for r in 0..height {
                grid.tiles.insert(Cell::new(q, r), Tile::new(terrain));
            }
        }
        grid
    }

    /// Generate a board with terrain drawn from the given ids, seeded
    pub fn generate(width: i32, height: i32, terrain_pool: &[TerrainId], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Self::new(width, height);
        for q in 0..width {
            for r in 0..height {
                let terrain = terrain_pool[rng.gen_range(0..terrain_pool.len())];
                grid.tiles.insert(Cell::new(q, r), Tile::new(terrain));
            }
        }
        grid
    }

    pub fn get_mut(&mut self, cell: &Cell) -> Option<&mut Tile> {
        self.tiles.get_mut(cell)
    }

    pub fn set_terrain(&mut self, cell: Cell, terrain: TerrainId) {
        match self.tiles.get_mut(&cell) {
            Some(tile) => tile.terrain = terrain,
            None => {
                self.tiles.insert(cell, Tile::new(terrain));
            }
        }
    }

    /// Place a construction; a cell holds at most one
    pub fn place_construction(&mut self, cell: Cell, id: ConstructionId) -> bool {
        match self.tiles.get_mut(&cell) {
            Some(tile) => {
                tile.construction = Some(id);
                true
            }
            None => false,
        }
    }

    /// Enroll a cell in a structure's road network, replacing any prior one
    pub fn place_structure(&mut self, cell: Cell, id: StructureId) -> bool {
        match self.tiles.get_mut(&cell) {
            Some(tile) => {
                tile.structure = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn remove_tile(&mut self, cell: &Cell) {
        self.tiles.remove(cell);
    }
}

impl GridTopology for HexGrid {
    fn contains(&self, cell: &Cell) -> bool {
        self.tiles.contains_key(cell)
    }

    fn tile(&self, cell: &Cell) -> Option<&Tile> {
        self.tiles.get(cell)
    }

    /// Direct axial offsets; equivalent to the ranked default on this board
    fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        cell.neighbors().to_vec()
    }
}
