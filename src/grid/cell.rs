//! Hex cell coordinates
//!
//! Axial (q, r) coordinates. Vertical layering is modeled by `LayerMode`,
//! never by a third grid axis: any layer component supplied by callers is
//! normalized to zero at construction.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate (q, r system)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Cell {
    pub q: i32, // Column
    pub r: i32, // Row
}

impl Cell {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct from a raw coordinate triple, discarding the layer axis
    pub fn from_raw(q: i32, r: i32, _layer: i32) -> Self {
        Self { q, r }
    }

    /// Get all 6 adjacent hexes in a fixed, reproducible order
    pub fn neighbors(&self) -> [Cell; 6] {
        [
            Cell::new(self.q + 1, self.r),
            Cell::new(self.q + 1, self.r - 1),
            Cell::new(self.q, self.r - 1),
            Cell::new(self.q - 1, self.r),
            Cell::new(self.q - 1, self.r + 1),
            Cell::new(self.q, self.r + 1),
        ]
    }

    /// Distance in hex steps using the axial coordinate formula
    pub fn distance(&self, other: &Cell) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).abs();
        (dq + dr + ds) / 2
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.distance(other) == 1
    }
}
