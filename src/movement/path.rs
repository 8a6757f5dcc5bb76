//! Movement paths
//!
//! A path runs from origin to destination, both inclusive. Step count is
//! `len - 1`; fuel cost equals step count under base costs and diverges only
//! where skill cost overrides or heavier terrain apply.

use serde::{Deserialize, Serialize};

use crate::grid::cell::Cell;
use crate::grid::map::GridTopology;
use crate::rules::tables::GameTables;
use crate::units::Unit;

/// Ordered cell sequence from origin to destination, inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub cells: Vec<Cell>,
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    pub fn single(origin: Cell) -> Self {
        Self { cells: vec![origin] }
    }

    pub fn origin(&self) -> Cell {
        self.cells[0]
    }

    pub fn destination(&self) -> Cell {
        *self.cells.last().expect("paths are never empty")
    }

    /// Number of steps taken, which is also the base fuel cost
    pub fn steps(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    /// Fuel cost with per-cell entry costs and skill overrides applied
    ///
    /// The origin cell costs nothing. Cells whose table entries are missing
    /// fall back to cost 1 rather than failing.
    pub fn fuel_cost(&self, grid: &impl GridTopology, tables: &GameTables, unit: &Unit) -> u32 {
        self.cells[1..]
            .iter()
            .map(|cell| {
                grid.tile(cell)
                    .and_then(|tile| tables.movement_descriptor(tile))
                    .map(|desc| desc.entry_cost_for(&unit.skills))
                    .unwrap_or(1)
            })
            .sum()
    }

    /// Are all consecutive cells hex-adjacent
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}
