//! Unit occupancy
//!
//! A read-only snapshot over the roster, rebuilt on demand; it is never
//! cached across moves. Embarked units have no cell presence. Whether a
//! mover may slip past an occupant is delegated to `PassRules` since
//! alliance rules vary by scenario.

use ahash::AHashMap;

use crate::core::types::UnitId;
use crate::grid::cell::Cell;
use crate::units::{Unit, UnitRoster};

/// May `mover` traverse a cell occupied by `occupant`
pub trait PassRules {
    fn can_pass(&self, mover: &Unit, occupant: &Unit) -> bool;
}

/// Default rule set: friendly units are permeable, hostile ones block
#[derive(Debug, Clone, Copy, Default)]
pub struct FactionPassRules;

impl PassRules for FactionPassRules {
    fn can_pass(&self, mover: &Unit, occupant: &Unit) -> bool {
        mover.faction == occupant.faction
    }
}

/// Snapshot of which units stand where
pub struct OccupancyIndex<'a> {
    by_cell: AHashMap<Cell, Vec<&'a Unit>>,
    capacity: usize,
}

impl<'a> OccupancyIndex<'a> {
    /// Build from the roster; embarked units are excluded entirely
    pub fn build(roster: &'a UnitRoster, capacity: usize) -> Self {
        let mut by_cell: AHashMap<Cell, Vec<&'a Unit>> = AHashMap::new();
        for unit in roster.units.iter().filter(|u| !u.embarked) {
            by_cell.entry(unit.cell).or_default().push(unit);
        }
        Self { by_cell, capacity }
    }

    /// First occupant of a cell, if any
    pub fn occupant_at(&self, cell: Cell) -> Option<&Unit> {
        self.by_cell.get(&cell).and_then(|units| units.first().copied())
    }

    pub fn occupants_at(&self, cell: Cell) -> &[&'a Unit] {
        self.by_cell.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    fn occupants_excluding(&self, cell: Cell, mover: UnitId) -> impl Iterator<Item = &&'a Unit> {
        self.occupants_at(cell).iter().filter(move |u| u.id != mover)
    }

    /// Does anything on this cell forbid the mover from crossing it
    pub fn blocks_traversal(&self, cell: Cell, mover: &Unit, pass: &dyn PassRules) -> bool {
        self.occupants_excluding(cell, mover.id)
            .any(|occupant| !pass.can_pass(mover, occupant))
    }

    /// May the mover end its path on this cell (capacity check only;
    /// hostile occupants are already handled by traversal blocking)
    pub fn can_terminate(&self, cell: Cell, mover: &Unit) -> bool {
        self.occupants_excluding(cell, mover.id).count() < self.capacity
    }

    /// Convenience: blocked for entry either way
    pub fn is_blocked(&self, cell: Cell, mover: &Unit, pass: &dyn PassRules) -> bool {
        self.blocks_traversal(cell, mover, pass) || !self.can_terminate(cell, mover)
    }
}
