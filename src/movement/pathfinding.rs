//! Budgeted reachability search
//!
//! Breadth-first over the hex graph: every traversable edge costs one step,
//! terrain cost acts as an admit/deny gate only. First-settled distance is
//! final, so each visited cell gets exactly one shortest path. The search is
//! deterministic for identical state because neighbor order is stable.

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::grid::cell::Cell;
use crate::grid::map::GridTopology;
use crate::movement::path::Path;
use crate::rules::compat::can_enter;
use crate::rules::occupancy::{OccupancyIndex, PassRules};
use crate::rules::tables::GameTables;
use crate::units::Unit;

/// Every cell the unit can reach within `budget` steps, with its shortest
/// recorded path from the unit's current cell
///
/// Hostile-occupied cells are never entered. Friendly-occupied cells are
/// legal waypoints but appear as destinations only if they still have
/// capacity for the mover. A unit standing on a cell with no tile is in an
/// invalid position and reaches nothing.
pub fn reachable_cells(
    grid: &impl GridTopology,
    tables: &GameTables,
    occupancy: &OccupancyIndex<'_>,
    pass: &dyn PassRules,
    unit: &Unit,
    budget: u32,
) -> AHashMap<Cell, Path> {
    let origin = unit.cell;
    if grid.tile(&origin).is_none() {
        tracing::warn!(?origin, "reachability from a cell with no tile");
        return AHashMap::new();
    }

    let mut distance: AHashMap<Cell, u32> = AHashMap::new();
    let mut parent: AHashMap<Cell, Cell> = AHashMap::new();
    let mut frontier: VecDeque<Cell> = VecDeque::new();

    distance.insert(origin, 0);
    frontier.push_back(origin);

    while let Some(cell) = frontier.pop_front() {
        let dist = distance[&cell];
        if dist == budget {
            continue;
        }

        for neighbor in grid.neighbors(&cell) {
            if distance.contains_key(&neighbor) {
                continue;
            }
            let Some(tile) = grid.tile(&neighbor) else {
                continue;
            };
            // Admission consults the occupying construction, else terrain
            let Some(descriptor) = tables.movement_descriptor(tile) else {
                tracing::warn!(?neighbor, "tile references a missing terrain entry");
                continue;
            };
            if !can_enter(unit.layer, &unit.allowed_layers, &unit.skills, descriptor) {
                continue;
            }
            if occupancy.blocks_traversal(neighbor, unit, pass) {
                continue;
            }

            distance.insert(neighbor, dist + 1);
            parent.insert(neighbor, cell);
            frontier.push_back(neighbor);
        }
    }

    let mut reachable = AHashMap::with_capacity(distance.len());
    for (&cell, _) in &distance {
        // Friendly waypoints at capacity are not valid destinations
        if cell != origin && !occupancy.can_terminate(cell, unit) {
            continue;
        }
        reachable.insert(cell, reconstruct(&parent, origin, cell));
    }

    tracing::debug!(
        unit = ?unit.id,
        budget,
        visited = distance.len(),
        destinations = reachable.len(),
        "reachability computed"
    );
    reachable
}

fn reconstruct(parent: &AHashMap<Cell, Cell>, origin: Cell, destination: Cell) -> Path {
    let mut cells = vec![destination];
    let mut current = destination;
    while current != origin {
        let prev = parent[&current];
        cells.push(prev);
        current = prev;
    }
    cells.reverse();
    Path::new(cells)
}
