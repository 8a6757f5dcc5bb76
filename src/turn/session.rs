//! Turn selection session
//!
//! Owns cursor state, speculative fuel reservation, and path commitment for
//! one player's turn phase. Fuel follows a two-phase protocol: staging a
//! preview debits the unit immediately (so availability reads correctly)
//! but stays reversible until finalize; cancel always restores exactly what
//! was debited. Confirm, finalize, and cancel are idempotent per discrete
//! step: the caller passes its step counter and duplicates within one step
//! are ignored.

use ahash::AHashMap;

use crate::core::config::RuleConfig;
use crate::core::types::{FactionId, Step, UnitId};
use crate::grid::cell::Cell;
use crate::grid::layer::LayerMode;
use crate::grid::map::GridTopology;
use crate::movement::path::Path;
use crate::movement::pathfinding::reachable_cells;
use crate::rules::compat::can_enter;
use crate::rules::occupancy::{OccupancyIndex, PassRules};
use crate::rules::tables::GameTables;
use crate::turn::cursor::CursorState;
use crate::turn::events::{ActionResult, DeclineReason, EngineEvent, EventLog};
use crate::units::UnitRoster;

/// A committed (but not yet finalized) move
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedMove {
    pub origin: Cell,
    pub destination: Cell,
    pub path: Path,
}

/// Selection and movement state for one player's turn phase
///
/// Created empty at the start of the phase, reset on commit, cancel, or
/// turn change. The reachable map is never persisted across turns.
#[derive(Debug, Default)]
pub struct TurnSession {
    pub faction: FactionId,
    pub cursor: Cell,
    pub state: CursorState,
    pub events: EventLog,

    selected: Option<UnitId>,
    reachable: AHashMap<Cell, Path>,
    staged: Option<Path>,
    committed: Option<CommittedMove>,
    /// Fuel already debited from the unit, reversible until finalize
    prepared_cost: Option<u32>,

    last_confirm_step: Option<Step>,
    last_finalize_step: Option<Step>,
    last_cancel_step: Option<Step>,
}

impl TurnSession {
    pub fn new(faction: FactionId, cursor: Cell) -> Self {
        Self {
            faction,
            cursor,
            ..Self::default()
        }
    }

    pub fn selected_unit(&self) -> Option<UnitId> {
        self.selected
    }

    pub fn reachable(&self) -> &AHashMap<Cell, Path> {
        &self.reachable
    }

    pub fn staged_path(&self) -> Option<&Path> {
        self.staged.as_ref()
    }

    pub fn committed_move(&self) -> Option<&CommittedMove> {
        self.committed.as_ref()
    }

    pub fn prepared_cost(&self) -> Option<u32> {
        self.prepared_cost
    }

    /// Move the cursor by a cell delta
    ///
    /// While a unit is selected, landing on (or near) a reachable
    /// destination stages a preview and reserves its fuel cost.
    pub fn move_cursor(
        &mut self,
        delta: (i32, i32),
        grid: &impl GridTopology,
        tables: &GameTables,
        roster: &mut UnitRoster,
    ) -> ActionResult {
        let target = Cell::new(self.cursor.q + delta.0, self.cursor.r + delta.1);
        if !grid.contains(&target) {
            return self.decline(DeclineReason::OutOfBounds);
        }
        self.cursor = target;

        if matches!(
            self.state,
            CursorState::UnitSelected | CursorState::MovingPreview
        ) {
            self.restage(grid, tables, roster);
        }
        ActionResult::Accepted
    }

    /// Context-dependent confirm: select in Neutral, commit in preview
    pub fn confirm(
        &mut self,
        step: Step,
        grid: &impl GridTopology,
        tables: &GameTables,
        config: &RuleConfig,
        roster: &UnitRoster,
        pass: &dyn PassRules,
    ) -> ActionResult {
        if self.last_confirm_step == Some(step) {
            return ActionResult::Ignored;
        }

        match self.state {
            CursorState::Neutral => {
                let Some(unit) = roster.present_at(self.cursor).next() else {
                    return self.decline(DeclineReason::NoUnitSelected);
                };
                if unit.faction != self.faction {
                    return self.decline(DeclineReason::NotFriendly);
                }
                if !unit.is_ready() {
                    return self.decline(DeclineReason::UnitNotReady);
                }

                let occupancy = OccupancyIndex::build(roster, config.cell_capacity);
                self.reachable =
                    reachable_cells(grid, tables, &occupancy, pass, unit, unit.step_budget());
                self.selected = Some(unit.id);
                self.state = CursorState::UnitSelected;
                self.events.push(EngineEvent::SelectionChanged {
                    unit: Some(unit.id),
                });
                tracing::debug!(unit = ?unit.id, destinations = self.reachable.len(), "unit selected");
                self.last_confirm_step = Some(step);
                ActionResult::Accepted
            }
            CursorState::UnitSelected => self.decline(DeclineReason::DestinationUnreachable),
            CursorState::MovingPreview => {
                let Some(path) = self.staged.clone() else {
                    return self.decline(DeclineReason::DestinationUnreachable);
                };
                self.committed = Some(CommittedMove {
                    origin: path.origin(),
                    destination: path.destination(),
                    path: path.clone(),
                });
                self.state = CursorState::Stopped;
                self.events.push(EngineEvent::MoveCommitted { path });
                self.last_confirm_step = Some(step);
                ActionResult::Accepted
            }
            // Commit is complete; only finalize or cancel make progress
            CursorState::Stopped => ActionResult::Ignored,
        }
    }

    /// Distinct final confirmation: the prepared fuel cost becomes
    /// permanent, the unit moves and is marked acted, selection clears
    pub fn finalize(&mut self, step: Step, roster: &mut UnitRoster) -> ActionResult {
        if self.last_finalize_step == Some(step) {
            return ActionResult::Ignored;
        }
        if !matches!(
            self.state,
            CursorState::MovingPreview | CursorState::Stopped
        ) {
            return ActionResult::Ignored;
        }

        let path = match (&self.committed, &self.staged) {
            (Some(committed), _) => committed.path.clone(),
            (None, Some(staged)) => staged.clone(),
            (None, None) => return ActionResult::Ignored,
        };
        let (Some(cost), Some(id)) = (self.prepared_cost, self.selected) else {
            return ActionResult::Ignored;
        };
        let Some(unit) = roster.get_mut(id) else {
            return ActionResult::Ignored;
        };

        unit.cell = path.destination();
        unit.acted = true;
        // The debit was applied at staging; dropping the marker makes it
        // permanent
        self.prepared_cost = None;
        self.events.push(EngineEvent::MoveFinalized {
            unit: id,
            fuel_delta: -(cost as i64),
        });
        tracing::info!(unit = ?id, destination = ?path.destination(), cost, "move finalized");

        self.reset_selection();
        self.last_finalize_step = Some(step);
        ActionResult::Accepted
    }

    /// Roll everything back to Neutral
    ///
    /// Credits back exactly the outstanding debit. Idempotent: cancelling
    /// with nothing outstanding is a no-op, and a finalized cost is never
    /// refunded.
    pub fn cancel(&mut self, step: Step, roster: &mut UnitRoster) -> ActionResult {
        if self.last_cancel_step == Some(step) {
            return ActionResult::Ignored;
        }
        if self.state == CursorState::Neutral && self.prepared_cost.is_none() {
            return ActionResult::Ignored;
        }

        self.refund_prepared(roster);
        self.reset_selection();
        self.events.push(EngineEvent::SelectionChanged { unit: None });
        self.last_cancel_step = Some(step);
        ActionResult::Accepted
    }

    /// Explicit domain transition (takeoff / landing) for the selected unit
    ///
    /// Valid only before a preview is staged; the target mode must belong to
    /// the unit and be enterable on its current cell.
    pub fn transition_layer(
        &mut self,
        target: LayerMode,
        grid: &impl GridTopology,
        tables: &GameTables,
        config: &RuleConfig,
        roster: &mut UnitRoster,
        pass: &dyn PassRules,
    ) -> ActionResult {
        if self.state != CursorState::UnitSelected {
            return self.decline(DeclineReason::NoUnitSelected);
        }
        let Some(id) = self.selected else {
            return self.decline(DeclineReason::NoUnitSelected);
        };
        let Some(unit) = roster.get_mut(id) else {
            return self.decline(DeclineReason::NoUnitSelected);
        };
        if !unit.allowed_layers.supports(&target) {
            return self.decline(DeclineReason::LayerNotAllowed);
        }
        let admissible = grid
            .tile(&unit.cell)
            .and_then(|tile| tables.effective_descriptor(tile))
            .map(|desc| can_enter(target, &unit.allowed_layers, &unit.skills, desc))
            .unwrap_or(false);
        if !admissible {
            return self.decline(DeclineReason::LayerNotAllowed);
        }

        unit.layer = target;
        tracing::debug!(unit = ?id, ?target, "layer transition");
        // A mode change invalidates every previously computed path
        self.refresh_reachable(grid, tables, config, roster, pass);
        ActionResult::Accepted
    }

    /// Recompute the reachable map for the selected unit
    ///
    /// Must be called whenever the unit's position, fuel, or the occupied
    /// cell set changes outside this session's own operations.
    pub fn refresh_reachable(
        &mut self,
        grid: &impl GridTopology,
        tables: &GameTables,
        config: &RuleConfig,
        roster: &UnitRoster,
        pass: &dyn PassRules,
    ) {
        let Some(unit) = self.selected.and_then(|id| roster.get(id)) else {
            self.reachable.clear();
            return;
        };
        let occupancy = OccupancyIndex::build(roster, config.cell_capacity);
        self.reachable =
            reachable_cells(grid, tables, &occupancy, pass, unit, unit.step_budget());
    }

    /// Stage (or clear) the preview for the current cursor position
    ///
    /// Any prior reservation is fully restored before a new one is taken,
    /// so at most one prepared cost is ever outstanding.
    fn restage(
        &mut self,
        grid: &impl GridTopology,
        tables: &GameTables,
        roster: &mut UnitRoster,
    ) {
        self.refund_prepared(roster);
        self.staged = None;

        let candidate = self.candidate_path();
        match candidate {
            Some(path) => {
                let Some(unit) = self.selected.and_then(|id| roster.get_mut(id)) else {
                    return;
                };
                let cost = path.fuel_cost(grid, tables, unit).min(unit.fuel);
                unit.fuel -= cost;
                self.prepared_cost = Some(cost);
                let destination = path.destination();
                self.staged = Some(path);
                self.state = CursorState::MovingPreview;
                self.events.push(EngineEvent::PathPreviewChanged {
                    destination: Some(destination),
                });
            }
            None => {
                self.state = CursorState::UnitSelected;
                self.events
                    .push(EngineEvent::PathPreviewChanged { destination: None });
            }
        }
    }

    /// Path for the cursor cell, or the closest-approach fallback: the best
    /// reachable neighbor of the cursor when the exact cell is unreachable
    fn candidate_path(&self) -> Option<Path> {
        let origin = self
            .staged
            .as_ref()
            .map(Path::origin)
            .or_else(|| self.reachable.values().next().map(Path::origin));

        if let Some(path) = self.reachable.get(&self.cursor) {
            if Some(path.origin()) == origin && path.steps() == 0 {
                // Cursor back on the unit itself: nothing to preview
                return None;
            }
            return Some(path.clone());
        }

        // Deterministic fallback: fewest steps, then cell order
        self.cursor
            .neighbors()
            .iter()
            .filter_map(|n| self.reachable.get(n))
            .filter(|path| path.steps() > 0)
            .min_by_key(|path| (path.steps(), path.destination()))
            .cloned()
    }

    fn refund_prepared(&mut self, roster: &mut UnitRoster) {
        if let (Some(cost), Some(id)) = (self.prepared_cost.take(), self.selected) {
            if let Some(unit) = roster.get_mut(id) {
                unit.fuel += cost;
            }
        }
    }

    fn reset_selection(&mut self) {
        self.selected = None;
        self.reachable.clear();
        self.staged = None;
        self.committed = None;
        self.state = CursorState::Neutral;
    }

    fn decline(&mut self, reason: DeclineReason) -> ActionResult {
        self.events.push(EngineEvent::ActionDeclined { reason });
        ActionResult::Declined(reason)
    }
}
