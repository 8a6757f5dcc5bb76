//! Turn protocol integration tests
//!
//! The full select / preview / commit / finalize / cancel protocol driven
//! against a real board and roster, including the fuel reservation ledger
//! and idempotent inputs.

use hexfront::core::config::RuleConfig;
use hexfront::core::types::{FactionId, SkillId, TerrainId, UnitClass, WeaponCategory};
use hexfront::grid::{Cell, HexGrid};
use hexfront::rules::{FactionPassRules, GameTables};
use hexfront::turn::{ActionResult, CursorState, DeclineReason, EngineEvent, TurnSession};
use hexfront::units::{Unit, UnitRoster};

struct World {
    grid: HexGrid,
    tables: GameTables,
    config: RuleConfig,
    roster: UnitRoster,
    session: TurnSession,
}

impl World {
    fn new(grid: HexGrid) -> Self {
        Self {
            grid,
            tables: GameTables::standard(),
            config: RuleConfig::default(),
            roster: UnitRoster::new(),
            session: TurnSession::new(FactionId(0), Cell::new(0, 0)),
        }
    }

    fn confirm(&mut self, step: u64) -> ActionResult {
        self.session.confirm(
            step,
            &self.grid,
            &self.tables,
            &self.config,
            &self.roster,
            &FactionPassRules,
        )
    }

    fn cursor(&mut self, dq: i32, dr: i32) -> ActionResult {
        self.session
            .move_cursor((dq, dr), &self.grid, &self.tables, &mut self.roster)
    }
}

fn infantry_at(cell: Cell) -> Unit {
    Unit::new(
        FactionId(0),
        UnitClass::Infantry,
        WeaponCategory::SmallArms,
        cell,
    )
}

#[test]
fn test_full_move_protocol() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    let id = w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(3, 10));

    assert!(w.confirm(1).is_accepted());
    assert_eq!(w.session.state, CursorState::UnitSelected);
    assert_eq!(w.session.selected_unit(), Some(id));

    w.cursor(1, 0);
    w.cursor(0, 1);
    assert_eq!(w.session.state, CursorState::MovingPreview);
    assert_eq!(w.session.staged_path().unwrap().destination(), Cell::new(1, 1));

    assert!(w.confirm(2).is_accepted());
    assert_eq!(w.session.state, CursorState::Stopped);

    assert!(w.session.finalize(3, &mut w.roster).is_accepted());
    let unit = w.roster.get(id).unwrap();
    assert_eq!(unit.cell, Cell::new(1, 1));
    assert!(unit.acted);
    assert_eq!(unit.fuel, 8);
    assert_eq!(w.session.state, CursorState::Neutral);
}

#[test]
fn test_acted_unit_cannot_be_reselected() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(3, 10));

    w.confirm(1);
    w.cursor(1, 0);
    w.session.finalize(2, &mut w.roster);

    // Cursor is on the unit's new cell
    assert_eq!(
        w.confirm(3),
        ActionResult::Declined(DeclineReason::UnitNotReady)
    );
}

#[test]
fn test_cancel_mid_preview_restores_everything() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    let id = w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(3, 10));

    w.confirm(1);
    w.cursor(1, 0);
    w.cursor(1, 0);
    assert!(w.roster.get(id).unwrap().fuel < 10);

    assert!(w.session.cancel(2, &mut w.roster).is_accepted());
    let unit = w.roster.get(id).unwrap();
    assert_eq!(unit.fuel, 10);
    assert_eq!(unit.cell, Cell::new(0, 0));
    assert!(!unit.acted);

    // The unit can immediately go again
    w.session.cursor = Cell::new(0, 0);
    assert!(w.confirm(3).is_accepted());
}

#[test]
fn test_mountain_preview_reserves_entry_cost_not_steps() {
    let mut grid = HexGrid::filled(8, 1, TerrainId(0));
    grid.set_terrain(Cell::new(1, 0), TerrainId(2)); // mountain, base cost 2
    let mut w = World::new(grid);
    let id = w.roster.spawn(
        infantry_at(Cell::new(0, 0))
            .with_movement(3, 10)
            .with_skills(vec![SkillId(0)]),
    );

    w.confirm(1);
    w.cursor(1, 0);
    // Mountaineer override brings the entry cost back to 1
    assert_eq!(w.session.prepared_cost(), Some(1));
    assert_eq!(w.roster.get(id).unwrap().fuel, 9);
}

#[test]
fn test_preview_onto_unreachable_cell_clears_staging() {
    let mut w = World::new(HexGrid::filled(10, 1, TerrainId(0)));
    let id = w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(2, 10));

    w.confirm(1);
    w.cursor(1, 0);
    w.cursor(1, 0);
    assert_eq!(w.session.state, CursorState::MovingPreview);

    // Two more steps put the cursor well past the budget; the adjacent
    // reachable cell two back is not a neighbor of the cursor either
    w.cursor(1, 0);
    w.cursor(1, 0);
    assert_eq!(w.session.state, CursorState::UnitSelected);
    assert_eq!(w.session.prepared_cost(), None);
    assert_eq!(w.roster.get(id).unwrap().fuel, 10);
}

#[test]
fn test_closest_approach_fallback() {
    let mut w = World::new(HexGrid::filled(10, 1, TerrainId(0)));
    w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(2, 10));

    w.confirm(1);
    // Cursor one past the budget edge: (3, 0) is unreachable, its neighbor
    // (2, 0) is the closest approach
    w.cursor(1, 0);
    w.cursor(1, 0);
    w.cursor(1, 0);
    assert_eq!(w.session.state, CursorState::MovingPreview);
    assert_eq!(w.session.staged_path().unwrap().destination(), Cell::new(2, 0));
}

#[test]
fn test_enemy_unit_not_selectable() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    w.roster.spawn(Unit::new(
        FactionId(1),
        UnitClass::Armor,
        WeaponCategory::Cannon,
        Cell::new(0, 0),
    ));

    assert_eq!(
        w.confirm(1),
        ActionResult::Declined(DeclineReason::NotFriendly)
    );
    assert_eq!(w.session.state, CursorState::Neutral);
}

#[test]
fn test_duplicate_inputs_within_one_step() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    let id = w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(3, 10));

    assert!(w.confirm(5).is_accepted());
    assert_eq!(w.confirm(5), ActionResult::Ignored);

    w.cursor(1, 0);
    w.session.finalize(6, &mut w.roster);
    assert_eq!(w.session.finalize(6, &mut w.roster), ActionResult::Ignored);
    // A later duplicate finalize with nothing pending is also inert
    assert_eq!(w.session.finalize(7, &mut w.roster), ActionResult::Ignored);
    assert_eq!(w.roster.get(id).unwrap().fuel, 9);
}

#[test]
fn test_event_log_records_protocol_order() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    let id = w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(3, 10));

    w.confirm(1);
    w.cursor(1, 0);
    w.confirm(2);
    w.session.finalize(3, &mut w.roster);

    let events = w.session.events.drain();
    assert!(matches!(
        events[0],
        EngineEvent::SelectionChanged { unit: Some(u) } if u == id
    ));
    assert!(matches!(
        events[1],
        EngineEvent::PathPreviewChanged {
            destination: Some(d)
        } if d == Cell::new(1, 0)
    ));
    assert!(matches!(events[2], EngineEvent::MoveCommitted { .. }));
    assert!(matches!(
        events[3],
        EngineEvent::MoveFinalized { unit: u, fuel_delta: -1 } if u == id
    ));
}

#[test]
fn test_select_ignores_embarked_units() {
    let mut w = World::new(HexGrid::filled(8, 8, TerrainId(0)));
    let id = w.roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(3, 10));
    w.roster.get_mut(id).unwrap().embarked = true;

    assert_eq!(
        w.confirm(1),
        ActionResult::Declined(DeclineReason::NoUnitSelected)
    );
}
