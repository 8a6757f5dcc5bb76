//! Movement system integration tests
//!
//! Reachability across mixed terrain, domain boundaries, skill-gated cells,
//! and constructions that reopen otherwise hostile ground.

use hexfront::core::types::{ConstructionId, FactionId, SkillId, TerrainId, UnitClass, WeaponCategory};
use hexfront::grid::{Cell, HexGrid, LayerMode, LayerProfile};
use hexfront::movement::reachable_cells;
use hexfront::rules::{FactionPassRules, GameTables, OccupancyIndex};
use hexfront::units::{Unit, UnitRoster};

fn infantry_at(cell: Cell) -> Unit {
    Unit::new(
        FactionId(0),
        UnitClass::Infantry,
        WeaponCategory::SmallArms,
        cell,
    )
}

fn reach(grid: &HexGrid, tables: &GameTables, roster: &UnitRoster, unit: &Unit) -> ahash::AHashMap<Cell, hexfront::movement::Path> {
    let occupancy = OccupancyIndex::build(roster, 1);
    reachable_cells(grid, tables, &occupancy, &FactionPassRules, unit, unit.step_budget())
}

#[test]
fn test_mountain_requires_skill_to_enter() {
    let mut grid = HexGrid::filled(6, 6, TerrainId(0));
    grid.set_terrain(Cell::new(1, 0), TerrainId(2)); // mountain
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();

    let plain = roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(2, 10));
    let unit = roster.get(plain).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    assert!(!reachable.contains_key(&Cell::new(1, 0)));

    let mut roster = UnitRoster::new();
    let climber = roster.spawn(
        infantry_at(Cell::new(0, 0))
            .with_movement(2, 10)
            .with_skills(vec![SkillId(0)]),
    );
    let unit = roster.get(climber).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    assert!(reachable.contains_key(&Cell::new(1, 0)));
}

#[test]
fn test_harbor_reopens_sea_for_land_units() {
    let mut grid = HexGrid::filled(6, 6, TerrainId(0));
    grid.set_terrain(Cell::new(1, 0), TerrainId(1)); // sea
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();
    let id = roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(2, 10));

    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    assert!(!reachable.contains_key(&Cell::new(1, 0)));

    // A harbor on the same cell offers a land mode on top of the sea
    grid.place_construction(Cell::new(1, 0), ConstructionId(1));
    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    assert!(reachable.contains_key(&Cell::new(1, 0)));
}

#[test]
fn test_naval_unit_confined_to_sea() {
    // Left half sea, right half plains
    let mut grid = HexGrid::filled(8, 4, TerrainId(0));
    for q in 0..4 {
        for r in 0..4 {
            grid.set_terrain(Cell::new(q, r), TerrainId(1));
        }
    }
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();
    let id = roster.spawn(
        Unit::new(
            FactionId(0),
            UnitClass::Ship,
            WeaponCategory::Cannon,
            Cell::new(0, 0),
        )
        .with_movement(6, 20),
    );

    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    for cell in reachable.keys() {
        assert!(cell.q < 4, "ship reached land at {:?}", cell);
    }
    assert!(reachable.contains_key(&Cell::new(3, 3)));
}

#[test]
fn test_air_unit_overflies_sea_and_mountains() {
    let mut grid = HexGrid::filled(8, 1, TerrainId(0));
    grid.set_terrain(Cell::new(2, 0), TerrainId(1)); // sea
    grid.set_terrain(Cell::new(4, 0), TerrainId(2)); // mountain, skill-gated
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();
    let id = roster.spawn(
        Unit::new(
            FactionId(0),
            UnitClass::Jet,
            WeaponCategory::Missile,
            Cell::new(0, 0),
        )
        .with_movement(7, 20),
    );

    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    // Mountains gate entry by skill even for air
    assert!(!reachable.contains_key(&Cell::new(4, 0)));
    assert!(reachable.contains_key(&Cell::new(2, 0)));
    assert!(reachable.contains_key(&Cell::new(3, 0)));
}

#[test]
fn test_amphibious_profile_crosses_the_shoreline() {
    let mut grid = HexGrid::filled(6, 1, TerrainId(0));
    grid.set_terrain(Cell::new(2, 0), TerrainId(1));
    grid.set_terrain(Cell::new(3, 0), TerrainId(1));
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();
    let id = roster.spawn(
        infantry_at(Cell::new(0, 0))
            .with_movement(5, 20)
            .with_allowed_layers(
                LayerProfile::new(LayerMode::LAND_SURFACE)
                    .with_additional(vec![LayerMode::NAVAL_SURFACE]),
            ),
    );

    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    // Wades through the channel and back onto land
    assert!(reachable.contains_key(&Cell::new(3, 0)));
    assert!(reachable.contains_key(&Cell::new(5, 0)));
}

#[test]
fn test_fuel_caps_range() {
    let grid = HexGrid::filled(10, 1, TerrainId(0));
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();
    let id = roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(6, 2));

    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    assert!(reachable.contains_key(&Cell::new(2, 0)));
    assert!(!reachable.contains_key(&Cell::new(3, 0)));
}

#[test]
fn test_hostile_blocks_friendly_does_not() {
    let grid = HexGrid::filled(5, 1, TerrainId(0));
    let tables = GameTables::standard();

    let mut roster = UnitRoster::new();
    let mover = roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(4, 10));
    roster.spawn(infantry_at(Cell::new(2, 0))); // friendly

    let unit = roster.get(mover).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    // Pass through the friendly but cannot stop on it at capacity 1
    assert!(!reachable.contains_key(&Cell::new(2, 0)));
    assert!(reachable.contains_key(&Cell::new(4, 0)));

    let mut roster = UnitRoster::new();
    let mover = roster.spawn(infantry_at(Cell::new(0, 0)).with_movement(4, 10));
    roster.spawn(Unit::new(
        FactionId(1),
        UnitClass::Infantry,
        WeaponCategory::SmallArms,
        Cell::new(2, 0),
    ));

    let unit = roster.get(mover).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    // A hostile seals the corridor entirely
    assert!(!reachable.contains_key(&Cell::new(2, 0)));
    assert!(!reachable.contains_key(&Cell::new(3, 0)));
}

#[test]
fn test_paths_are_shortest_and_contiguous() {
    let grid = HexGrid::filled(7, 7, TerrainId(0));
    let tables = GameTables::standard();
    let mut roster = UnitRoster::new();
    let id = roster.spawn(infantry_at(Cell::new(3, 3)).with_movement(3, 10));

    let unit = roster.get(id).unwrap();
    let reachable = reach(&grid, &tables, &roster, unit);
    for (cell, path) in &reachable {
        assert!(path.is_contiguous());
        assert_eq!(path.origin(), Cell::new(3, 3));
        assert_eq!(path.destination(), *cell);
        assert_eq!(path.steps(), Cell::new(3, 3).distance(cell) as u32);
    }
}
