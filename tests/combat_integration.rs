//! Combat resolution integration tests
//!
//! Exchanges resolved over real boards: fortified defenders, air height
//! overrides, naval matchups, veteran skills conditioned on elite level
//! gaps, and the movement-then-combat sequence the turn protocol produces.

use hexfront::combat::{resolve, CombatOutcome, EliteComparison, SkillModifier};
use hexfront::core::config::RuleConfig;
use hexfront::core::types::{
    ConstructionId, FactionId, SkillId, TerrainId, UnitClass, WeaponCategory,
};
use hexfront::grid::{Cell, HexGrid};
use hexfront::rules::{FactionPassRules, GameTables, SkillSpec};
use hexfront::turn::TurnSession;
use hexfront::units::{Unit, UnitRoster};

fn setup() -> (HexGrid, GameTables, RuleConfig) {
    (
        HexGrid::filled(10, 10, TerrainId(0)),
        GameTables::standard(),
        RuleConfig::default(),
    )
}

fn unit(faction: u32, class: UnitClass, weapon: WeaponCategory, cell: Cell) -> Unit {
    Unit::new(FactionId(faction), class, weapon, cell)
}

#[test]
fn test_fortified_defender_turns_the_tables() {
    let (mut grid, tables, config) = setup();
    grid.place_construction(Cell::new(5, 5), ConstructionId(0)); // fort, tier 3

    let attacker = unit(0, UnitClass::Armor, WeaponCategory::Cannon, Cell::new(4, 5));
    let defender = unit(1, UnitClass::Infantry, WeaponCategory::SmallArms, Cell::new(5, 5));

    let open = resolve(&grid, &tables, &config, &attacker, &defender);
    // Same pairing without the fort
    let mut flat = HexGrid::filled(10, 10, TerrainId(0));
    flat.set_terrain(Cell::new(5, 5), TerrainId(0));
    let exposed = resolve(&flat, &tables, &config, &attacker, &defender);

    assert_eq!(exposed.attacker.outcome, CombatOutcome::Advantage);
    assert_eq!(open.attacker.outcome, CombatOutcome::Disadvantage);
    assert_eq!(open.defender.outcome, CombatOutcome::Advantage);
    // The fort's defense bonus also reaches the defender's value
    assert!(open.defender.value > exposed.defender.value);
}

#[test]
fn test_air_height_override_ignores_ground_quality() {
    let (mut grid, tables, config) = setup();
    // Jet parked over a forest; ground tier must not apply to it
    grid.set_terrain(Cell::new(0, 0), TerrainId(3));

    let jet = unit(0, UnitClass::Jet, WeaponCategory::Bomb, Cell::new(0, 0));
    let defender = unit(1, UnitClass::Infantry, WeaponCategory::SmallArms, Cell::new(1, 0));

    let res = resolve(&grid, &tables, &config, &jet, &defender);
    // AirHigh override is tier 0: diff 0, small-edge attacker advantage
    assert_eq!(res.attacker.outcome, CombatOutcome::Advantage);
}

#[test]
fn test_helicopter_low_band_gets_its_own_tier() {
    let (mut grid, tables, config) = setup();
    grid.set_terrain(Cell::new(1, 0), TerrainId(3)); // forest, tier 1

    let helicopter = unit(0, UnitClass::Helicopter, WeaponCategory::Missile, Cell::new(0, 0));
    let jet = unit(0, UnitClass::Jet, WeaponCategory::Missile, Cell::new(0, 0));
    let defender = unit(1, UnitClass::Infantry, WeaponCategory::SmallArms, Cell::new(1, 0));

    // Against a forest defender, AirLow's tier 1 keeps the helicopter even
    // while AirHigh's tier 0 leaves the jet a point behind
    let low = resolve(&grid, &tables, &config, &helicopter, &defender);
    let high = resolve(&grid, &tables, &config, &jet, &defender);
    assert_eq!(low.attacker.outcome, CombatOutcome::Advantage);
    assert_eq!(high.attacker.outcome, CombatOutcome::Neutral);
}

#[test]
fn test_submarine_torpedo_matchup_at_sea() {
    let (_, tables, config) = setup();
    let sea = HexGrid::filled(10, 10, TerrainId(1));

    let sub = unit(0, UnitClass::Submarine, WeaponCategory::Torpedo, Cell::new(0, 0));
    let ship = unit(1, UnitClass::Ship, WeaponCategory::Cannon, Cell::new(1, 0));

    let res = resolve(&sea, &tables, &config, &sub, &ship);
    // Matchup bonus 2.0 lands exactly on an integer; Advantage bumps it
    assert_eq!(res.attacker.outcome, CombatOutcome::Advantage);
    assert_eq!(res.numeric_result(), 3);
}

#[test]
fn test_veteran_skill_fires_only_across_an_elite_gap() {
    let (grid, mut tables, config) = setup();
    tables.skills.push(SkillSpec {
        id: SkillId(10),
        name: "Veteran Instincts".into(),
        modifier: Some(SkillModifier {
            elite_comparison: EliteComparison::OwnerGreater,
            elite_min_diff: 2,
            owner_attack: 2.0,
            ..SkillModifier::new()
        }),
    });

    let rookie_target = unit(1, UnitClass::Infantry, WeaponCategory::SmallArms, Cell::new(1, 0));
    let veteran = unit(0, UnitClass::Infantry, WeaponCategory::SmallArms, Cell::new(0, 0))
        .with_skills(vec![SkillId(10)])
        .with_elite_level(3);
    let peer = veteran.clone().with_elite_level(1);

    let wide_gap = resolve(&grid, &tables, &config, &veteran, &rookie_target);
    let narrow_gap = resolve(&grid, &tables, &config, &peer, &rookie_target);
    assert_eq!(wide_gap.numeric_result(), narrow_gap.numeric_result() + 2);
}

#[test]
fn test_opponent_side_skill_reaches_across() {
    let (grid, mut tables, config) = setup();
    // Jamming: degrades the opponent's attack value whenever it applies
    tables.skills.push(SkillSpec {
        id: SkillId(11),
        name: "Jamming Suite".into(),
        modifier: Some(SkillModifier {
            weapon: Some(WeaponCategory::Missile),
            opponent_attack: -2.0,
            ..SkillModifier::new()
        }),
    });

    let jet = unit(0, UnitClass::Jet, WeaponCategory::Missile, Cell::new(0, 0));
    let armor = unit(1, UnitClass::Armor, WeaponCategory::Cannon, Cell::new(1, 0));
    let jamming = armor.clone().with_skills(vec![SkillId(11)]);

    let base = resolve(&grid, &tables, &config, &jet, &armor);
    let degraded = resolve(&grid, &tables, &config, &jet, &jamming);
    assert!(degraded.numeric_result() < base.numeric_result());
}

#[test]
fn test_march_then_assault_sequence() {
    let mut grid = HexGrid::filled(10, 1, TerrainId(0));
    grid.place_construction(Cell::new(4, 0), ConstructionId(0));
    let tables = GameTables::standard();
    let config = RuleConfig::default();

    let mut roster = UnitRoster::new();
    let attacker_id = roster.spawn(
        unit(0, UnitClass::Armor, WeaponCategory::Cannon, Cell::new(0, 0)).with_movement(3, 10),
    );
    let defender_id = roster.spawn(unit(
        1,
        UnitClass::Infantry,
        WeaponCategory::SmallArms,
        Cell::new(4, 0),
    ));

    // Advance to the cell adjacent to the fort
    let mut session = TurnSession::new(FactionId(0), Cell::new(0, 0));
    session.confirm(1, &grid, &tables, &config, &roster, &FactionPassRules);
    for _ in 0..3 {
        session.move_cursor((1, 0), &grid, &tables, &mut roster);
    }
    assert!(session.finalize(2, &mut roster).is_accepted());
    assert_eq!(roster.get(attacker_id).unwrap().cell, Cell::new(3, 0));

    let res = resolve(
        &grid,
        &tables,
        &config,
        roster.get(attacker_id).unwrap(),
        roster.get(defender_id).unwrap(),
    );
    // Assaulting the fort from open ground is a losing proposition
    assert_eq!(res.attacker.outcome, CombatOutcome::Disadvantage);
    assert_eq!(res.defender.outcome, CombatOutcome::Advantage);
}
