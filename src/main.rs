//! Hexfront - Demo Entry Point
//!
//! Generates a seeded board, walks one unit through the full turn protocol
//! (select, preview, commit, finalize), resolves a combat exchange, and
//! prints the event log. Useful for eyeballing engine behavior end to end.

use std::path::PathBuf;

use clap::Parser;

use hexfront::combat::resolution::resolve;
use hexfront::core::config::RuleConfig;
use hexfront::core::error::Result;
use hexfront::core::types::{FactionId, TerrainId, UnitClass, WeaponCategory};
use hexfront::data::load_tables;
use hexfront::grid::cell::Cell;
use hexfront::grid::map::HexGrid;
use hexfront::rules::occupancy::FactionPassRules;
use hexfront::rules::tables::GameTables;
use hexfront::turn::{EngineEvent, TurnSession};
use hexfront::units::{Unit, UnitRoster};

#[derive(Parser, Debug)]
#[command(name = "hexfront", about = "Layered hex tactics engine demo")]
struct Args {
    /// Board generation seed
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Board width in cells
    #[arg(long, default_value_t = 12)]
    width: i32,

    /// Board height in cells
    #[arg(long, default_value_t = 12)]
    height: i32,

    /// Rule tables TOML file (built-in tables when omitted)
    #[arg(long)]
    tables: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexfront=debug".into()),
        )
        .init();

    let args = Args::parse();
    let tables = match &args.tables {
        Some(path) => load_tables(path)?,
        None => GameTables::standard(),
    };
    let config = RuleConfig::default();

    // Plains-heavy pool so the scripted walk stays on passable ground
    let pool = [TerrainId(0), TerrainId(0), TerrainId(3)];
    let grid = HexGrid::generate(args.width, args.height, &pool, args.seed);

    let mut roster = UnitRoster::new();
    let infantry = roster.spawn(
        Unit::new(
            FactionId(0),
            UnitClass::Infantry,
            WeaponCategory::SmallArms,
            Cell::new(1, 1),
        )
        .with_movement(3, 12),
    );
    let enemy = roster.spawn(
        Unit::new(
            FactionId(1),
            UnitClass::Armor,
            WeaponCategory::Cannon,
            Cell::new(5, 1),
        )
        .with_movement(4, 20),
    );

    tracing::info!(?infantry, ?enemy, "demo units placed");

    let mut session = TurnSession::new(FactionId(0), Cell::new(1, 1));
    let pass = FactionPassRules;

    // Select, preview two cells east, commit, finalize
    session.confirm(1, &grid, &tables, &config, &roster, &pass);
    session.move_cursor((1, 0), &grid, &tables, &mut roster);
    session.move_cursor((1, 0), &grid, &tables, &mut roster);
    session.confirm(2, &grid, &tables, &config, &roster, &pass);
    session.finalize(3, &mut roster);

    // Resolve one exchange between the demo units
    let attacker = roster
        .get(infantry)
        .ok_or(hexfront::core::error::EngineError::UnitNotFound(infantry))?;
    let defender = roster
        .get(enemy)
        .ok_or(hexfront::core::error::EngineError::UnitNotFound(enemy))?;
    let resolution = resolve(&grid, &tables, &config, attacker, defender);
    session.events.push(EngineEvent::CombatResolved {
        attacker: infantry,
        defender: enemy,
        resolution,
    });

    println!("=== event log ===");
    for event in session.events.drain() {
        match event {
            EngineEvent::SelectionChanged { unit } => println!("selected: {unit:?}"),
            EngineEvent::PathPreviewChanged { destination } => {
                println!("preview: {destination:?}")
            }
            EngineEvent::MoveCommitted { path } => {
                println!("committed: {} steps to {:?}", path.steps(), path.destination())
            }
            EngineEvent::MoveFinalized { unit, fuel_delta } => {
                println!("finalized: {unit:?} fuel {fuel_delta:+}")
            }
            EngineEvent::CombatResolved { resolution, .. } => println!(
                "combat: attacker {:?} {:+}, defender {:?} {:+}",
                resolution.attacker.outcome,
                resolution.attacker.value,
                resolution.defender.outcome,
                resolution.defender.value
            ),
            EngineEvent::ActionDeclined { reason } => println!("declined: {reason:?}"),
        }
    }

    Ok(())
}
