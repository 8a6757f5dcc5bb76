//! TOML rule-table loading
//!
//! Tables deserialize straight into `GameTables` and are validated before
//! use: duplicate ids, inverted outcome ranges, and zero move costs are
//! configuration mistakes that would otherwise surface as silent lookup
//! misses deep in resolution.

use std::path::Path;

use crate::core::error::{EngineError, Result};
use crate::rules::tables::GameTables;

/// Load and validate rule tables from a TOML file
pub fn load_tables(path: &Path) -> Result<GameTables> {
    let content = std::fs::read_to_string(path)?;
    parse_tables(&content)
}

/// Parse and validate rule tables from a TOML string
pub fn parse_tables(content: &str) -> Result<GameTables> {
    let tables: GameTables = toml::from_str(content)?;
    validate(&tables)?;
    tracing::debug!(
        terrain = tables.terrain.len(),
        constructions = tables.constructions.len(),
        structures = tables.structures.len(),
        skills = tables.skills.len(),
        "rule tables loaded"
    );
    Ok(tables)
}

fn validate(tables: &GameTables) -> Result<()> {
    check_unique("terrain", tables.terrain.iter().map(|t| t.id.0))?;
    check_unique("construction", tables.constructions.iter().map(|c| c.id.0))?;
    check_unique("structure", tables.structures.iter().map(|s| s.id.0))?;
    check_unique("skill", tables.skills.iter().map(|s| s.id.0))?;
    check_unique("dpq tier", tables.dpq.entries.iter().map(|e| e.tier.0))?;

    for terrain in &tables.terrain {
        if terrain.descriptor.move_cost == 0 {
            return Err(EngineError::InvalidTableData(format!(
                "terrain {:?} has zero move cost",
                terrain.name
            )));
        }
    }
    for rule in &tables.outcome.rules {
        if rule.min > rule.max {
            return Err(EngineError::InvalidTableData(format!(
                "outcome range [{}, {}] is inverted",
                rule.min, rule.max
            )));
        }
    }
    Ok(())
}

fn check_unique(kind: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = ahash::AHashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(EngineError::InvalidTableData(format!(
                "duplicate {kind} id {id}"
            )));
        }
    }
    Ok(())
}
