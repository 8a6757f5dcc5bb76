//! Positional quality (DPQ) resolution
//!
//! Each cell resolves to a tier giving combat points and a defense bonus.
//! Precedence: construction, then structure, then terrain. When the acting
//! entity currently occupies Air, the table's air-height override takes
//! final precedence over anything on the ground.

use serde::{Deserialize, Serialize};

use crate::core::types::DpqTier;
use crate::grid::layer::{HeightLevel, LayerMode};
use crate::grid::tile::Tile;
use crate::rules::tables::GameTables;

/// One tier row: tier -> (points, defense bonus)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpqEntry {
    pub tier: DpqTier,
    pub points: i32,
    pub defense_bonus: f64,
}

/// Air entities take their tier from height, not ground contents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirHeightOverride {
    pub height: HeightLevel,
    pub tier: DpqTier,
}

/// The positional-quality table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DpqTable {
    #[serde(default)]
    pub entries: Vec<DpqEntry>,
    #[serde(default)]
    pub air_overrides: Vec<AirHeightOverride>,
}

impl DpqTable {
    /// Points and defense bonus for a tier; missing rows are worth nothing
    pub fn values(&self, tier: DpqTier) -> (i32, f64) {
        self.entries
            .iter()
            .find(|e| e.tier == tier)
            .map(|e| (e.points, e.defense_bonus))
            .unwrap_or((0, 0.0))
    }

    pub fn air_override(&self, height: HeightLevel) -> Option<DpqTier> {
        self.air_overrides
            .iter()
            .find(|o| o.height == height)
            .map(|o| o.tier)
    }
}

/// Resolved positional quality for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CombatPosition {
    pub points: i32,
    pub defense_bonus: f64,
}

/// Resolve positional quality for an entity standing on (or above) a tile
///
/// A missing tile or missing table rows resolve to zero, never an error.
pub fn resolve_position(
    tables: &GameTables,
    tile: Option<&Tile>,
    entity_layer: LayerMode,
) -> CombatPosition {
    let tier = position_tier(tables, tile, entity_layer);
    match tier {
        Some(tier) => {
            let (points, defense_bonus) = tables.dpq.values(tier);
            CombatPosition {
                points,
                defense_bonus,
            }
        }
        None => CombatPosition::default(),
    }
}

fn position_tier(
    tables: &GameTables,
    tile: Option<&Tile>,
    entity_layer: LayerMode,
) -> Option<DpqTier> {
    if entity_layer.is_air() {
        if let Some(tier) = tables.dpq.air_override(entity_layer.height) {
            return Some(tier);
        }
    }

    let tile = tile?;
    if let Some(tier) = tile
        .construction
        .and_then(|id| tables.construction(id))
        .and_then(|c| c.dpq)
    {
        return Some(tier);
    }
    if let Some(tier) = tile
        .structure
        .and_then(|id| tables.structure(id))
        .and_then(|s| s.dpq)
    {
        return Some(tier);
    }
    tables.terrain(tile.terrain).and_then(|t| t.dpq)
}
