//! Read-only data tables
//!
//! Terrain, construction, structure, and skill descriptors plus the combat
//! tables. The core never owns table lifecycle; `data::loader` fills these
//! from TOML and `standard()` provides the built-in rule set used by the
//! demo and tests. Lookups are sequential scans over small configured lists;
//! rule order is priority and must not be reordered.

use serde::{Deserialize, Serialize};

use crate::combat::matchup::{AttackMatchupRule, DefenseMatchupRule, MatchupTable};
use crate::combat::outcome::OutcomeTable;
use crate::combat::position::{AirHeightOverride, DpqEntry, DpqTable};
use crate::combat::skill_mods::SkillModifier;
use crate::core::types::{
    ConstructionId, DpqTier, SkillId, StructureId, TerrainId, UnitClass, WeaponCategory,
};
use crate::grid::layer::{HeightLevel, LayerDescriptor, LayerMode, LayerProfile};
use crate::grid::tile::Tile;

/// Static terrain descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainType {
    pub id: TerrainId,
    pub name: String,
    pub descriptor: LayerDescriptor,
    #[serde(default)]
    pub dpq: Option<DpqTier>,
}

/// Static construction descriptor (airfields, forts, harbors)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    pub id: ConstructionId,
    pub name: String,
    pub descriptor: LayerDescriptor,
    #[serde(default)]
    pub dpq: Option<DpqTier>,
}

/// Static structure descriptor (road networks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    pub name: String,
    pub descriptor: LayerDescriptor,
    #[serde(default)]
    pub dpq: Option<DpqTier>,
}

/// Skill definition; the combat modifier is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub id: SkillId,
    pub name: String,
    #[serde(default)]
    pub modifier: Option<SkillModifier>,
}

/// All loaded rule tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameTables {
    #[serde(default)]
    pub terrain: Vec<TerrainType>,
    #[serde(default)]
    pub constructions: Vec<Construction>,
    #[serde(default)]
    pub structures: Vec<Structure>,
    #[serde(default)]
    pub skills: Vec<SkillSpec>,
    #[serde(default)]
    pub matchup: MatchupTable,
    #[serde(default)]
    pub dpq: DpqTable,
    #[serde(default)]
    pub outcome: OutcomeTable,
}

impl GameTables {
    pub fn terrain(&self, id: TerrainId) -> Option<&TerrainType> {
        self.terrain.iter().find(|t| t.id == id)
    }

    pub fn construction(&self, id: ConstructionId) -> Option<&Construction> {
        self.constructions.iter().find(|c| c.id == id)
    }

    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.iter().find(|s| s.id == id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&SkillSpec> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Layer descriptor governing entry and combat, with full precedence:
    /// construction, then structure, then terrain
    pub fn effective_descriptor(&self, tile: &Tile) -> Option<&LayerDescriptor> {
        if let Some(c) = tile.construction.and_then(|id| self.construction(id)) {
            return Some(&c.descriptor);
        }
        if let Some(s) = tile.structure.and_then(|id| self.structure(id)) {
            return Some(&s.descriptor);
        }
        self.terrain(tile.terrain).map(|t| &t.descriptor)
    }

    /// Descriptor consulted during path admission: the occupying
    /// construction when present, else terrain
    pub fn movement_descriptor(&self, tile: &Tile) -> Option<&LayerDescriptor> {
        if let Some(c) = tile.construction.and_then(|id| self.construction(id)) {
            return Some(&c.descriptor);
        }
        self.terrain(tile.terrain).map(|t| &t.descriptor)
    }

    /// Built-in rule set: four terrains, fort/harbor constructions, a road
    /// network, three skills, and modest matchup tables
    pub fn standard() -> Self {
        let land = || LayerProfile::new(LayerMode::LAND_SURFACE).with_always_allow_air();
        let sea = || {
            LayerProfile::new(LayerMode::NAVAL_SURFACE)
                .with_additional(vec![LayerMode::SUBMERGED])
                .with_always_allow_air()
        };

        Self {
            terrain: vec![
                TerrainType {
                    id: TerrainId(0),
                    name: "Plains".into(),
                    descriptor: LayerDescriptor::new(land()),
                    dpq: Some(DpqTier(0)),
                },
                TerrainType {
                    id: TerrainId(1),
                    name: "Sea".into(),
                    descriptor: LayerDescriptor::new(sea()),
                    dpq: Some(DpqTier(0)),
                },
                TerrainType {
                    id: TerrainId(2),
                    name: "Mountain".into(),
                    descriptor: LayerDescriptor::new(land())
                        .with_move_cost(2)
                        .with_required_skills(vec![SkillId(0)])
                        .with_cost_override(SkillId(0), 1),
                    dpq: Some(DpqTier(2)),
                },
                TerrainType {
                    id: TerrainId(3),
                    name: "Forest".into(),
                    descriptor: LayerDescriptor::new(land()),
                    dpq: Some(DpqTier(1)),
                },
            ],
            constructions: vec![
                Construction {
                    id: ConstructionId(0),
                    name: "Fort".into(),
                    descriptor: LayerDescriptor::new(land()),
                    dpq: Some(DpqTier(3)),
                },
                Construction {
                    id: ConstructionId(1),
                    name: "Harbor".into(),
                    descriptor: LayerDescriptor::new(
                        LayerProfile::new(LayerMode::NAVAL_SURFACE)
                            .with_additional(vec![LayerMode::LAND_SURFACE])
                            .with_always_allow_air(),
                    ),
                    dpq: None,
                },
            ],
            structures: vec![Structure {
                id: StructureId(0),
                name: "Road".into(),
                descriptor: LayerDescriptor::new(land()),
                dpq: None,
            }],
            skills: vec![
                SkillSpec {
                    id: SkillId(0),
                    name: "Mountaineer".into(),
                    modifier: None,
                },
                SkillSpec {
                    id: SkillId(1),
                    name: "Ace Crew".into(),
                    modifier: Some(SkillModifier {
                        owner_class: Some(UnitClass::Jet),
                        owner_attack: 1.0,
                        ..SkillModifier::new()
                    }),
                },
                SkillSpec {
                    id: SkillId(2),
                    name: "Entrenched".into(),
                    modifier: Some(SkillModifier {
                        owner_class: Some(UnitClass::Infantry),
                        owner_defense: 1.0,
                        ..SkillModifier::new()
                    }),
                },
            ],
            matchup: MatchupTable {
                attack_rules: vec![
                    AttackMatchupRule {
                        attacker: Some(UnitClass::Jet),
                        weapon: Some(WeaponCategory::Missile),
                        defender: Some(UnitClass::Armor),
                        bonus: 2.0,
                    },
                    AttackMatchupRule {
                        attacker: Some(UnitClass::Armor),
                        weapon: Some(WeaponCategory::Cannon),
                        defender: Some(UnitClass::Infantry),
                        bonus: 1.0,
                    },
                    AttackMatchupRule {
                        attacker: Some(UnitClass::Submarine),
                        weapon: Some(WeaponCategory::Torpedo),
                        defender: Some(UnitClass::Ship),
                        bonus: 2.0,
                    },
                ],
                defense_rules: vec![
                    DefenseMatchupRule {
                        defender: Some(UnitClass::Armor),
                        attacker: None,
                        weapon: Some(WeaponCategory::SmallArms),
                        bonus: 1.5,
                    },
                    DefenseMatchupRule {
                        defender: Some(UnitClass::Infantry),
                        attacker: Some(UnitClass::Jet),
                        weapon: Some(WeaponCategory::Bomb),
                        bonus: 0.5,
                    },
                ],
            },
            dpq: DpqTable {
                entries: vec![
                    DpqEntry {
                        tier: DpqTier(0),
                        points: 0,
                        defense_bonus: 0.0,
                    },
                    DpqEntry {
                        tier: DpqTier(1),
                        points: 1,
                        defense_bonus: 0.5,
                    },
                    DpqEntry {
                        tier: DpqTier(2),
                        points: 2,
                        defense_bonus: 1.0,
                    },
                    DpqEntry {
                        tier: DpqTier(3),
                        points: 3,
                        defense_bonus: 1.5,
                    },
                ],
                air_overrides: vec![
                    AirHeightOverride {
                        height: HeightLevel::AirLow,
                        tier: DpqTier(1),
                    },
                    AirHeightOverride {
                        height: HeightLevel::AirHigh,
                        tier: DpqTier(0),
                    },
                ],
            },
            outcome: OutcomeTable::default(),
        }
    }
}
