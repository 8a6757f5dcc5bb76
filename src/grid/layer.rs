//! Domain and height layering
//!
//! A `LayerMode` is the (domain, height) pair an entity operates in or a cell
//! offers. Entities carry a `LayerProfile` (native mode plus extras); cells
//! expose a `LayerDescriptor` that adds entry cost and skill gating on top.

use serde::{Deserialize, Serialize};

use crate::core::types::SkillId;

/// Operating medium of an entity or cell offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Land,
    Naval,
    Air,
    Submarine,
}

/// Vertical band within a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightLevel {
    Surface,
    AirLow,
    AirHigh,
    Submerged,
}

/// A (domain, height) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMode {
    pub domain: Domain,
    pub height: HeightLevel,
}

impl LayerMode {
    pub fn new(domain: Domain, height: HeightLevel) -> Self {
        Self { domain, height }
    }

    pub const LAND_SURFACE: LayerMode = LayerMode {
        domain: Domain::Land,
        height: HeightLevel::Surface,
    };
    pub const NAVAL_SURFACE: LayerMode = LayerMode {
        domain: Domain::Naval,
        height: HeightLevel::Surface,
    };
    pub const AIR_LOW: LayerMode = LayerMode {
        domain: Domain::Air,
        height: HeightLevel::AirLow,
    };
    pub const AIR_HIGH: LayerMode = LayerMode {
        domain: Domain::Air,
        height: HeightLevel::AirHigh,
    };
    pub const SUBMERGED: LayerMode = LayerMode {
        domain: Domain::Submarine,
        height: HeightLevel::Submerged,
    };

    pub fn is_air(&self) -> bool {
        self.domain == Domain::Air
    }
}

/// Native mode plus additional allowed modes
///
/// Shared shape between entities and cell offerings. The always-allow-air
/// flag only has an effect on the cell side (see `rules::compat`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerProfile {
    pub native: LayerMode,
    #[serde(default)]
    pub additional: Vec<LayerMode>,
    #[serde(default)]
    pub always_allow_air: bool,
}

impl LayerProfile {
    pub fn new(native: LayerMode) -> Self {
        Self {
            native,
            additional: Vec::new(),
            always_allow_air: false,
        }
    }

    pub fn with_additional(mut self, modes: Vec<LayerMode>) -> Self {
        self.additional = modes;
        self
    }

    pub fn with_always_allow_air(mut self) -> Self {
        self.always_allow_air = true;
        self
    }

    /// Native mode followed by the additional modes
    pub fn modes(&self) -> impl Iterator<Item = &LayerMode> {
        std::iter::once(&self.native).chain(self.additional.iter())
    }

    pub fn supports(&self, mode: &LayerMode) -> bool {
        self.modes().any(|m| m == mode)
    }
}

/// Entry cost override granted by holding a specific skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillCostOverride {
    pub skill: SkillId,
    pub cost: u32,
}

/// What a cell occupant (terrain, construction, or structure) offers movers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub layers: LayerProfile,
    /// Base movement cost in fuel per entry, at least 1
    #[serde(default = "default_move_cost")]
    pub move_cost: u32,
    /// Holding any one of these admits entry; empty means unrestricted
    #[serde(default)]
    pub required_skills: Vec<SkillId>,
    #[serde(default)]
    pub skill_cost_overrides: Vec<SkillCostOverride>,
}

fn default_move_cost() -> u32 {
    1
}

impl LayerDescriptor {
    pub fn new(layers: LayerProfile) -> Self {
        Self {
            layers,
            move_cost: 1,
            required_skills: Vec::new(),
            skill_cost_overrides: Vec::new(),
        }
    }

    pub fn with_move_cost(mut self, cost: u32) -> Self {
        self.move_cost = cost.max(1);
        self
    }

    pub fn with_required_skills(mut self, skills: Vec<SkillId>) -> Self {
        self.required_skills = skills;
        self
    }

    pub fn with_cost_override(mut self, skill: SkillId, cost: u32) -> Self {
        self.skill_cost_overrides.push(SkillCostOverride { skill, cost });
        self
    }

    /// Entry cost for a mover holding the given skills
    ///
    /// First matching override wins; otherwise the base cost.
    pub fn entry_cost_for(&self, held_skills: &[SkillId]) -> u32 {
        self.skill_cost_overrides
            .iter()
            .find(|o| held_skills.contains(&o.skill))
            .map(|o| o.cost)
            .unwrap_or(self.move_cost)
    }
}
