//! Units and the unit roster
//!
//! A unit's layer mode changes only through explicit domain transitions
//! (takeoff/landing), never through normal movement.

use serde::{Deserialize, Serialize};

use crate::core::types::{FactionId, SkillId, UnitClass, UnitId, WeaponCategory};
use crate::grid::cell::Cell;
use crate::grid::layer::{LayerMode, LayerProfile};

/// A mobile entity on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub faction: FactionId,
    pub class: UnitClass,
    pub weapon: WeaponCategory,
    /// Veterancy grade; compared by skill filters
    pub elite_level: i32,

    pub cell: Cell,
    /// Current operating mode; changes only via `TurnSession::transition_layer`
    pub layer: LayerMode,
    /// Modes this unit may ever operate in
    pub allowed_layers: LayerProfile,

    /// Maximum steps per activation
    pub movement_range: u32,
    /// Remaining fuel; each step consumes at least one
    pub fuel: u32,
    /// Has this unit consumed its turn
    pub acted: bool,
    /// Carried by a transport; no independent cell presence
    pub embarked: bool,

    pub skills: Vec<SkillId>,
}

impl Unit {
    pub fn new(faction: FactionId, class: UnitClass, weapon: WeaponCategory, cell: Cell) -> Self {
        let layer = default_layer(class);
        Self {
            id: UnitId::new(),
            faction,
            class,
            weapon,
            elite_level: 0,
            cell,
            layer,
            allowed_layers: LayerProfile::new(layer),
            movement_range: 3,
            fuel: 30,
            acted: false,
            embarked: false,
            skills: Vec::new(),
        }
    }

    pub fn with_movement(mut self, range: u32, fuel: u32) -> Self {
        self.movement_range = range;
        self.fuel = fuel;
        self
    }

    pub fn with_skills(mut self, skills: Vec<SkillId>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_elite_level(mut self, level: i32) -> Self {
        self.elite_level = level;
        self
    }

    pub fn with_allowed_layers(mut self, profile: LayerProfile) -> Self {
        self.allowed_layers = profile;
        self
    }

    /// Steps available this activation: range and fuel bound independently
    pub fn step_budget(&self) -> u32 {
        self.movement_range.min(self.fuel)
    }

    /// Ready to be activated by its owner
    pub fn is_ready(&self) -> bool {
        !self.acted && !self.embarked
    }

    pub fn holds_skill(&self, skill: SkillId) -> bool {
        self.skills.contains(&skill)
    }
}

fn default_layer(class: UnitClass) -> LayerMode {
    match class {
        UnitClass::Infantry | UnitClass::Armor | UnitClass::Artillery => LayerMode::LAND_SURFACE,
        UnitClass::Jet => LayerMode::AIR_HIGH,
        UnitClass::Helicopter => LayerMode::AIR_LOW,
        UnitClass::Ship => LayerMode::NAVAL_SURFACE,
        UnitClass::Submarine => LayerMode::SUBMERGED,
    }
}

/// All units in play
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitRoster {
    pub units: Vec<Unit>,
}

impl UnitRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, unit: Unit) -> UnitId {
        let id = unit.id;
        self.units.push(unit);
        id
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Non-embarked units standing on a cell
    pub fn present_at(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(move |u| !u.embarked && u.cell == cell)
    }

    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(idx))
    }
}
