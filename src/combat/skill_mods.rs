//! Skill-conditional combat modifiers
//!
//! Each held skill carries a filter chain; every active filter must pass or
//! the skill contributes nothing, silently. Filters left unset are inactive.

use serde::{Deserialize, Serialize};

use crate::core::types::{UnitClass, WeaponCategory};

/// How the owner's and opponent's elite levels are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EliteComparison {
    #[default]
    Ignore,
    /// Owner leads by at least the threshold
    OwnerGreater,
    /// Opponent leads by at least the threshold
    OpponentGreater,
    /// Levels differ by at least the threshold
    Different,
    /// Levels are within the threshold of each other
    Equal,
}

/// Inputs a skill filter chain is evaluated against
#[derive(Debug, Clone, Copy)]
pub struct SkillContext {
    pub owner_class: UnitClass,
    pub opponent_class: UnitClass,
    /// Weapon category of the attacking side in the exchange
    pub weapon: WeaponCategory,
    pub owner_elite: i32,
    pub opponent_elite: i32,
}

/// One skill's conditional contribution to a combat exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillModifier {
    #[serde(default)]
    pub owner_class: Option<UnitClass>,
    #[serde(default)]
    pub opponent_class: Option<UnitClass>,
    #[serde(default)]
    pub weapon: Option<WeaponCategory>,
    #[serde(default)]
    pub require_same_class: bool,
    #[serde(default)]
    pub elite_comparison: EliteComparison,
    /// Minimum absolute level difference for the comparison modes
    #[serde(default)]
    pub elite_min_diff: i32,

    #[serde(default)]
    pub owner_attack: f64,
    #[serde(default)]
    pub owner_defense: f64,
    #[serde(default)]
    pub opponent_attack: f64,
    #[serde(default)]
    pub opponent_defense: f64,
}

impl SkillModifier {
    pub fn new() -> Self {
        Self {
            owner_class: None,
            opponent_class: None,
            weapon: None,
            require_same_class: false,
            elite_comparison: EliteComparison::Ignore,
            elite_min_diff: 0,
            owner_attack: 0.0,
            owner_defense: 0.0,
            opponent_attack: 0.0,
            opponent_defense: 0.0,
        }
    }

    /// Does every active filter pass for this exchange
    pub fn applies(&self, ctx: &SkillContext) -> bool {
        if let Some(class) = self.owner_class {
            if ctx.owner_class != class {
                return false;
            }
        }
        if let Some(class) = self.opponent_class {
            if ctx.opponent_class != class {
                return false;
            }
        }
        if let Some(weapon) = self.weapon {
            if ctx.weapon != weapon {
                return false;
            }
        }
        if self.require_same_class && ctx.owner_class != ctx.opponent_class {
            return false;
        }
        self.elite_filter_passes(ctx)
    }

    fn elite_filter_passes(&self, ctx: &SkillContext) -> bool {
        let diff = ctx.owner_elite - ctx.opponent_elite;
        // Strict comparisons need a gap of at least one level
        let threshold = self.elite_min_diff.max(1);
        match self.elite_comparison {
            EliteComparison::Ignore => true,
            EliteComparison::OwnerGreater => diff >= threshold,
            EliteComparison::OpponentGreater => -diff >= threshold,
            EliteComparison::Different => diff.abs() >= threshold,
            EliteComparison::Equal => diff.abs() <= self.elite_min_diff,
        }
    }
}

impl Default for SkillModifier {
    fn default() -> Self {
        Self::new()
    }
}
