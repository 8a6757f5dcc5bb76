//! Class/weapon matchup tables (RPS)
//!
//! Ordered rule lists evaluated first-match-wins. Match order is priority
//! and is semantically load-bearing; lookups stay sequential scans over the
//! configured lists. A field left unset matches anything.

use serde::{Deserialize, Serialize};

use crate::core::types::{UnitClass, WeaponCategory};

fn field_matches<T: PartialEq>(filter: &Option<T>, value: &T) -> bool {
    match filter {
        Some(wanted) => wanted == value,
        None => true,
    }
}

/// Attack-side row: keyed by (attacker class, weapon category, defender class)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackMatchupRule {
    pub attacker: Option<UnitClass>,
    pub weapon: Option<WeaponCategory>,
    pub defender: Option<UnitClass>,
    pub bonus: f64,
}

impl AttackMatchupRule {
    fn matches(&self, attacker: UnitClass, weapon: WeaponCategory, defender: UnitClass) -> bool {
        field_matches(&self.attacker, &attacker)
            && field_matches(&self.weapon, &weapon)
            && field_matches(&self.defender, &defender)
    }
}

/// Defense-side row: keyed by (defender class, attacker class, weapon category)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseMatchupRule {
    pub defender: Option<UnitClass>,
    pub attacker: Option<UnitClass>,
    pub weapon: Option<WeaponCategory>,
    pub bonus: f64,
}

impl DefenseMatchupRule {
    fn matches(&self, defender: UnitClass, attacker: UnitClass, weapon: WeaponCategory) -> bool {
        field_matches(&self.defender, &defender)
            && field_matches(&self.attacker, &attacker)
            && field_matches(&self.weapon, &weapon)
    }
}

/// Priority-ordered matchup rules for both sides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupTable {
    #[serde(default)]
    pub attack_rules: Vec<AttackMatchupRule>,
    #[serde(default)]
    pub defense_rules: Vec<DefenseMatchupRule>,
}

impl MatchupTable {
    /// First matching attack bonus; no match means no bonus
    pub fn attack_bonus(
        &self,
        attacker: UnitClass,
        weapon: WeaponCategory,
        defender: UnitClass,
    ) -> f64 {
        self.attack_rules
            .iter()
            .find(|rule| rule.matches(attacker, weapon, defender))
            .map(|rule| rule.bonus)
            .unwrap_or(0.0)
    }

    /// First matching defense bonus; no match means no bonus
    pub fn defense_bonus(
        &self,
        defender: UnitClass,
        attacker: UnitClass,
        weapon: WeaponCategory,
    ) -> f64 {
        self.defense_rules
            .iter()
            .find(|rule| rule.matches(defender, attacker, weapon))
            .map(|rule| rule.bonus)
            .unwrap_or(0.0)
    }
}
