//! Positional outcome classification
//!
//! The difference between attacker and defender positional points is mapped
//! to per-side outcomes by an ordered list of inclusive ranges. First match
//! wins; the order is part of the rule set, never sorted.

use serde::{Deserialize, Serialize};

/// How combat went for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    Advantage,
    Neutral,
    Disadvantage,
}

/// One inclusive range row of the outcome table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRule {
    pub min: i32,
    pub max: i32,
    pub attacker: CombatOutcome,
    pub defender: CombatOutcome,
}

impl OutcomeRule {
    pub fn matches(&self, diff: i32) -> bool {
        self.min <= diff && diff <= self.max
    }
}

/// Ordered outcome rules with a fallback pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTable {
    #[serde(default)]
    pub rules: Vec<OutcomeRule>,
    #[serde(default = "neutral_fallback")]
    pub fallback: (CombatOutcome, CombatOutcome),
}

fn neutral_fallback() -> (CombatOutcome, CombatOutcome) {
    (CombatOutcome::Neutral, CombatOutcome::Neutral)
}

impl OutcomeTable {
    /// Outcomes for `attacker_points - defender_points`
    pub fn outcomes_for(&self, diff: i32) -> (CombatOutcome, CombatOutcome) {
        self.rules
            .iter()
            .find(|rule| rule.matches(diff))
            .map(|rule| (rule.attacker, rule.defender))
            .unwrap_or(self.fallback)
    }
}

impl Default for OutcomeTable {
    /// Standard table: big edges swing both sides, small edges favor the
    /// attacker only
    fn default() -> Self {
        Self {
            rules: vec![
                OutcomeRule {
                    min: 2,
                    max: i32::MAX,
                    attacker: CombatOutcome::Advantage,
                    defender: CombatOutcome::Disadvantage,
                },
                OutcomeRule {
                    min: 0,
                    max: 1,
                    attacker: CombatOutcome::Advantage,
                    defender: CombatOutcome::Neutral,
                },
                OutcomeRule {
                    min: -1,
                    max: -1,
                    attacker: CombatOutcome::Neutral,
                    defender: CombatOutcome::Neutral,
                },
                OutcomeRule {
                    min: i32::MIN,
                    max: -2,
                    attacker: CombatOutcome::Disadvantage,
                    defender: CombatOutcome::Advantage,
                },
            ],
            fallback: (CombatOutcome::Neutral, CombatOutcome::Neutral),
        }
    }
}
