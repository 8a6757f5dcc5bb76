//! Combat resolution
//!
//! Pure function of its inputs: positional quality difference picks the
//! outcomes, then each side's value is the sum of its matchup bonus, every
//! applicable skill contribution from both sides, and its own positional
//! defense bonus, rounded with the outcome-biased rule. Missing table rows
//! contribute nothing; the engine is total over its input domain.

use serde::{Deserialize, Serialize};

use crate::combat::outcome::CombatOutcome;
use crate::combat::position::resolve_position;
use crate::combat::rounding::round_with_outcome_eps;
use crate::combat::skill_mods::SkillContext;
use crate::core::config::RuleConfig;
use crate::grid::map::GridTopology;
use crate::rules::tables::GameTables;
use crate::units::Unit;

/// One side's share of a resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideResult {
    pub outcome: CombatOutcome,
    pub value: i32,
}

/// Full result of one resolved exchange
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatResolution {
    pub attacker: SideResult,
    pub defender: SideResult,
}

impl CombatResolution {
    /// Headline numeric result: the attacker-side value
    pub fn numeric_result(&self) -> i32 {
        self.attacker.value
    }
}

/// Sum of a unit's applicable skill contributions for one exchange
///
/// Returns totals for owner attack, owner defense, opponent attack, and
/// opponent defense. Unknown skill ids and skills without modifiers are
/// skipped.
fn skill_totals(tables: &GameTables, owner: &Unit, ctx: &SkillContext) -> (f64, f64, f64, f64) {
    let mut totals = (0.0, 0.0, 0.0, 0.0);
    for &skill_id in &owner.skills {
        let Some(modifier) = tables.skill(skill_id).and_then(|s| s.modifier.as_ref()) else {
            continue;
        };
        if !modifier.applies(ctx) {
            continue;
        }
        totals.0 += modifier.owner_attack;
        totals.1 += modifier.owner_defense;
        totals.2 += modifier.opponent_attack;
        totals.3 += modifier.opponent_defense;
    }
    totals
}

/// Resolve an exchange between an attacker and a defender on their cells
pub fn resolve(
    grid: &impl GridTopology,
    tables: &GameTables,
    config: &RuleConfig,
    attacker: &Unit,
    defender: &Unit,
) -> CombatResolution {
    // Step 1: positional quality on each side's cell
    let attacker_pos = resolve_position(tables, grid.tile(&attacker.cell), attacker.layer);
    let defender_pos = resolve_position(tables, grid.tile(&defender.cell), defender.layer);

    // Step 2: outcome pair from the point difference
    let diff = attacker_pos.points - defender_pos.points;
    let (attacker_outcome, defender_outcome) = tables.outcome.outcomes_for(diff);

    // Step 3: base class matchup bonuses
    let attack_matchup = tables
        .matchup
        .attack_bonus(attacker.class, attacker.weapon, defender.class);
    let defense_matchup = tables
        .matchup
        .defense_bonus(defender.class, attacker.class, attacker.weapon);

    // Step 4: skill filter chains; the attack's weapon category is the one
    // in play for both sides
    let attacker_ctx = SkillContext {
        owner_class: attacker.class,
        opponent_class: defender.class,
        weapon: attacker.weapon,
        owner_elite: attacker.elite_level,
        opponent_elite: defender.elite_level,
    };
    let defender_ctx = SkillContext {
        owner_class: defender.class,
        opponent_class: attacker.class,
        weapon: attacker.weapon,
        owner_elite: defender.elite_level,
        opponent_elite: attacker.elite_level,
    };
    let att_skills = skill_totals(tables, attacker, &attacker_ctx);
    let def_skills = skill_totals(tables, defender, &defender_ctx);

    // Step 5: per-side raw sums and outcome-biased rounding
    let attacker_raw =
        attack_matchup + att_skills.0 + def_skills.2 + attacker_pos.defense_bonus;
    let defender_raw =
        defense_matchup + def_skills.1 + att_skills.3 + defender_pos.defense_bonus;

    let resolution = CombatResolution {
        attacker: SideResult {
            outcome: attacker_outcome,
            value: round_with_outcome_eps(attacker_raw, attacker_outcome, config.rounding_epsilon),
        },
        defender: SideResult {
            outcome: defender_outcome,
            value: round_with_outcome_eps(defender_raw, defender_outcome, config.rounding_epsilon),
        },
    };

    tracing::debug!(
        attacker = ?attacker.id,
        defender = ?defender.id,
        diff,
        ?attacker_outcome,
        ?defender_outcome,
        "combat resolved"
    );
    resolution
}
