//! Combat resolution engine
//!
//! Pure functions over units, cells, and the loaded tables. Positional
//! quality picks the outcome pair; matchup and skill tables shape the
//! numeric values; outcome-biased rounding exaggerates decisive results.

pub mod matchup;
pub mod outcome;
pub mod position;
pub mod resolution;
pub mod rounding;
pub mod skill_mods;

pub use matchup::{AttackMatchupRule, DefenseMatchupRule, MatchupTable};
pub use outcome::{CombatOutcome, OutcomeRule, OutcomeTable};
pub use position::{resolve_position, AirHeightOverride, CombatPosition, DpqEntry, DpqTable};
pub use resolution::{resolve, CombatResolution, SideResult};
pub use rounding::{divide_and_round, round_with_outcome, round_with_outcome_eps};
pub use skill_mods::{EliteComparison, SkillContext, SkillModifier};
