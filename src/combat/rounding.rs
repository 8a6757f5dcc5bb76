//! Outcome-biased rounding
//!
//! Favorable outcomes round up and get one extra point at exact integers;
//! unfavorable outcomes mirror that downward. Neutral rounds half away from
//! zero (`f64::round`), the documented tie-break for exact `.5` values.
//! This asymmetry is load-bearing for balance; do not "simplify" it.

use crate::combat::outcome::CombatOutcome;

/// Default tolerance for the integer check (see `RuleConfig::rounding_epsilon`)
pub const ROUNDING_EPSILON: f64 = 1e-6;

/// Apply outcome-biased rounding with an explicit integer tolerance
pub fn round_with_outcome_eps(raw: f64, outcome: CombatOutcome, epsilon: f64) -> i32 {
    let nearest = raw.round();
    let is_integer = (raw - nearest).abs() <= epsilon;

    let value = match outcome {
        CombatOutcome::Advantage => {
            if is_integer {
                nearest + 1.0
            } else {
                raw.ceil()
            }
        }
        CombatOutcome::Disadvantage => {
            if is_integer {
                nearest - 1.0
            } else {
                raw.floor()
            }
        }
        CombatOutcome::Neutral => nearest,
    };

    value as i32
}

/// Apply outcome-biased rounding with the default tolerance
pub fn round_with_outcome(raw: f64, outcome: CombatOutcome) -> i32 {
    round_with_outcome_eps(raw, outcome, ROUNDING_EPSILON)
}

/// Outcome-aware division; zero denominator yields zero
pub fn divide_and_round(numerator: f64, denominator: f64, outcome: CombatOutcome) -> i32 {
    if denominator == 0.0 {
        return 0;
    }
    round_with_outcome(numerator / denominator, outcome)
}
