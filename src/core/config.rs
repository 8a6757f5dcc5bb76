//! Rule configuration with documented constants
//!
//! All rule-set knobs are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

/// Configuration for the core rule set
///
/// Defaults match the standard rule set; scenario files may override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Maximum number of non-embarked units a single cell may hold
    ///
    /// The standard rule set allows exactly one. Raising this permits
    /// stacking; occupancy checks and path destinations honor it uniformly.
    pub cell_capacity: usize,

    /// Tolerance used to decide whether a raw combat value is an integer
    ///
    /// Outcome-biased rounding treats values within this distance of an
    /// integer as exact, which triggers the extra +1/-1 adjustment.
    pub rounding_epsilon: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            cell_capacity: 1,
            rounding_epsilon: 1e-6,
        }
    }
}
