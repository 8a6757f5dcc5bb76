//! Outbound events and action results
//!
//! Collaborators (animation, audio, UI) subscribe to the event log; the core
//! never depends on them. Structurally invalid actions come back as declined
//! results with a reason code, never as errors; invariant-violating no-ops
//! are ignored silently.

use serde::{Deserialize, Serialize};

use crate::combat::resolution::CombatResolution;
use crate::core::types::UnitId;
use crate::grid::cell::Cell;
use crate::movement::path::Path;

/// Why an action was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclineReason {
    /// Cursor target has no tile
    OutOfBounds,
    /// No selectable unit under the cursor
    NoUnitSelected,
    /// Unit belongs to another faction
    NotFriendly,
    /// Unit already acted or is embarked
    UnitNotReady,
    /// No reachable destination corresponds to the request
    DestinationUnreachable,
    /// Requested layer mode is not available to this unit here
    LayerNotAllowed,
}

/// How a requested action went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Accepted,
    /// Idempotent no-op (duplicate input in the same step, cancel with
    /// nothing to cancel)
    Ignored,
    Declined(DeclineReason),
}

impl ActionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ActionResult::Accepted)
    }
}

/// Events the core exposes to collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    SelectionChanged { unit: Option<UnitId> },
    PathPreviewChanged { destination: Option<Cell> },
    MoveCommitted { path: Path },
    MoveFinalized { unit: UnitId, fuel_delta: i64 },
    CombatResolved {
        attacker: UnitId,
        defender: UnitId,
        resolution: CombatResolution,
    },
    ActionDeclined { reason: DeclineReason },
}

/// Accumulated events for one session, drained by collaborators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<EngineEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineEvent> {
        self.events.iter()
    }
}
