//! Cursor / selection states

use serde::{Deserialize, Serialize};

/// Where the selection flow currently stands
///
/// Neutral -> UnitSelected -> MovingPreview -> Stopped -> Neutral, with
/// cancel collapsing any non-Neutral state back to Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorState {
    #[default]
    Neutral,
    UnitSelected,
    MovingPreview,
    Stopped,
}

impl CursorState {
    pub fn has_selection(&self) -> bool {
        !matches!(self, CursorState::Neutral)
    }
}
