//! Turn-phase state: cursor, selection, and the two-phase fuel protocol

pub mod cursor;
pub mod events;
pub mod session;

pub use cursor::CursorState;
pub use events::{ActionResult, DeclineReason, EngineEvent, EventLog};
pub use session::{CommittedMove, TurnSession};
