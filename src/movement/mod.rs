//! Reachability search and movement paths

pub mod path;
pub mod pathfinding;

pub use path::Path;
pub use pathfinding::reachable_cells;
