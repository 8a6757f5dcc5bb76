//! Pure rule sets over the grid and data tables

pub mod compat;
pub mod occupancy;
pub mod tables;

pub use compat::can_enter;
pub use occupancy::{FactionPassRules, OccupancyIndex, PassRules};
pub use tables::{Construction, GameTables, SkillSpec, Structure, TerrainType};
