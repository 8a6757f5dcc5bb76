//! Board topology and the layer model

pub mod cell;
pub mod layer;
pub mod map;
pub mod tile;

pub use cell::Cell;
pub use layer::{Domain, HeightLevel, LayerDescriptor, LayerMode, LayerProfile, SkillCostOverride};
pub use map::{GridTopology, HexGrid};
pub use tile::Tile;
