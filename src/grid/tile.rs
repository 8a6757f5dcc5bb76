//! Per-cell static contents
//!
//! Terrain always exists; at most one construction per cell; a cell belongs
//! to at most one structure's road network.

use serde::{Deserialize, Serialize};

use crate::core::types::{ConstructionId, StructureId, TerrainId};

/// Static occupants of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: TerrainId,
    pub construction: Option<ConstructionId>,
    pub structure: Option<StructureId>,
}

impl Tile {
    pub fn new(terrain: TerrainId) -> Self {
        Self {
            terrain,
            construction: None,
            structure: None,
        }
    }

    pub fn with_construction(mut self, id: ConstructionId) -> Self {
        self.construction = Some(id);
        self
    }

    pub fn with_structure(mut self, id: StructureId) -> Self {
        self.structure = Some(id);
        self
    }
}
