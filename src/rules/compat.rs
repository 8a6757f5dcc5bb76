//! Domain/height compatibility
//!
//! Pure predicate deciding whether an entity may enter a cell, given the
//! cell's effective layer descriptor. The always-allow-air flag only ever
//! benefits entities currently operating in the Air domain.

use crate::core::types::SkillId;
use crate::grid::layer::{Domain, LayerDescriptor, LayerMode, LayerProfile};

/// May an entity enter a cell offering this descriptor
///
/// `current` is the mode the entity is operating in right now; `profile` is
/// everything it could operate in. Required-entry skills gate independently
/// of the domain check: holding any one listed skill satisfies the gate.
pub fn can_enter(
    current: LayerMode,
    profile: &LayerProfile,
    held_skills: &[SkillId],
    cell: &LayerDescriptor,
) -> bool {
    if !skill_gate_passes(held_skills, cell) {
        return false;
    }

    if current.domain == Domain::Air {
        // Air entities ride the escape hatch or an explicit air offering at
        // their height
        cell.layers.always_allow_air
            || cell
                .layers
                .modes()
                .any(|m| m.domain == Domain::Air && m.height == current.height)
    } else {
        // Surface/submerged entities need an explicit mode overlap
        profile.modes().any(|m| cell.layers.supports(m))
    }
}

fn skill_gate_passes(held_skills: &[SkillId], cell: &LayerDescriptor) -> bool {
    cell.required_skills.is_empty()
        || cell.required_skills.iter().any(|s| held_skills.contains(s))
}
