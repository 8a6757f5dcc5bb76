//! Hexfront - Layered Hex Tactics Core

pub mod combat;
pub mod core;
pub mod data;
pub mod grid;
pub mod movement;
pub mod rules;
pub mod turn;
pub mod units;
