//! External data loading

pub mod loader;

pub use loader::{load_tables, parse_tables};
