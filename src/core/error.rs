use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unit not found: {0:?}")]
    UnitNotFound(crate::core::types::UnitId),

    #[error("Table entry not found: {0}")]
    TableEntryNotFound(String),

    #[error("Invalid table data: {0}")]
    InvalidTableData(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
