//! Error types for the health model.

use thiserror::Error;

use crate::entities::{ConditionId, EntityId};

/// Result type alias for health model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the host-side model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("character not found: {0}")]
    CharacterNotFound(EntityId),

    #[error("condition {condition} not found on character {character}")]
    ConditionNotFound {
        character: EntityId,
        condition: ConditionId,
    },

    #[error("thought '{def_name}' has no stage {stage} (stages: {available})")]
    InvalidStage {
        def_name: String,
        stage: usize,
        available: usize,
    },

    #[error("failed to parse definitions: {0}")]
    DefParse(#[from] toml::de::Error),
}
