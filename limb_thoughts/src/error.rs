//! Error types for the thought engine.

use health_model::{EntityId, ModelError};
use thiserror::Error;

use crate::catalog::EventKind;
use crate::classifier::{PartCategory, ReplacementTier};

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ThoughtError>;

/// Reasons an event is dropped. None of these escape the listener boundary.
#[derive(Error, Debug)]
pub enum ThoughtError {
    #[error("missing reference: {0}")]
    MissingReference(&'static str),

    #[error("no thought for {kind:?} on {category:?} (tier {tier:?})")]
    UnrecognizedCombination {
        kind: EventKind,
        category: PartCategory,
        tier: Option<ReplacementTier>,
    },

    #[error("thought definition not registered: {0}")]
    UnknownThoughtDef(String),

    #[error("character {0} has no mood memories")]
    IncompleteMoodSubsystem(EntityId),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ThoughtError {
    fn from(e: toml::de::Error) -> Self {
        ThoughtError::Config(e.to_string())
    }
}
