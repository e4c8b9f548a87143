//! Framework error type.
//!
//! Only genuinely malformed input is an error.  Ecological mismatches (wrong
//! diet, wrong species, dead partners) are reported through outcome enums in
//! `fauna-agent` and never reach this type.

use thiserror::Error;

use crate::AgentId;

/// The error type shared by all `fauna-*` crates.
#[derive(Debug, Error)]
pub enum FaunaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent {0} cannot interact with itself")]
    SelfInteraction(AgentId),

    #[error("population is full: no agent id left for slot {0}")]
    PopulationFull(usize),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FaunaError {
    /// Shorthand for the most common variant.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FaunaError::InvalidArgument(msg.into())
    }
}

/// Shorthand result type for all `fauna-*` crates.
pub type FaunaResult<T> = Result<T, FaunaError>;
