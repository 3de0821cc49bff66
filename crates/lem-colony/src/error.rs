//! Colony construction error type.

use thiserror::Error;

/// Errors produced by [`ColonyBuilder`][crate::ColonyBuilder].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColonyError {
    #[error("agent count must be positive")]
    NoAgents,

    #[error("duplicate room name {0:?}")]
    DuplicateRoom(String),

    #[error("unknown room {0:?} in tunnel")]
    UnknownRoom(String),

    #[error("tunnel from {0:?} to itself")]
    SelfLoop(String),

    #[error("no start room declared")]
    MissingStart,

    #[error("no end room declared")]
    MissingEnd,
}

pub type ColonyResult<T> = Result<T, ColonyError>;
