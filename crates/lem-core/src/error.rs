//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `LemError` as one variant
//! where configuration problems can surface.

use thiserror::Error;

/// The base error type for `lem-core`.
#[derive(Debug, Error)]
pub enum LemError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown selection strategy {0:?}: expected \"max-paths\" or \"min-turns\"")]
    UnknownStrategy(String),
}

/// Shorthand result type for `lem-core`.
pub type LemResult<T> = Result<T, LemError>;
