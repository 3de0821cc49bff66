//! Error types for lem-io.

use thiserror::Error;

use lem_colony::ColonyError;

/// Rejections raised while reading a colony file.  Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no agent count found")]
    MissingAgentCount,

    #[error("line {line}: invalid number of agents {text:?}")]
    InvalidAgentCount { line: usize, text: String },

    #[error("line {line}: malformed room {text:?}")]
    MalformedRoom { line: usize, text: String },

    #[error("line {line}: invalid coordinate {text:?}")]
    BadCoordinate { line: usize, text: String },

    #[error("line {line}: invalid room name {name:?}")]
    InvalidRoomName { line: usize, name: String },

    #[error("line {line}: duplicate room {name:?}")]
    DuplicateRoom { line: usize, name: String },

    #[error("line {line}: malformed tunnel {text:?}")]
    MalformedTunnel { line: usize, text: String },

    #[error("line {line}: unknown room {name:?} in tunnel")]
    UnknownRoom { line: usize, name: String },

    #[error("line {line}: tunnel from {name:?} to itself")]
    SelfLoop { line: usize, name: String },

    #[error("line {line}: {marker} declared more than once")]
    RepeatedMarker { line: usize, marker: &'static str },

    #[error("line {line}: {marker} must be followed by a room")]
    MarkerWithoutRoom { line: usize, marker: &'static str },

    #[error("line {line}: unrecognised line {text:?}")]
    UnrecognisedLine { line: usize, text: String },

    #[error("no start room")]
    MissingStart,

    #[error("no end room")]
    MissingEnd,

    #[error(transparent)]
    Colony(ColonyError),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur when writing move output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
