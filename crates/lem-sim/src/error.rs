use lem_core::LemError;
use lem_paths::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("agent count must be positive")]
    NoAgents,

    #[error("path {index} does not run from the shared start room to the end room")]
    PathEndpoint { index: usize },

    #[error("simulation did not drain within {0} turns")]
    TurnLimit(u64),

    #[error("path selection failed: {0}")]
    Paths(#[from] PathError),

    #[error(transparent)]
    Config(#[from] LemError),
}

pub type SimResult<T> = Result<T, SimError>;
