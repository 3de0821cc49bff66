use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("paths {first} and {second} share an interior room")]
    Overlap { first: usize, second: usize },

    #[error("{got} candidate paths exceed the selector limit of {max}; cap enumeration with max_paths")]
    CandidateLimit { got: usize, max: usize },
}

pub type PathResult<T> = Result<T, PathError>;
