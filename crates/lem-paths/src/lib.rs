//! `lem-paths` — simple-path enumeration and disjoint path selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`path`]      | `Path`, `PathSet`                                          |
//! | [`enumerate`] | `enumerate_paths`, `enumerate_paths_with`, `EnumerateOptions` |
//! | [`conflict`]  | `ConflictMatrix` — pairwise interior-overlap bit matrix    |
//! | [`select`]    | `SubsetScorer` trait, `MaxCardinality`, `MinTurns`, `select_paths` |
//! | [`error`]     | `PathError`, `PathResult<T>`                               |
//!
//! # Pipeline
//!
//! ```text
//! Colony ──enumerate──▶ Vec<Path> ──select──▶ PathSet (≤ agent_count paths)
//! ```
//!
//! Enumeration is a depth-first search over every simple start→end path.
//! Selection sorts candidates by length and runs a backtracking search for
//! the best-scoring subset whose members share no interior room.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Enumerates the start room's branches on Rayon's pool.   |

pub mod conflict;
pub mod enumerate;
pub mod error;
pub mod path;
pub mod select;


pub use conflict::ConflictMatrix;
pub use enumerate::{EnumerateOptions, enumerate_paths, enumerate_paths_with};
pub use error::{PathError, PathResult};
pub use path::{Path, PathSet};
pub use select::{
    MAX_CANDIDATES, MaxCardinality, MinTurns, SubsetScorer, estimate_turns, select_paths,
    select_with_strategy,
};
