//! Solver configuration.

use std::fmt;
use std::str::FromStr;

use crate::{LemError, LemResult};

// ── SelectionStrategy ─────────────────────────────────────────────────────────

/// How the path selector scores candidate subsets of disjoint paths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectionStrategy {
    /// Largest number of interior-disjoint paths; path length is ignored.
    #[default]
    MaxPaths,
    /// Fewest estimated turns for the configured agent count.
    MinTurns,
}

impl SelectionStrategy {
    pub fn name(self) -> &'static str {
        match self {
            SelectionStrategy::MaxPaths => "max-paths",
            SelectionStrategy::MinTurns => "min-turns",
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = LemError;

    fn from_str(s: &str) -> LemResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max-paths" | "max_paths" | "maxpaths" => Ok(SelectionStrategy::MaxPaths),
            "min-turns" | "min_turns" | "minturns" => Ok(SelectionStrategy::MinTurns),
            other => Err(LemError::UnknownStrategy(other.to_owned())),
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── SolverConfig ──────────────────────────────────────────────────────────────

/// Top-level solver configuration.
///
/// The defaults reproduce the classic behaviour: exhaustive enumeration,
/// maximum-cardinality selection, and a turn loop that runs until drained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Stop enumerating after this many simple paths.  The subset search is
    /// exponential in the candidate count, so this is the latency knob for
    /// large colonies.  `None` enumerates every simple path.
    pub max_paths: Option<usize>,

    /// Abort the simulation if it has not drained after this many turns.
    pub max_turns: Option<u64>,

    /// Scoring used by the subset search.
    pub strategy: SelectionStrategy,
}

impl SolverConfig {
    /// Reject caps of zero, which would make every run trivially empty.
    pub fn validate(&self) -> LemResult<()> {
        if self.max_paths == Some(0) {
            return Err(LemError::Config("max_paths must be at least 1".into()));
        }
        if self.max_turns == Some(0) {
            return Err(LemError::Config("max_turns must be at least 1".into()));
        }
        Ok(())
    }
}
