//! Per-agent movement state.

use lem_core::Turn;

/// Where one agent is on its assigned path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentState {
    /// Index into the path set.
    pub path: usize,

    /// Index into the path's rooms; 0 is the start room.  Never decreases.
    pub position: usize,

    /// Turn on which the agent entered the end room.  `Some(Turn::ZERO)` for
    /// an agent whose path is the zero-length `[start]` path.
    pub finished_at: Option<Turn>,
}

impl AgentState {
    /// An agent waiting at the start of `path`.
    #[inline]
    pub fn at_start(path: usize) -> Self {
        Self { path, position: 0, finished_at: None }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}
