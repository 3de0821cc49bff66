//! Fluent builder for constructing a [`Simulation`].

use rustc_hash::FxHashSet;

use lem_core::{RoomId, Turn};
use lem_paths::PathSet;

use crate::{AgentState, Assignment, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - the [`PathSet`] chosen by the selector
/// - the agent count
/// - the end room
///
/// # Optional inputs
///
/// | Method           | Default   |
/// |------------------|-----------|
/// | `.max_turns(n)`  | unlimited |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&path_set, 4, colony.end()).build()?;
/// let log = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'p> {
    paths:       &'p PathSet,
    agent_count: u32,
    end:         RoomId,
    max_turns:   Option<u64>,
}

impl<'p> SimBuilder<'p> {
    pub fn new(paths: &'p PathSet, agent_count: u32, end: RoomId) -> Self {
        Self { paths, agent_count, end, max_turns: None }
    }

    /// Fail with [`SimError::TurnLimit`] if the loop has not drained after
    /// `max_turns` turns.
    pub fn max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Validate the path set, deal agents onto paths, and return a
    /// ready-to-run [`Simulation`].
    ///
    /// An empty path set is accepted; the run then records no turns.
    pub fn build(self) -> SimResult<Simulation<'p>> {
        if self.agent_count == 0 {
            return Err(SimError::NoAgents);
        }

        // ── Validate endpoints ────────────────────────────────────────────
        let start = self.paths.first().and_then(|p| p.first());
        for (index, path) in self.paths.iter().enumerate() {
            if path.first() != start || path.last() != Some(self.end) {
                return Err(SimError::PathEndpoint { index });
            }
        }

        // ── Deal agents ───────────────────────────────────────────────────
        let assignment = Assignment::round_robin(self.paths.len(), self.agent_count);
        let agents: Vec<AgentState> = match &assignment {
            None => Vec::new(),
            Some(a) => a
                .as_slice()
                .iter()
                .map(|&path| {
                    let mut state = AgentState::at_start(path);
                    if self.paths.as_slice()[path].len() == 1 {
                        state.finished_at = Some(Turn::ZERO);
                    }
                    state
                })
                .collect(),
        };
        let running = agents.iter().filter(|a| !a.is_finished()).count();

        Ok(Simulation {
            paths: self.paths,
            end: self.end,
            assignment,
            agents,
            running,
            turn: Turn::ZERO,
            max_turns: self.max_turns,
            claimed: FxHashSet::default(),
        })
    }
}
