//! The `Simulation` struct and its turn loop.

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use lem_colony::Tunnel;
use lem_core::{AgentId, RoomId, Turn};
use lem_paths::PathSet;

use crate::{
    AgentState, Assignment, Move, MoveLog, SimError, SimObserver, SimOutcome, SimResult,
    TurnRecord,
};

/// The movement simulator.
///
/// Holds the per-agent state for one run over a borrowed [`PathSet`].
/// Create via [`SimBuilder`][crate::SimBuilder], then call [`run`](Self::run)
/// or drive it turn by turn with [`step`](Self::step).
pub struct Simulation<'p> {
    pub(crate) paths:      &'p PathSet,
    pub(crate) end:        RoomId,
    pub(crate) assignment: Option<Assignment>,
    pub(crate) agents:     Vec<AgentState>,
    /// Agents not yet in the end room.
    pub(crate) running:    usize,
    pub(crate) turn:       Turn,
    pub(crate) max_turns:  Option<u64>,
    /// Tunnel keys claimed in the current turn.  Reused across turns.
    pub(crate) claimed:    FxHashSet<(RoomId, RoomId)>,
}

impl<'p> Simulation<'p> {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// State of every agent, indexed by `AgentId`.
    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// The last turn started.  `Turn::ZERO` before the first step.
    pub fn current_turn(&self) -> Turn {
        self.turn
    }

    pub fn running(&self) -> usize {
        self.running
    }

    pub fn is_drained(&self) -> bool {
        self.running == 0
    }

    /// Room `agent` currently occupies.
    pub fn room_of(&self, agent: AgentId) -> Option<RoomId> {
        let state = self.agents.get(agent.index())?;
        self.paths
            .get(state.path)
            .and_then(|p| p.rooms().get(state.position))
            .copied()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run turns until every agent has finished or a turn makes no move.
    ///
    /// Returns the turns that moved at least one agent.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<MoveLog> {
        if self.assignment.is_none() {
            debug!("empty path set, nothing to simulate");
            observer.on_sim_end(self.turn, SimOutcome::NoRoute);
            return Ok(MoveLog::no_route());
        }

        let mut turns = Vec::new();
        let outcome = loop {
            if self.running == 0 {
                break SimOutcome::Drained;
            }
            if let Some(max) = self.max_turns {
                if self.turn.0 >= max {
                    return Err(SimError::TurnLimit(max));
                }
            }

            let record = self.step(observer);
            if record.moves.is_empty() {
                warn!(turn = record.turn.0, running = self.running, "no agent could move, stopping");
                break SimOutcome::Stalled { turn: record.turn };
            }
            turns.push(record);
        };

        debug!(
            turns = turns.len(),
            agents = self.agents.len(),
            ?outcome,
            "simulation finished"
        );
        observer.on_sim_end(self.turn, outcome);
        Ok(MoveLog { turns, outcome })
    }

    /// Advance exactly one turn and return its moves.
    ///
    /// Agents are resolved in ascending id order.  Each running agent claims
    /// the tunnel to its next room if no lower-id agent has claimed that
    /// tunnel (in either direction) this turn; otherwise it stays put.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TurnRecord {
        self.turn = self.turn.next();
        let turn = self.turn;
        observer.on_turn_start(turn);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let paths   = self.paths;
        let end     = self.end;
        let claimed = &mut self.claimed;
        let running = &mut self.running;
        claimed.clear();

        let mut moves = Vec::new();
        for (i, state) in self.agents.iter_mut().enumerate() {
            if state.is_finished() {
                continue;
            }
            let Some(rooms) = paths.get(state.path).map(|p| p.rooms()) else {
                continue;
            };
            let (Some(&current), Some(&next)) =
                (rooms.get(state.position), rooms.get(state.position + 1))
            else {
                continue;
            };

            let key = Tunnel { a: current, b: next }.key();
            if !claimed.insert(key) {
                trace!(agent = i + 1, turn = turn.0, "tunnel busy, waiting");
                continue;
            }

            let agent = AgentId(i as u32);
            let mv = Move { agent, room: next };
            state.position += 1;
            observer.on_move(turn, &mv);
            moves.push(mv);

            if next == end {
                state.finished_at = Some(turn);
                *running -= 1;
                observer.on_agent_finished(agent, turn);
            }
        }

        trace!(turn = turn.0, moves = moves.len(), "turn resolved");
        observer.on_turn_end(turn, &moves);
        TurnRecord { turn, moves }
    }
}
