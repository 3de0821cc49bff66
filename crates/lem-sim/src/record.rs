//! Movement log types.

use lem_core::{AgentId, RoomId, Turn};

/// One agent entering one room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub agent: AgentId,
    pub room:  RoomId,
}

/// Every move made in one turn, in ascending agent order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn:  Turn,
    pub moves: Vec<Move>,
}

/// Why the turn loop stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimOutcome {
    /// Every agent reached the end room.
    Drained,
    /// A turn produced no move while agents were still running.
    Stalled { turn: Turn },
    /// The path set was empty; nobody could move.
    NoRoute,
}

/// The full result of a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveLog {
    pub turns:   Vec<TurnRecord>,
    pub outcome: SimOutcome,
}

impl MoveLog {
    pub fn no_route() -> Self {
        Self { turns: Vec::new(), outcome: SimOutcome::NoRoute }
    }

    /// Number of turns that moved at least one agent.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn move_count(&self) -> usize {
        self.turns.iter().map(|t| t.moves.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
