//! Simulation observer trait for progress reporting and streaming output.

use lem_core::{AgentId, Turn};

use crate::{Move, SimOutcome};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the turn loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — streaming printer
///
/// ```rust,ignore
/// struct LinePrinter;
///
/// impl SimObserver for LinePrinter {
///     fn on_turn_end(&mut self, _turn: Turn, moves: &[Move]) {
///         println!("{} moves", moves.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each turn, before any agent moves.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called for each move as it is resolved.
    fn on_move(&mut self, _turn: Turn, _mv: &Move) {}

    /// Called when `agent` enters the end room.
    fn on_agent_finished(&mut self, _agent: AgentId, _turn: Turn) {}

    /// Called at the end of each turn with that turn's moves (possibly none).
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move]) {}

    /// Called once after the loop stops.
    fn on_sim_end(&mut self, _final_turn: Turn, _outcome: SimOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
