//! `lem-sim` — turn-based movement simulator and the solve pipeline.
//!
//! # Turn loop
//!
//! ```text
//! assignment table built once (round-robin, last agent on path 0)
//! while agents are running:
//!   ① turn += 1; clear the per-turn tunnel claims
//!   ② for each running agent in ascending AgentId order:
//!        tunnel (current → next) unclaimed? claim it, move, maybe finish
//!        otherwise stall until next turn
//!   ③ no move this turn → stop (stalled); else record the turn
//! ```
//!
//! A tunnel carries at most one agent per turn in either direction; rooms
//! hold any number of agents.  Lower ids win tunnel contention.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`assignment`] | `Assignment` — fixed agent → path table                   |
//! | [`state`]      | `AgentState` — per-agent position on its path             |
//! | [`record`]     | `Move`, `TurnRecord`, `MoveLog`, `SimOutcome`             |
//! | [`observer`]   | `SimObserver` trait, `NoopObserver`                       |
//! | [`builder`]    | `SimBuilder`                                              |
//! | [`sim`]        | `Simulation` and its turn loop                            |
//! | [`solver`]     | `solve` — enumerate → select → simulate                   |
//! | [`error`]      | `SimError`, `SimResult<T>`                                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_core::SolverConfig;
//! use lem_sim::{NoopObserver, solve};
//!
//! let solution = solve(&colony, &SolverConfig::default(), &mut NoopObserver)?;
//! println!("{} turns", solution.log.turn_count());
//! ```

pub mod assignment;
pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod sim;
pub mod solver;
pub mod state;


pub use assignment::Assignment;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::{Move, MoveLog, SimOutcome, TurnRecord};
pub use sim::Simulation;
pub use solver::{Solution, solve};
pub use state::AgentState;
