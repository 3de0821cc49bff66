//! `lem-core` — foundational types for the lem-in colony router.
//!
//! This crate is a dependency of every other `lem-*` crate.  It has no
//! `lem-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `RoomId`, `TunnelId`                       |
//! | [`coord`]   | `Coord` — integer 2-D room position                   |
//! | [`turn`]    | `Turn` counter                                        |
//! | [`config`]  | `SolverConfig`, `SelectionStrategy`                   |
//! | [`error`]   | `LemError`, `LemResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SelectionStrategy, SolverConfig};
pub use coord::Coord;
pub use error::{LemError, LemResult};
pub use ids::{AgentId, RoomId, TunnelId};
pub use turn::Turn;
