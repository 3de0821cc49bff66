//! `lem-colony` — the colony graph: rooms, tunnels, and adjacency.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`colony`] | `Room`, `Tunnel`, `Colony` (CSR adjacency), `ColonyBuilder` |
//! | [`error`]  | `ColonyError`, `ColonyResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Room` and `Tunnel`.    |

pub mod colony;
pub mod error;


pub use colony::{Colony, ColonyBuilder, Room, Tunnel};
pub use error::{ColonyError, ColonyResult};
