//! `lem-io` — colony file parsing and move-log output for the lem-in router.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`parse`]    | `parse_colony_file`, `parse_colony_reader`, `parse_colony_str` |
//! | [`render`]   | `render_colony`, `render_turn`, `render_moves`, `render_paths` |
//! | [`observer`] | `TurnPrinter` — streams one line per turn to any `Write`   |
//! | [`csv`]      | `CsvMoveWriter` — `turn,agent,room` rows                   |
//! | [`error`]    | `ParseError`, `OutputError` and their result aliases       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_io::{TurnPrinter, parse_colony_file, render_colony};
//!
//! let colony = parse_colony_file(Path::new("maps/example00.txt"))?;
//! print!("{}\n", render_colony(&colony));
//! let mut printer = TurnPrinter::new(&colony, std::io::stdout().lock());
//! let solution = lem_sim::solve(&colony, &config, &mut printer)?;
//! if let Some(e) = printer.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod parse;
pub mod render;

#[cfg(test)]
mod tests;

pub use csv::CsvMoveWriter;
pub use error::{OutputError, OutputResult, ParseError, ParseResult};
pub use observer::TurnPrinter;
pub use parse::{parse_colony_file, parse_colony_reader, parse_colony_str};
pub use render::{render_colony, render_moves, render_paths, render_turn};
