//! `TurnPrinter<W>` — streams the move log as the simulation runs.

use std::io::Write;

use lem_colony::Colony;
use lem_core::Turn;
use lem_sim::{Move, SimObserver, SimOutcome};

use crate::render::render_turn;
use crate::OutputError;

/// A [`SimObserver`] that writes each turn's line to `out` as the turn ends.
///
/// Turns with no move print nothing.  Write errors are stored internally
/// because `SimObserver` methods have no return value; after `run` returns,
/// check with [`take_error`][Self::take_error].
pub struct TurnPrinter<'c, W: Write> {
    colony:     &'c Colony,
    out:        W,
    lines:      usize,
    last_error: Option<OutputError>,
}

impl<'c, W: Write> TurnPrinter<'c, W> {
    pub fn new(colony: &'c Colony, out: W) -> Self {
        Self { colony, out, lines: 0, last_error: None }
    }

    /// Number of turn lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Take the stored write error (if any) after the simulation returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> SimObserver for TurnPrinter<'_, W> {
    fn on_turn_end(&mut self, _turn: Turn, moves: &[Move]) {
        if moves.is_empty() || self.last_error.is_some() {
            return;
        }
        let line = render_turn(self.colony, moves);
        let result = writeln!(self.out, "{line}");
        if result.is_ok() {
            self.lines += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_turn: Turn, _outcome: SimOutcome) {
        let result = self.out.flush();
        self.store_err(result);
    }
}
