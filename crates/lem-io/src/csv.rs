//! CSV move export.
//!
//! One row per move:
//!
//! ```csv
//! turn,agent,room
//! 1,1,a
//! 2,1,end
//! 2,2,a
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use lem_colony::Colony;
use lem_sim::{MoveLog, TurnRecord};

use crate::OutputResult;

/// Writes move rows to a CSV sink.
pub struct CsvMoveWriter<W: Write> {
    rows:     Writer<W>,
    written:  u64,
    finished: bool,
}

impl CsvMoveWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvMoveWriter<W> {
    /// Wrap any writer and write the header row.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(["turn", "agent", "room"])?;
        Ok(Self { rows, written: 0, finished: false })
    }

    /// Append one row per move of `record`.
    pub fn write_turn(&mut self, colony: &Colony, record: &TurnRecord) -> OutputResult<()> {
        for mv in &record.moves {
            self.rows.write_record(&[
                record.turn.0.to_string(),
                mv.agent.label().to_string(),
                colony.name(mv.room).to_owned(),
            ])?;
            self.written += 1;
        }
        Ok(())
    }

    /// Append every turn of `log`.
    pub fn write_log(&mut self, colony: &Colony, log: &MoveLog) -> OutputResult<()> {
        for record in &log.turns {
            self.write_turn(colony, record)?;
        }
        Ok(())
    }

    /// Rows written so far, excluding the header.
    pub fn rows_written(&self) -> u64 {
        self.written
    }

    /// Flush the underlying writer.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }

    /// Flush and return the inner writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }
}
