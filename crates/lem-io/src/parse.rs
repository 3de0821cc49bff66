//! Colony text loader.
//!
//! # Format
//!
//! ```text
//! 3
//! ##start
//! start 1 6
//! ##end
//! end 7 6
//! mid 4 6
//! start-mid
//! mid-end
//! ```
//!
//! | Line                | Meaning                                               |
//! |---------------------|-------------------------------------------------------|
//! | first meaningful    | agent count, a positive integer                       |
//! | `##start` / `##end` | the next line declares the start / end room           |
//! | other `#…`          | comment                                               |
//! | `name x y`          | room with integer coordinates                         |
//! | `a-b`               | tunnel between two declared rooms                     |
//!
//! Blank lines are ignored.  Room names may not begin with `L` or `#` and may
//! not contain `-`.  A tunnel repeating an earlier one (in either direction)
//! is skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use tracing::debug;

use lem_colony::{Colony, ColonyBuilder, ColonyError};
use lem_core::{Coord, RoomId};

use crate::{ParseError, ParseResult};

const START_MARKER: &str = "##start";
const END_MARKER: &str = "##end";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a colony from a text file.
pub fn parse_colony_file(path: &Path) -> ParseResult<Colony> {
    let file = File::open(path)?;
    parse_colony_reader(BufReader::new(file))
}

/// Like [`parse_colony_file`] but accepts any buffered reader.
pub fn parse_colony_reader<R: BufRead>(reader: R) -> ParseResult<Colony> {
    let mut parser = Parser::default();
    for (i, line) in reader.lines().enumerate() {
        parser.line(i + 1, &line?)?;
    }
    parser.finish()
}

/// Parse a colony held in memory.
pub fn parse_colony_str(text: &str) -> ParseResult<Colony> {
    parse_colony_reader(Cursor::new(text))
}

// ── Line-by-line state machine ────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

impl Marker {
    fn name(self) -> &'static str {
        match self {
            Marker::Start => START_MARKER,
            Marker::End => END_MARKER,
        }
    }
}

#[derive(Default)]
struct Parser {
    builder:   Option<ColonyBuilder>,
    /// Marker seen on the previous line, with its line number.
    pending:   Option<(Marker, usize)>,
    has_start: bool,
    has_end:   bool,
    last_line: usize,
}

impl Parser {
    fn line(&mut self, no: usize, raw: &str) -> ParseResult<()> {
        self.last_line = no;
        let text = raw.trim();

        let Some(builder) = self.builder.as_mut() else {
            if text.is_empty() || (text.starts_with('#') && !is_marker(text)) {
                return Ok(());
            }
            let count = text
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ParseError::InvalidAgentCount { line: no, text: text.to_owned() })?;
            self.builder = Some(ColonyBuilder::new(count));
            return Ok(());
        };

        // The line right after a marker must be a room.
        if let Some((marker, at)) = self.pending.take() {
            if text.is_empty() || text.starts_with('#') || !text.contains(char::is_whitespace) {
                return Err(ParseError::MarkerWithoutRoom { line: at, marker: marker.name() });
            }
            let room = add_room(builder, no, text)?;
            match marker {
                Marker::Start => builder.set_start(room),
                Marker::End => builder.set_end(room),
            }
            return Ok(());
        }

        if text.is_empty() {
            return Ok(());
        }
        if is_marker(text) {
            let marker = if text == START_MARKER { Marker::Start } else { Marker::End };
            let seen = match marker {
                Marker::Start => &mut self.has_start,
                Marker::End => &mut self.has_end,
            };
            if *seen {
                return Err(ParseError::RepeatedMarker { line: no, marker: marker.name() });
            }
            *seen = true;
            self.pending = Some((marker, no));
            return Ok(());
        }
        if text.starts_with('#') {
            return Ok(());
        }
        if text.contains(char::is_whitespace) {
            add_room(builder, no, text)?;
            return Ok(());
        }
        if text.contains('-') {
            return add_tunnel(builder, no, text);
        }
        Err(ParseError::UnrecognisedLine { line: no, text: text.to_owned() })
    }

    fn finish(self) -> ParseResult<Colony> {
        if let Some((marker, at)) = self.pending {
            return Err(ParseError::MarkerWithoutRoom { line: at, marker: marker.name() });
        }
        let builder = self.builder.ok_or(ParseError::MissingAgentCount)?;
        debug!(
            lines = self.last_line,
            rooms = builder.room_count(),
            tunnels = builder.tunnel_count(),
            "colony parsed"
        );
        builder.build().map_err(|e| match e {
            ColonyError::MissingStart => ParseError::MissingStart,
            ColonyError::MissingEnd => ParseError::MissingEnd,
            other => ParseError::Colony(other),
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn is_marker(text: &str) -> bool {
    text == START_MARKER || text == END_MARKER
}

fn valid_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('L') && !name.starts_with('#') && !name.contains('-')
}

fn add_room(builder: &mut ColonyBuilder, no: usize, text: &str) -> ParseResult<RoomId> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[name, x, y] = &fields[..] else {
        return Err(ParseError::MalformedRoom { line: no, text: text.to_owned() });
    };
    if !valid_name(name) {
        return Err(ParseError::InvalidRoomName { line: no, name: name.to_owned() });
    }
    let coord = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| ParseError::BadCoordinate { line: no, text: s.to_owned() })
    };
    let coord = Coord::new(coord(x)?, coord(y)?);

    builder.add_room(name, coord).map_err(|e| match e {
        ColonyError::DuplicateRoom(name) => ParseError::DuplicateRoom { line: no, name },
        other => ParseError::Colony(other),
    })
}

fn add_tunnel(builder: &mut ColonyBuilder, no: usize, text: &str) -> ParseResult<()> {
    let mut parts = text.split('-');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MalformedTunnel { line: no, text: text.to_owned() });
    };
    if a.is_empty() || b.is_empty() {
        return Err(ParseError::MalformedTunnel { line: no, text: text.to_owned() });
    }

    builder.add_tunnel(a, b).map_err(|e| match e {
        ColonyError::UnknownRoom(name) => ParseError::UnknownRoom { line: no, name },
        ColonyError::SelfLoop(name) => ParseError::SelfLoop { line: no, name },
        other => ParseError::Colony(other),
    })?;
    Ok(())
}
