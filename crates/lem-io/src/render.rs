//! Plain-text rendering of colonies, paths and move logs.

use lem_colony::Colony;
use lem_paths::Path;
use lem_sim::{Move, MoveLog};

/// The colony in canonical input form: agent count, rooms in declaration
/// order (with `##start` / `##end` before the marked rooms), then tunnels in
/// declaration order.  Every line ends with a newline.
pub fn render_colony(colony: &Colony) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", colony.agent_count()));
    for (id, room) in colony.rooms() {
        if id == colony.start() {
            out.push_str("##start\n");
        }
        if id == colony.end() {
            out.push_str("##end\n");
        }
        out.push_str(&format!("{} {}\n", room.name, room.coord));
    }
    for t in colony.tunnels() {
        out.push_str(&format!("{}-{}\n", colony.name(t.a), colony.name(t.b)));
    }
    out
}

/// One turn as space-joined `L<id>-<room>` tokens.
pub fn render_turn(colony: &Colony, moves: &[Move]) -> String {
    let mut out = String::new();
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{}-{}", mv.agent, colony.name(mv.room)));
    }
    out
}

/// One line per turn.  An empty log renders as the empty string.
pub fn render_moves(colony: &Colony, log: &MoveLog) -> String {
    let mut out = String::new();
    for record in &log.turns {
        out.push_str(&render_turn(colony, &record.moves));
        out.push('\n');
    }
    out
}

/// Numbered path listing under a heading, e.g. `Path 1: [start a end]`.
pub fn render_paths<'a, I>(colony: &Colony, heading: &str, paths: I) -> String
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut out = String::new();
    out.push_str(&format!("{heading}\n"));
    for (i, p) in paths.into_iter().enumerate() {
        out.push_str(&format!("Path {}: {}\n", i + 1, p.display(colony)));
    }
    out
}
