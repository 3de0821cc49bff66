//! Exhaustive depth-first enumeration of simple start→end paths.
//!
//! # Search state
//!
//! One [`SearchState`] per search holds the "on current path" markers and
//! the path buffer.  The search runs on an explicit frame stack, one
//! `(room, neighbour cursor)` frame per room on the buffer, so corridor
//! length is bounded by heap rather than thread stack.  Entering a room
//! pushes it and marks it; exhausting its neighbours pops and unmarks it, so
//! sibling branches may revisit rooms used only on earlier branches.
//!
//! Reaching `end` records a copy of the buffer and does not continue past
//! `end`, so `end` only ever appears as the last room.

use std::ops::ControlFlow;

use tracing::debug;

use lem_colony::Colony;
use lem_core::RoomId;

use crate::Path;

/// Tuning knobs for [`enumerate_paths_with`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Stop after this many paths.  `None` enumerates every simple path.
    pub max_paths: Option<usize>,
}

/// Every simple path from `colony.start()` to `colony.end()`, in discovery
/// order.
///
/// Discovery order follows tunnel declaration order at each room.  An empty
/// result means `end` is unreachable.  When start and end are the same room
/// the result is the single zero-length path `[start]`.
pub fn enumerate_paths(colony: &Colony) -> Vec<Path> {
    enumerate_paths_with(colony, EnumerateOptions::default())
}

/// [`enumerate_paths`] with an optional cap on the number of paths.
pub fn enumerate_paths_with(colony: &Colony, opts: EnumerateOptions) -> Vec<Path> {
    let limit = opts.max_paths.unwrap_or(usize::MAX);
    if limit == 0 {
        return Vec::new();
    }

    #[cfg(not(feature = "parallel"))]
    let paths = enumerate_sequential(colony, limit);

    #[cfg(feature = "parallel")]
    let paths = enumerate_parallel(colony, limit);

    debug!(
        paths = paths.len(),
        capped = paths.len() >= limit,
        "enumerated simple paths"
    );
    paths
}

// ── Search internals ──────────────────────────────────────────────────────────

struct SearchState {
    on_path: Vec<bool>,
    buf:     Vec<RoomId>,
}

impl SearchState {
    fn new(room_count: usize) -> Self {
        Self {
            on_path: vec![false; room_count],
            buf:     Vec::new(),
        }
    }

    #[inline]
    fn is_marked(&self, room: RoomId) -> bool {
        self.on_path.get(room.index()).copied().unwrap_or(true)
    }

    #[inline]
    fn set_mark(&mut self, room: RoomId, marked: bool) {
        if let Some(m) = self.on_path.get_mut(room.index()) {
            *m = marked;
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn enumerate_sequential(colony: &Colony, limit: usize) -> Vec<Path> {
    let mut state = SearchState::new(colony.room_count());
    let mut out = Vec::new();
    _ = dfs(colony, colony.start(), &mut state, limit, &mut out);
    out
}

/// Split at the start room: each first hop is an independent subtree with
/// its own `SearchState`.  Concatenating in first-hop order reproduces the
/// sequential discovery order exactly.
#[cfg(feature = "parallel")]
fn enumerate_parallel(colony: &Colony, limit: usize) -> Vec<Path> {
    use rayon::prelude::*;

    let start = colony.start();
    if start == colony.end() {
        return vec![Path::new(vec![start])];
    }

    let first_hops: Vec<RoomId> = colony.neighbors(start).map(|(_, r)| r).collect();
    let branches: Vec<Vec<Path>> = first_hops
        .par_iter()
        .map(|&hop| {
            let mut state = SearchState::new(colony.room_count());
            state.buf.push(start);
            state.set_mark(start, true);
            let mut out = Vec::new();
            _ = dfs(colony, hop, &mut state, limit, &mut out);
            out
        })
        .collect();

    let mut paths: Vec<Path> = branches.into_iter().flatten().collect();
    paths.truncate(limit);
    paths
}

/// Enumerate every simple path that extends the buffer through `root`.
/// Breaks once `out` holds `limit` paths; the state is restored to its
/// pre-call shape on both exits.
fn dfs(
    colony: &Colony,
    root:   RoomId,
    state:  &mut SearchState,
    limit:  usize,
    out:    &mut Vec<Path>,
) -> ControlFlow<()> {
    let end = colony.end();
    let base = state.buf.len();

    state.buf.push(root);
    if root == end {
        out.push(Path::new(state.buf.clone()));
        state.buf.truncate(base);
        return if out.len() >= limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        };
    }
    state.set_mark(root, true);

    // (room, index of the next neighbour to try)
    let mut frames: Vec<(RoomId, usize)> = vec![(root, 0)];
    while let Some(frame) = frames.last_mut() {
        let room = frame.0;
        let Some(&next) = colony.adjacent_rooms(room).get(frame.1) else {
            frames.pop();
            state.set_mark(room, false);
            state.buf.pop();
            continue;
        };
        frame.1 += 1;

        if state.is_marked(next) {
            continue;
        }
        if next == end {
            state.buf.push(next);
            out.push(Path::new(state.buf.clone()));
            state.buf.pop();
            if out.len() >= limit {
                for (r, _) in frames.drain(..) {
                    state.set_mark(r, false);
                }
                state.buf.truncate(base);
                return ControlFlow::Break(());
            }
            continue;
        }

        state.buf.push(next);
        state.set_mark(next, true);
        frames.push((next, 0));
    }
    ControlFlow::Continue(())
}
