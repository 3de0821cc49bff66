//! Path and path-set types.

use std::fmt;

use lem_colony::Colony;
use lem_core::RoomId;

use crate::{PathError, PathResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A simple route of rooms from start to end.
///
/// Produced once by the enumerator and read-only afterwards.  A single-room
/// path is the zero-length route of a colony whose start is its end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, endpoints included.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of tunnels traversed.
    pub fn edges(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<RoomId> {
        self.rooms.first().copied()
    }

    pub fn last(&self) -> Option<RoomId> {
        self.rooms.last().copied()
    }

    /// All rooms except the first and last.
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0..=2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    /// `true` if no room appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen: Vec<RoomId> = self.rooms.clone();
        seen.sort_unstable();
        seen.windows(2).all(|w| w[0] != w[1])
    }

    /// `true` if the two paths have an interior room in common.  Shared
    /// endpoints never count.
    pub fn shares_interior(&self, other: &Path) -> bool {
        let (small, large) = if self.interior().len() <= other.interior().len() {
            (self.interior(), other.interior())
        } else {
            (other.interior(), self.interior())
        };
        small.iter().any(|r| large.contains(r))
    }

    /// Render with room names, e.g. `[start a b end]`.
    pub fn display<'a>(&'a self, colony: &'a Colony) -> PathDisplay<'a> {
        PathDisplay { path: self, colony }
    }
}

/// Helper returned by [`Path::display`].
pub struct PathDisplay<'a> {
    path:   &'a Path,
    colony: &'a Colony,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &room) in self.path.rooms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(self.colony.name(room))?;
        }
        f.write_str("]")
    }
}

// ── PathSet ───────────────────────────────────────────────────────────────────

/// An ordered collection of paths whose interiors are pairwise disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// Wrap `paths`, checking the disjointness invariant.
    pub fn new(paths: Vec<Path>) -> PathResult<Self> {
        for (i, p) in paths.iter().enumerate() {
            for (j, q) in paths.iter().enumerate().skip(i + 1) {
                if p.shares_interior(q) {
                    return Err(PathError::Overlap { first: i, second: j });
                }
            }
        }
        Ok(Self { paths })
    }

    /// Construct without re-checking; the caller guarantees disjointness.
    pub(crate) fn from_disjoint(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Path> {
        self.paths.get(i)
    }

    pub fn first(&self) -> Option<&Path> {
        self.paths.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.paths
    }

    /// Longest member, in rooms.  Zero for an empty set.
    pub fn max_len(&self) -> usize {
        self.paths.iter().map(Path::len).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
