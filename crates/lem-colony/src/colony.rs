//! Colony representation and builder.
//!
//! # Data layout
//!
//! Rooms are interned: each gets a sequential [`RoomId`] in declaration order
//! and the name lookup goes through one `FxHashMap`.  Adjacency is stored in
//! **Compressed Sparse Row (CSR)** form.  Given a `RoomId r`, its neighbours
//! occupy the slice:
//!
//! ```text
//! adj_room[ room_adj_start[r] .. room_adj_start[r+1] ]
//! ```
//!
//! Every undirected tunnel contributes one entry to each endpoint's slice.
//! Within a slice, entries keep tunnel declaration order, so a depth-first
//! search over `neighbors()` visits branches in exactly the order the tunnels
//! were listed.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use lem_core::{Coord, RoomId, TunnelId};

use crate::{ColonyError, ColonyResult};

// ── Room / Tunnel ─────────────────────────────────────────────────────────────

/// A named graph node.  The name is the unique, case-sensitive identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name:  String,
    pub coord: Coord,
}

/// An undirected edge between two distinct rooms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tunnel {
    pub a: RoomId,
    pub b: RoomId,
}

impl Tunnel {
    /// Order-independent key: both directions of a tunnel map to one value.
    #[inline]
    pub fn key(self) -> (RoomId, RoomId) {
        if self.a <= self.b { (self.a, self.b) } else { (self.b, self.a) }
    }
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// The full routing problem: graph, start and end rooms, and agent count.
///
/// Immutable once built.  Construct with [`ColonyBuilder`].
#[derive(Clone, Debug)]
pub struct Colony {
    agent_count: u32,
    start:       RoomId,
    end:         RoomId,

    /// Room data, indexed by `RoomId`.
    rooms:   Vec<Room>,
    by_name: FxHashMap<String, RoomId>,

    /// Tunnels in declaration order, indexed by `TunnelId`.
    tunnels: Vec<Tunnel>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Length = `room_count + 1`.
    room_adj_start: Vec<u32>,
    adj_room:       Vec<RoomId>,
    adj_tunnel:     Vec<TunnelId>,
}

impl Colony {
    pub fn agent_count(&self) -> u32 {
        self.agent_count
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn end(&self) -> RoomId {
        self.end
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnels.len()
    }

    /// `None` if `id` is out of range.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Name of `id`, or `"?"` for an id that does not belong to this colony.
    pub fn name(&self, id: RoomId) -> &str {
        self.room(id).map_or("?", |r| r.name.as_str())
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// All rooms in declaration order, with their ids.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (RoomId(i as u32), r))
    }

    /// All tunnels in declaration order.
    pub fn tunnels(&self) -> &[Tunnel] {
        &self.tunnels
    }

    /// Neighbours of `room` as `(tunnel, other_room)` pairs in tunnel
    /// declaration order.  Empty for an unknown room.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = (TunnelId, RoomId)> + '_ {
        let (lo, hi) = self.adj_range(room);
        self.adj_tunnel[lo..hi]
            .iter()
            .copied()
            .zip(self.adj_room[lo..hi].iter().copied())
    }

    /// Rooms adjacent to `room`, in tunnel declaration order.  Empty for an
    /// unknown room.
    #[inline]
    pub fn adjacent_rooms(&self, room: RoomId) -> &[RoomId] {
        let (lo, hi) = self.adj_range(room);
        &self.adj_room[lo..hi]
    }

    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        let (lo, hi) = self.adj_range(room);
        hi - lo
    }

    /// `true` if a tunnel joins `a` and `b` (in either direction).
    pub fn connected(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).any(|(_, r)| r == b)
    }

    #[inline]
    fn adj_range(&self, room: RoomId) -> (usize, usize) {
        match (
            self.room_adj_start.get(room.index()),
            self.room_adj_start.get(room.index() + 1),
        ) {
            (Some(&lo), Some(&hi)) => (lo as usize, hi as usize),
            _ => (0, 0),
        }
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// Rooms must be added before the tunnels that reference them.  Duplicate
/// tunnels (in either direction) are skipped with a warning so that the path
/// enumerator never reports the same route twice.
///
/// # Example
///
/// ```
/// use lem_colony::ColonyBuilder;
/// use lem_core::Coord;
///
/// let mut b = ColonyBuilder::new(3);
/// let s = b.add_room("start", Coord::new(0, 0)).unwrap();
/// let e = b.add_room("end", Coord::new(1, 0)).unwrap();
/// b.set_start(s);
/// b.set_end(e);
/// b.add_tunnel("start", "end").unwrap();
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 2);
/// assert_eq!(colony.tunnel_count(), 1);
/// ```
pub struct ColonyBuilder {
    agent_count: u32,
    start:       Option<RoomId>,
    end:         Option<RoomId>,
    rooms:       Vec<Room>,
    by_name:     FxHashMap<String, RoomId>,
    tunnels:     Vec<Tunnel>,
    seen:        FxHashSet<(RoomId, RoomId)>,
}

impl ColonyBuilder {
    pub fn new(agent_count: u32) -> Self {
        Self {
            agent_count,
            start:   None,
            end:     None,
            rooms:   Vec::new(),
            by_name: FxHashMap::default(),
            tunnels: Vec::new(),
            seen:    FxHashSet::default(),
        }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: &str, coord: Coord) -> ColonyResult<RoomId> {
        if self.by_name.contains_key(name) {
            return Err(ColonyError::DuplicateRoom(name.to_owned()));
        }
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room { name: name.to_owned(), coord });
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn set_start(&mut self, room: RoomId) {
        self.start = Some(room);
    }

    pub fn set_end(&mut self, room: RoomId) {
        self.end = Some(room);
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Add an undirected tunnel between two previously added rooms.
    ///
    /// Returns `Ok(None)` if the tunnel duplicates an earlier one.
    pub fn add_tunnel(&mut self, a: &str, b: &str) -> ColonyResult<Option<TunnelId>> {
        let ra = self.room_id(a).ok_or_else(|| ColonyError::UnknownRoom(a.to_owned()))?;
        let rb = self.room_id(b).ok_or_else(|| ColonyError::UnknownRoom(b.to_owned()))?;
        if ra == rb {
            return Err(ColonyError::SelfLoop(a.to_owned()));
        }
        let tunnel = Tunnel { a: ra, b: rb };
        if !self.seen.insert(tunnel.key()) {
            warn!(a, b, "duplicate tunnel ignored");
            return Ok(None);
        }
        let id = TunnelId(self.tunnels.len() as u32);
        self.tunnels.push(tunnel);
        Ok(Some(id))
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnels.len() }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// `start == end` is accepted; the path enumerator treats it as a single
    /// zero-length path.
    pub fn build(self) -> ColonyResult<Colony> {
        if self.agent_count == 0 {
            return Err(ColonyError::NoAgents);
        }
        let start = self.start.ok_or(ColonyError::MissingStart)?;
        let end   = self.end.ok_or(ColonyError::MissingEnd)?;

        let room_count = self.rooms.len();

        // Directed half-edges in tunnel order; the stable sort below keeps
        // that order within each room's slice.
        let mut half: Vec<(RoomId, RoomId, TunnelId)> = Vec::with_capacity(self.tunnels.len() * 2);
        for (i, t) in self.tunnels.iter().enumerate() {
            let id = TunnelId(i as u32);
            half.push((t.a, t.b, id));
            half.push((t.b, t.a, id));
        }
        half.sort_by_key(|&(from, _, _)| from.0);

        let mut room_adj_start = vec![0u32; room_count + 1];
        for &(from, _, _) in &half {
            room_adj_start[from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            room_adj_start[i] += room_adj_start[i - 1];
        }
        debug_assert_eq!(room_adj_start[room_count] as usize, half.len());

        let adj_room   = half.iter().map(|&(_, to, _)| to).collect();
        let adj_tunnel = half.iter().map(|&(_, _, t)| t).collect();

        Ok(Colony {
            agent_count: self.agent_count,
            start,
            end,
            rooms: self.rooms,
            by_name: self.by_name,
            tunnels: self.tunnels,
            room_adj_start,
            adj_room,
            adj_tunnel,
        })
    }
}
