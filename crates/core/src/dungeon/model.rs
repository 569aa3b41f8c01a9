//! Room and graph data model shared by the builder, layout, and connector planning.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::GenerationError;
use crate::rng::RandomSource;

/// Dense 0-based room index. Room `0` is the entrance, room `len - 1` the exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl RoomId {
    pub const ENTRANCE: RoomId = RoomId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Entrance,
    Combat,
    Event,
    Treasure,
    Exit,
}

/// Types an interior room may be drawn from. Entrance and exit only ever sit at the ends.
pub const INTERIOR_ROOM_TYPES: [RoomType; 3] =
    [RoomType::Combat, RoomType::Event, RoomType::Treasure];

impl RoomType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Entrance => "Entrance",
            Self::Combat => "Combat",
            Self::Event => "Event",
            Self::Treasure => "Treasure",
            Self::Exit => "Exit",
        }
    }

    pub fn is_interior(self) -> bool {
        INTERIOR_ROOM_TYPES.contains(&self)
    }

    fn code(self) -> u8 {
        match self {
            Self::Entrance => 0,
            Self::Combat => 1,
            Self::Event => 2,
            Self::Treasure => 3,
            Self::Exit => 4,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    id: RoomId,
    room_type: RoomType,
    incoming: BTreeSet<RoomId>,
    outgoing: BTreeSet<RoomId>,
}

impl Room {
    fn new(id: RoomId, room_type: RoomType) -> Self {
        Self { id, room_type, incoming: BTreeSet::new(), outgoing: BTreeSet::new() }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Rooms with an edge into this one.
    pub fn incoming(&self) -> &BTreeSet<RoomId> {
        &self.incoming
    }

    /// Rooms this one has an edge to.
    pub fn outgoing(&self) -> &BTreeSet<RoomId> {
        &self.outgoing
    }
}

/// Directed room graph. Every edge `a -> b` is stored as `b` in `a.outgoing` and `a` in
/// `b.incoming`; [`DungeonGraph::try_connect`] is the only way to add one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DungeonGraph {
    rooms: Vec<Room>,
}

impl DungeonGraph {
    /// Create `room_count` unconnected rooms: entrance first, exit last, and interior
    /// types drawn uniformly from [`INTERIOR_ROOM_TYPES`].
    pub fn new(
        room_count: usize,
        rng: &mut impl RandomSource,
    ) -> Result<Self, GenerationError> {
        if room_count <= 1 {
            return Err(GenerationError::invalid_argument(
                "room_count",
                format!("must be at least 2 to hold an entrance and an exit, got {room_count}"),
            ));
        }

        let exit = room_count - 1;
        let rooms = (0..room_count)
            .map(|index| {
                let room_type = if index == 0 {
                    RoomType::Entrance
                } else if index == exit {
                    RoomType::Exit
                } else {
                    INTERIOR_ROOM_TYPES[rng.pick_index(INTERIOR_ROOM_TYPES.len())]
                };
                Room::new(RoomId(index), room_type)
            })
            .collect();

        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn entrance(&self) -> &Room {
        &self.rooms[0]
    }

    pub fn exit(&self) -> &Room {
        &self.rooms[self.rooms.len() - 1]
    }

    /// Add `from -> to` unless it is a self loop, a duplicate, out of range, or would push
    /// `from`'s outgoing or `to`'s incoming degree past `max_connections`.
    pub fn try_connect(&mut self, from: RoomId, to: RoomId, max_connections: usize) -> bool {
        if from == to || from.0 >= self.rooms.len() || to.0 >= self.rooms.len() {
            return false;
        }
        if self.rooms[from.0].outgoing.len() >= max_connections
            || self.rooms[to.0].incoming.len() >= max_connections
        {
            return false;
        }
        if self.are_connected(from, to) {
            return false;
        }

        self.rooms[from.0].outgoing.insert(to);
        self.rooms[to.0].incoming.insert(from);
        true
    }

    /// Whether the directed edge `from -> to` exists.
    pub fn are_connected(&self, from: RoomId, to: RoomId) -> bool {
        let forward = self.room(from).is_some_and(|room| room.outgoing.contains(&to));
        let backward = self.room(to).is_some_and(|room| room.incoming.contains(&from));
        forward || backward
    }

    /// All edges ordered by source, then target.
    pub fn edges(&self) -> impl Iterator<Item = (RoomId, RoomId)> + '_ {
        self.rooms.iter().flat_map(|room| room.outgoing.iter().map(move |&to| (room.id, to)))
    }

    pub fn edge_count(&self) -> usize {
        self.rooms.iter().map(|room| room.outgoing.len()).sum()
    }

    /// Whether every room can be reached from the entrance when edge direction is ignored.
    pub fn is_weakly_connected(&self) -> bool {
        let mut seen = BTreeSet::from([RoomId::ENTRANCE]);
        let mut open = VecDeque::from([RoomId::ENTRANCE]);
        while let Some(id) = open.pop_front() {
            let room = &self.rooms[id.0];
            for &next in room.outgoing.iter().chain(room.incoming.iter()) {
                if seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen.len() == self.rooms.len()
    }

    /// Stable byte encoding of room types and edges, used for determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.push(room.room_type.code());
        }
        bytes.extend((self.edge_count() as u32).to_le_bytes());
        for (from, to) in self.edges() {
            bytes.extend((from.0 as u32).to_le_bytes());
            bytes.extend((to.0 as u32).to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
