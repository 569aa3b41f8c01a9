//! Human-readable graph dump for debugging generation runs.

use std::collections::BTreeSet;
use std::fmt;

use log::{Level, debug, log_enabled};

use super::model::{DungeonGraph, RoomId};

impl fmt::Display for DungeonGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in self.rooms() {
            writeln!(
                f,
                "Room {} ({}) -> [{}] <- [{}]",
                room.id(),
                room.room_type(),
                join_ids(room.outgoing()),
                join_ids(room.incoming())
            )?;
        }
        write!(f, "{} rooms, {} edges", self.room_count(), self.edge_count())
    }
}

/// Emit one `debug` line per room.
pub fn log_graph(graph: &DungeonGraph) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    for line in graph.to_string().lines() {
        debug!("{line}");
    }
}

fn join_ids(ids: &BTreeSet<RoomId>) -> String {
    ids.iter().map(RoomId::to_string).collect::<Vec<_>>().join(", ")
}
