//! Three-phase graph construction: room instantiation, spanning pass, extra edges.

use log::{debug, trace};

use super::model::{DungeonGraph, RoomId};
use crate::error::GenerationError;
use crate::rng::RandomSource;

/// Spanning-pass attempts allowed per `room_count²`.
const SPANNING_ATTEMPTS_PER_ROOM_PAIR: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DungeonGraphBuilder {
    room_count: usize,
    max_connections: usize,
    extra_connection_bound: usize,
}

impl DungeonGraphBuilder {
    pub fn new(room_count: usize, max_connections: usize) -> Self {
        Self { room_count, max_connections, extra_connection_bound: 0 }
    }

    /// Upper bound (inclusive) of the extra edges added after the spanning pass.
    pub fn extra_connection_bound(mut self, bound: usize) -> Self {
        self.extra_connection_bound = bound;
        self
    }

    pub fn build(&self, rng: &mut impl RandomSource) -> Result<DungeonGraph, GenerationError> {
        if self.max_connections == 0 {
            return Err(GenerationError::invalid_argument(
                "max_connections",
                "rooms need at least one connection slot",
            ));
        }

        let mut graph = DungeonGraph::new(self.room_count, rng)?;
        self.connect_spanning(&mut graph, rng)?;
        let extra = self.add_extra_edges(&mut graph, rng);

        debug!(
            "built dungeon graph: {} rooms, {} edges ({extra} extra)",
            graph.room_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Link every room to the growing component rooted at the entrance. Each success
    /// adds one edge, so this pass leaves exactly `room_count - 1` edges.
    fn connect_spanning(
        &self,
        graph: &mut DungeonGraph,
        rng: &mut impl RandomSource,
    ) -> Result<(), GenerationError> {
        // The entrance is the root and never a destination, so this pass adds no edge into it.
        let mut connected = vec![RoomId::ENTRANCE];
        let mut to_connect: Vec<RoomId> = (1..self.room_count).map(RoomId).collect();
        let attempt_budget = self.spanning_attempt_budget();
        let mut attempts = 0_usize;

        while !to_connect.is_empty() {
            if attempts >= attempt_budget {
                return Err(GenerationError::GenerationFailed {
                    connected: connected.len(),
                    remaining: to_connect.len(),
                    attempts,
                });
            }
            attempts += 1;

            let from = connected[rng.pick_index(connected.len())];
            let destination_index = rng.pick_index(to_connect.len());
            let to = to_connect[destination_index];

            if graph.try_connect(from, to, self.max_connections) {
                connected.push(to);
                to_connect.remove(destination_index);
            } else {
                trace!("spanning attempt {attempts}: {from} -> {to} rejected");
            }
        }

        debug!("spanning pass linked {} rooms in {attempts} attempts", connected.len());
        Ok(())
    }

    /// Add up to a random number of extra edges. Returns how many were added.
    fn add_extra_edges(&self, graph: &mut DungeonGraph, rng: &mut impl RandomSource) -> usize {
        let mut attempts_left = self.extra_attempt_budget();
        // Each attempt adds at most one edge.
        let target = rng.range_inclusive(0, self.extra_connection_bound).min(attempts_left);
        let mut added = 0;

        while added < target && attempts_left > 0 {
            attempts_left -= 1;
            let from = RoomId(rng.pick_index(self.room_count));
            let to = RoomId(rng.pick_index(self.room_count));
            if graph.try_connect(from, to, self.max_connections) {
                added += 1;
            }
        }

        if added < target {
            debug!("extra-edge pass stopped at {added} of {target} edges");
        }
        added
    }

    fn extra_attempt_budget(&self) -> usize {
        self.room_count.saturating_mul(self.room_count) / 2
    }

    fn spanning_attempt_budget(&self) -> usize {
        self.room_count
            .saturating_mul(self.room_count)
            .saturating_mul(SPANNING_ATTEMPTS_PER_ROOM_PAIR)
    }
}
