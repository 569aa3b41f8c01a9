//! Dungeon graph generation split into model, construction, and engine-facing plans.

pub mod connectors;
pub mod layout;
pub mod model;

mod builder;
mod generator;
mod report;

pub use builder::DungeonGraphBuilder;
pub use connectors::{Anchor, ConnectorPlan, ConnectorSide, RoomPlan, TeleportTarget, plan_rooms};
pub use generator::{DungeonGenerator, GeneratedDungeon};
pub use layout::{Layout, Position, ROOM_SPACING, linear_layout};
pub use model::{DungeonGraph, INTERIOR_ROOM_TYPES, Room, RoomId, RoomType};
pub use report::log_graph;

use crate::error::GenerationError;
use crate::rng::RandomSource;

pub fn build_graph(
    room_count: usize,
    max_connections_per_room: usize,
    extra_connection_bound: usize,
    rng: &mut impl RandomSource,
) -> Result<DungeonGraph, GenerationError> {
    DungeonGraphBuilder::new(room_count, max_connections_per_room)
        .extra_connection_bound(extra_connection_bound)
        .build(rng)
}
