//! Spatial placement of rooms for the engine-side spawner.

use serde::Serialize;

use super::model::{DungeonGraph, RoomId};

/// Distance between neighbouring rooms along the x axis.
pub const ROOM_SPACING: f32 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Room positions indexed by room id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    positions: Vec<Position>,
}

impl Layout {
    pub fn position(&self, id: RoomId) -> Option<Position> {
        self.positions.get(id.index()).copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

/// Place rooms in id order on a line. Rooms teleport between connectors, so the layout
/// only has to keep room geometry from overlapping.
pub fn linear_layout(graph: &DungeonGraph) -> Layout {
    let positions = graph
        .rooms()
        .iter()
        .map(|room| Position { x: room.id().index() as f32 * ROOM_SPACING, y: 0.0, z: 0.0 })
        .collect();
    Layout { positions }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn rooms_are_spaced_along_x_in_id_order() {
        let graph = DungeonGraph::new(4, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        let layout = linear_layout(&graph);

        assert_eq!(layout.positions().len(), 4);
        assert_eq!(layout.position(RoomId(0)), Some(Position::default()));
        assert_eq!(layout.position(RoomId(3)), Some(Position { x: 300.0, y: 0.0, z: 0.0 }));
        assert_eq!(layout.position(RoomId(4)), None);
    }
}
