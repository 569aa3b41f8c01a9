//! Per-room connector plans: which doors a room gets, where they lead, and how they are
//! labelled. The engine instantiates one connector object per plan entry.

use std::collections::BTreeSet;

use serde::Serialize;

use super::layout::{Layout, Position};
use super::model::{DungeonGraph, Room, RoomId, RoomType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ConnectorSide {
    /// Sits on an incoming edge and leads back to the origin room.
    Entrance,
    /// Sits on an outgoing edge and leads on to the target room.
    Exit,
}

/// Named point inside a room that a teleporting player lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Anchor {
    EnterPoint,
    ExitPoint,
}

impl Anchor {
    pub fn name(self) -> &'static str {
        match self {
            Self::EnterPoint => "EnterPoint",
            Self::ExitPoint => "ExitPoint",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeleportTarget {
    pub room: RoomId,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConnectorPlan {
    pub side: ConnectorSide,
    /// Marker slot index on this side of the room.
    pub slot: usize,
    pub target: RoomId,
    pub target_type: RoomType,
    pub label: String,
}

impl ConnectorPlan {
    fn new(side: ConnectorSide, slot: usize, target: &Room) -> Self {
        let label = match side {
            ConnectorSide::Entrance => {
                format!("From Room {} : {} (In)", target.id(), target.room_type())
            }
            ConnectorSide::Exit => format!("To Room {} : {} (Out)", target.id(), target.room_type()),
        };
        Self { side, slot, target: target.id(), target_type: target.room_type(), label }
    }

    /// Going back through an entrance lands at the origin's exit point; going on through an
    /// exit lands at the target's enter point.
    pub fn teleport_target(&self) -> TeleportTarget {
        let anchor = match self.side {
            ConnectorSide::Entrance => Anchor::ExitPoint,
            ConnectorSide::Exit => Anchor::EnterPoint,
        };
        TeleportTarget { room: self.target, anchor }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoomPlan {
    pub room: RoomId,
    pub room_type: RoomType,
    pub position: Position,
    pub label: String,
    pub entrances: Vec<ConnectorPlan>,
    pub exits: Vec<ConnectorPlan>,
}

impl RoomPlan {
    /// Whether a room scene with the given marker counts can hold every connector.
    pub fn fits_slots(&self, entrance_slots: usize, exit_slots: usize) -> bool {
        self.entrances.len() <= entrance_slots && self.exits.len() <= exit_slots
    }

    pub fn connectors(&self) -> impl Iterator<Item = &ConnectorPlan> {
        self.entrances.iter().chain(self.exits.iter())
    }
}

/// One plan per room, in id order. Connectors are ordered by target id.
pub fn plan_rooms(graph: &DungeonGraph, layout: &Layout) -> Vec<RoomPlan> {
    graph
        .rooms()
        .iter()
        .map(|room| RoomPlan {
            room: room.id(),
            room_type: room.room_type(),
            position: layout.position(room.id()).unwrap_or_default(),
            label: format!("Room {} ({})", room.id(), room.room_type()),
            entrances: plan_side(graph, ConnectorSide::Entrance, room.incoming()),
            exits: plan_side(graph, ConnectorSide::Exit, room.outgoing()),
        })
        .collect()
}

fn plan_side(
    graph: &DungeonGraph,
    side: ConnectorSide,
    targets: &BTreeSet<RoomId>,
) -> Vec<ConnectorPlan> {
    targets
        .iter()
        .filter_map(|&id| graph.room(id))
        .enumerate()
        .map(|(slot, target)| ConnectorPlan::new(side, slot, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::dungeon::build_graph;
    use crate::dungeon::layout::linear_layout;
    use crate::rng::test_support::ScriptedSource;

    /// Entrance, Combat, Treasure, Exit with edges 0->1, 0->2, 1->3, 2->1.
    fn sample_graph() -> DungeonGraph {
        let mut graph = DungeonGraph::new(4, &mut ScriptedSource::new(&[0, 2])).unwrap();
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 1)] {
            assert!(graph.try_connect(RoomId(from), RoomId(to), 4));
        }
        graph
    }

    #[test]
    fn room_labels_name_id_and_type() {
        let graph = sample_graph();
        let plans = plan_rooms(&graph, &linear_layout(&graph));
        let labels: Vec<&str> = plans.iter().map(|plan| plan.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Room 0 (Entrance)", "Room 1 (Combat)", "Room 2 (Treasure)", "Room 3 (Exit)"]
        );
    }

    #[test]
    fn connectors_mirror_incoming_and_outgoing_sets() {
        let graph = sample_graph();
        let plans = plan_rooms(&graph, &linear_layout(&graph));
        let room_1 = &plans[1];

        let entrance_targets: Vec<RoomId> = room_1.entrances.iter().map(|c| c.target).collect();
        assert_eq!(entrance_targets, [RoomId(0), RoomId(2)]);
        assert_eq!(room_1.entrances[0].label, "From Room 0 : Entrance (In)");
        assert_eq!(room_1.entrances[1].label, "From Room 2 : Treasure (In)");
        assert_eq!(room_1.entrances[1].slot, 1);

        assert_eq!(room_1.exits.len(), 1);
        assert_eq!(room_1.exits[0].label, "To Room 3 : Exit (Out)");
        assert_eq!(room_1.exits[0].target_type, RoomType::Exit);
        assert_eq!(room_1.connectors().count(), 3);
    }

    #[test]
    fn teleport_anchor_depends_on_connector_side() {
        let graph = sample_graph();
        let plans = plan_rooms(&graph, &linear_layout(&graph));

        let back = plans[1].entrances[0].teleport_target();
        assert_eq!(back, TeleportTarget { room: RoomId(0), anchor: Anchor::ExitPoint });

        let forward = plans[1].exits[0].teleport_target();
        assert_eq!(forward, TeleportTarget { room: RoomId(3), anchor: Anchor::EnterPoint });
        assert_eq!(forward.anchor.name(), "EnterPoint");
    }

    #[test]
    fn plans_carry_layout_positions() {
        let graph = sample_graph();
        let plans = plan_rooms(&graph, &linear_layout(&graph));
        assert_eq!(plans[2].position.x, 200.0);
    }

    #[test]
    fn slot_check_counts_each_side_separately() {
        let graph = sample_graph();
        let plans = plan_rooms(&graph, &linear_layout(&graph));
        assert!(plans[1].fits_slots(2, 1));
        assert!(!plans[1].fits_slots(1, 1));
        assert!(!plans[0].fits_slots(0, 1));
    }

    #[test]
    fn every_edge_yields_one_connector_on_each_end() {
        let graph = build_graph(10, 3, 4, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();
        let plans = plan_rooms(&graph, &linear_layout(&graph));
        let exits: usize = plans.iter().map(|plan| plan.exits.len()).sum();
        let entrances: usize = plans.iter().map(|plan| plan.entrances.len()).sum();
        assert_eq!(exits, graph.edge_count());
        assert_eq!(entrances, graph.edge_count());
    }
}
