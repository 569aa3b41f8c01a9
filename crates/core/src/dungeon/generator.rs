//! Configured generation run: seed, room count draw, graph, layout, connector plans.

use log::info;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;

use super::builder::DungeonGraphBuilder;
use super::connectors::{RoomPlan, plan_rooms};
use super::layout::{Layout, linear_layout};
use super::model::DungeonGraph;
use super::report::log_graph;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use crate::seed::SeedChoice;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedDungeon {
    pub seed: SeedChoice,
    pub graph: DungeonGraph,
    pub layout: Layout,
    pub rooms: Vec<RoomPlan>,
}

pub struct DungeonGenerator {
    config: GeneratorConfig,
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate with the seed the configuration asks for.
    pub fn generate_configured(&self) -> Result<GeneratedDungeon, GenerationError> {
        self.generate(self.config.resolve_seed())
    }

    pub fn generate(&self, seed: SeedChoice) -> Result<GeneratedDungeon, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        let range = self.config.room_count_range();
        let room_count = rng.range_inclusive(*range.start(), *range.end());

        let graph = DungeonGraphBuilder::new(room_count, self.config.max_connections)
            .extra_connection_bound(self.config.max_extra_connections)
            .build(&mut rng)?;
        info!(
            "generated dungeon with seed {seed}: {} rooms, {} edges",
            graph.room_count(),
            graph.edge_count()
        );
        log_graph(&graph);

        let layout = linear_layout(&graph);
        let rooms = plan_rooms(&graph, &layout);
        Ok(GeneratedDungeon { seed, graph, layout, rooms })
    }
}
