pub mod config;
pub mod dungeon;
pub mod error;
pub mod rng;
pub mod seed;

pub use config::{GeneratorConfig, MIN_ROOM_COUNT, SeedMode};
pub use dungeon::*;
pub use error::GenerationError;
pub use rng::RandomSource;
pub use seed::{SeedChoice, generate_runtime_seed};
