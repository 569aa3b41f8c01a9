//! Generator settings and their TOML file form.
//!
//! ```toml
//! max_room_count = 8
//! max_connections = 4
//! max_extra_connections = 1
//! seed = { fixedSeed = 1234 }   # or { randomized = true }
//! ```

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::seed::{SeedChoice, generate_runtime_seed};

/// Smallest room count drawn when the configured maximum allows it.
pub const MIN_ROOM_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedModeRepr", into = "SeedModeRepr")]
pub enum SeedMode {
    Fixed(u64),
    Randomized,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SeedModeRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fixed_seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    randomized: Option<bool>,
}

impl TryFrom<SeedModeRepr> for SeedMode {
    type Error = String;

    fn try_from(repr: SeedModeRepr) -> Result<Self, Self::Error> {
        match (repr.fixed_seed, repr.randomized) {
            (Some(seed), None | Some(false)) => Ok(Self::Fixed(seed)),
            (None, Some(true)) => Ok(Self::Randomized),
            (Some(_), Some(true)) => {
                Err("seed cannot be both `fixedSeed` and `randomized = true`".to_string())
            }
            (None, None | Some(false)) => {
                Err("seed needs `fixedSeed = <int>` or `randomized = true`".to_string())
            }
        }
    }
}

impl From<SeedMode> for SeedModeRepr {
    fn from(mode: SeedMode) -> Self {
        match mode {
            SeedMode::Fixed(seed) => Self { fixed_seed: Some(seed), randomized: None },
            SeedMode::Randomized => Self { fixed_seed: None, randomized: Some(true) },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Upper bound of the room count draw.
    pub max_room_count: usize,
    /// Per-room bound on both incoming and outgoing edges.
    pub max_connections: usize,
    /// Upper bound of the extra edges added after the spanning pass.
    pub max_extra_connections: usize,
    pub seed: SeedMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_room_count: 8,
            max_connections: 4,
            max_extra_connections: 1,
            seed: SeedMode::Randomized,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_room_count < 2 {
            return Err(GenerationError::invalid_argument(
                "max_room_count",
                format!("must be at least 2, got {}", self.max_room_count),
            ));
        }
        if self.max_connections == 0 {
            return Err(GenerationError::invalid_argument(
                "max_connections",
                "must be at least 1, got 0",
            ));
        }
        Ok(())
    }

    /// Room counts the generator may draw from.
    pub fn room_count_range(&self) -> RangeInclusive<usize> {
        MIN_ROOM_COUNT.min(self.max_room_count)..=self.max_room_count
    }

    pub fn resolve_seed(&self) -> SeedChoice {
        match self.seed {
            SeedMode::Fixed(seed) => SeedChoice::Fixed(seed),
            SeedMode::Randomized => SeedChoice::Generated(generate_runtime_seed()),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, GenerationError> {
        let config: Self =
            toml::from_str(source).map_err(|e| GenerationError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, GenerationError> {
        toml::to_string(self).map_err(|e| GenerationError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
