//! Seed selection for generation runs: caller-fixed or drawn from runtime entropy.

use std::fmt;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// The seed a run actually used, and where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeedChoice {
    Fixed(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Fixed(seed) | Self::Generated(seed) => seed,
        }
    }
}

impl fmt::Display for SeedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(seed) => write!(f, "{seed} (fixed)"),
            Self::Generated(seed) => write!(f, "{seed} (generated)"),
        }
    }
}

static RUNTIME_SEED_CALLS: AtomicU64 = AtomicU64::new(0);

/// Seed for randomized runs: the wall clock hashed with a per-process, per-call salt.
pub fn generate_runtime_seed() -> u64 {
    let clock = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |since| since.as_nanos());
    let call = RUNTIME_SEED_CALLS.fetch_add(1, Ordering::Relaxed);
    let salt = (u64::from(process::id()) << 32) ^ call;
    xxh3_64_with_seed(&clock.to_le_bytes(), salt)
}
