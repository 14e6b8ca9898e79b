//! Seed text hashing and runtime seed selection.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use crate::config::GenerationConfig;

/// Hashes seed text into the integer seed fed to [`super::rng::SeededRng`].
///
/// This is `xxh3_64` over the UTF-8 bytes, so a given seed string maps to the
/// same cave on every platform and build.
pub fn hash_seed_text(seed: &str) -> u64 {
    xxh3_64(seed.as_bytes())
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Time-derived seed for `use_random_seed` configs.
///
/// Clock and process id are hashed with xxh3, keyed by a process-wide call
/// counter, so successive calls differ even within the same clock tick.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut entropy = [0_u8; 24];
    entropy[..16].copy_from_slice(&now_nanos.to_le_bytes());
    entropy[16..].copy_from_slice(&pid.to_le_bytes());
    xxh3_64_with_seed(&entropy, counter)
}

/// Picks the seed text for one generation run.
///
/// An explicit override always wins, then `use_random_seed`, then the
/// configured seed string. Random seeds are returned as decimal text so the
/// run can be reproduced by passing that text back as an override.
pub fn resolve_seed_text(config: &GenerationConfig, seed_override: Option<&str>) -> String {
    match seed_override {
        Some(seed) => seed.to_string(),
        None if config.use_random_seed => generate_runtime_seed().to_string(),
        None => config.seed.clone(),
    }
}
