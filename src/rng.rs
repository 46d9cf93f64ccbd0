use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Generator used by a game unless the caller injects another `Rng`.
pub type GameRng = Pcg64;

/// Deterministic generator for a fixed seed.
///
/// Same seed, same sequence of spawn positions; this is the hook tests and
/// `--seed` replays use.
#[inline]
pub fn rng_for_seed(seed: u64) -> GameRng {
    Pcg64::seed_from_u64(seed)
}

/// Milliseconds since the Unix epoch, used as a time-varying seed.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Generator seeded from the system clock, so separate runs differ.
#[inline]
pub fn rng_from_clock() -> GameRng {
    rng_for_seed(clock_seed())
}
