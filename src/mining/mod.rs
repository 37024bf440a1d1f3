// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.

pub mod coordinator;
pub mod observatory;
pub mod worker;

pub use coordinator::Coordinator;
pub use observatory::Observatory;

/// Hard cap on worker thread count, regardless of `thread_count`/CPU
/// count — matches the original miner's `MAX_THREADS`.
pub const MAX_THREADS: usize = 384;

/// Keypair pool capacity. Sized well below the original's ~1 GiB pool so
/// startup pregeneration stays fast; correctness only depends on the
/// hash digest, not on key uniqueness, so a smaller pool with cursor
/// wrap-around is safe.
pub const KEYPAIR_POOL_CAPACITY: usize = 1_000_000;

pub fn unix_timestamp_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
