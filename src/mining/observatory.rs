// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Shared mining telemetry: the running hash counter and the best digest
// seen for the current job. Kept separate from `JobSlot` because workers
// touch `hash_count` on every iteration but `best_hash` only on a new
// personal best — different contention profiles, different locks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct Observatory {
    hash_count: AtomicU64,
    total_hashes: AtomicU64,
    best_hash: Mutex<[u8; 32]>,
    total_mined: Mutex<f64>,
}

impl Observatory {
    pub fn new() -> Self {
        Self {
            hash_count: AtomicU64::new(0),
            total_hashes: AtomicU64::new(0),
            best_hash: Mutex::new([0xffu8; 32]),
            total_mined: Mutex::new(0.0),
        }
    }

    pub fn record_hashes(&self, count: u64) {
        self.hash_count.fetch_add(count, Ordering::Relaxed);
        self.total_hashes.fetch_add(count, Ordering::Relaxed);
    }

    /// Read and reset in one step — only the report loop calls this, so
    /// the hashrate printer never races it for the reset.
    pub fn take_hash_count(&self) -> u64 {
        self.hash_count.swap(0, Ordering::Relaxed)
    }

    /// Monotonically increasing total, never reset by any loop. The
    /// hashrate printer deltas against this instead of `hash_count`, so
    /// the report loop's periodic reset can never make its reading dip.
    pub fn total_hashes(&self) -> u64 {
        self.total_hashes.load(Ordering::Relaxed)
    }

    pub fn reset_best_hash(&self) {
        *self.best_hash.lock().unwrap() = [0xffu8; 32];
    }

    pub fn best_hash(&self) -> [u8; 32] {
        *self.best_hash.lock().unwrap()
    }

    /// Update the best hash if `candidate` improves on it. Returns `true`
    /// on update so callers can decide whether to log.
    pub fn offer_best_hash(&self, candidate: &[u8; 32]) -> bool {
        let mut best = self.best_hash.lock().unwrap();
        if crate::core::is_better(candidate, &best) {
            *best = *candidate;
            true
        } else {
            false
        }
    }

    pub fn add_mined(&self, reward: f64) {
        *self.total_mined.lock().unwrap() += reward;
    }

    pub fn total_mined(&self) -> f64 {
        *self.total_mined.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_hash_count_resets_to_zero() {
        let obs = Observatory::new();
        obs.record_hashes(42);
        assert_eq!(obs.take_hash_count(), 42);
        assert_eq!(obs.total_hashes(), 42);
    }

    #[test]
    fn total_hashes_survives_a_report_reset() {
        let obs = Observatory::new();
        obs.record_hashes(7);
        assert_eq!(obs.total_hashes(), 7);
        obs.take_hash_count();
        assert_eq!(obs.total_hashes(), 7);
        obs.record_hashes(3);
        assert_eq!(obs.total_hashes(), 10);
    }

    #[test]
    fn offer_best_hash_only_improves() {
        let obs = Observatory::new();
        assert_eq!(obs.best_hash(), [0xffu8; 32]);
        let mut better = [0xffu8; 32];
        better[0] = 0x00;
        assert!(obs.offer_best_hash(&better));
        assert_eq!(obs.best_hash(), better);
        assert!(!obs.offer_best_hash(&[0xffu8; 32]));
    }
}
