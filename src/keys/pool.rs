// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Fixed-capacity keypair pool. Pregenerated once at startup by splitting
// the capacity evenly across worker threads — each thread owns its own
// secp256k1 context rather than sharing one, matching the C miner's
// per-thread context design even though the Rust context type happens
// to be `Send + Sync`. Workers then draw keypairs round-robin through a
// mutex-guarded cursor.

use std::sync::Mutex;

use secp256k1::Secp256k1;
use tracing::info;

use crate::core::types::Keypair;
use crate::keys::keypair;

pub struct KeypairPool {
    keypairs: Vec<Keypair>,
    cursor: Mutex<usize>,
}

impl KeypairPool {
    /// Pregenerate `capacity` keypairs, spread across `thread_count` helper
    /// threads. `thread_count` is clamped to at least 1.
    pub fn pregenerate(capacity: usize, thread_count: usize) -> Self {
        let thread_count = thread_count.max(1);
        info!(
            "pregenerating {} keypairs across {} threads",
            capacity, thread_count
        );

        let base = capacity / thread_count;
        let extra = capacity % thread_count;

        let keypairs: Vec<Keypair> = std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(thread_count);
            for i in 0..thread_count {
                let count = base + if i < extra { 1 } else { 0 };
                handles.push(scope.spawn(move || {
                    let secp = Secp256k1::new();
                    (0..count).map(|_| keypair::generate(&secp)).collect::<Vec<_>>()
                }));
            }
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });

        info!("keypair pool ready: {} keypairs", keypairs.len());

        Self {
            keypairs,
            cursor: Mutex::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.keypairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypairs.is_empty()
    }

    /// Draw the next keypair, wrapping around the pool. Cheap clone: a
    /// `Keypair` is two fixed-size byte arrays, no heap allocation.
    pub fn next(&self) -> Keypair {
        let mut cursor = self.cursor.lock().unwrap();
        let keypair = self.keypairs[*cursor].clone();
        *cursor = (*cursor + 1) % self.keypairs.len();
        keypair
    }
}
