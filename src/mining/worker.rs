// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// The mining hot loop (C3). Each worker owns its own HTTP client and
// submission state; the only shared data it touches is the job slot,
// the keypair pool, and the observatory, all already safe for
// concurrent access. Hash counts are batched locally and flushed every
// 100 attempts, matching the original's batching cadence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::config::Config;
use crate::core::{candidate_digest, meets_target, types::Solution};
use crate::job::JobSlot;
use crate::keys::KeypairPool;
use crate::mining::observatory::Observatory;
use crate::rewards;
use crate::submit;

const HASH_BATCH: u64 = 100;
const IDLE_SLEEP: Duration = Duration::from_millis(100);

pub fn run(
    client: &Client,
    config: &Config,
    slot: &JobSlot,
    pool: &KeypairPool,
    observatory: &Observatory,
    shutdown: &Arc<AtomicBool>,
) {
    let mut local_hash_count: u64 = 0;

    while !shutdown.load(Ordering::Relaxed) {
        let job = slot.snapshot();
        if job.is_waiting() {
            std::thread::sleep(IDLE_SLEEP);
            continue;
        }

        let keypair = pool.next();
        let digest = candidate_digest(&keypair, &job.seed);

        observatory.offer_best_hash(&digest);

        if meets_target(&digest, &job.diff) {
            let solution = Solution {
                pk: keypair.pk,
                sk: keypair.sk,
                digest,
                reward: job.reward,
            };
            handle_solution(client, config, observatory, &solution);
        }

        local_hash_count += 1;
        if local_hash_count >= HASH_BATCH {
            observatory.record_hashes(local_hash_count);
            local_hash_count = 0;
        }
    }

    if local_hash_count > 0 {
        observatory.record_hashes(local_hash_count);
    }
}

fn handle_solution(client: &Client, config: &Config, observatory: &Observatory, solution: &Solution) {
    info!(
        reward = solution.reward,
        digest = %solution.digest_hex(),
        "found candidate solution"
    );

    match submit::submit_solution(client, config, solution) {
        Ok(()) => {
            observatory.add_mined(solution.reward);
            info!(reward = solution.reward, "solution accepted");

            let coin_id = crate::mining::unix_timestamp_secs();
            if let Err(err) = rewards::save_reward(config, solution, coin_id) {
                tracing::warn!("failed to save reward: {}", err);
            }
        }
        Err(err) => {
            tracing::warn!("solution rejected: {}", err);
        }
    }
}
