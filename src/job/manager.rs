// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Polls `{server}/get-challenge` on a fixed cadence and installs any new
// job. A malformed response or transport failure leaves the currently
// installed job untouched — the next tick simply tries again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::job::slot::JobSlot;
use crate::mining::observatory::Observatory;
use crate::submit;

pub fn run(
    client: &Client,
    config: &Config,
    slot: &JobSlot,
    observatory: &Observatory,
    shutdown: &Arc<AtomicBool>,
) {
    while !shutdown.load(Ordering::Relaxed) {
        match submit::fetch_challenge(client, config) {
            Ok(Some(job)) => {
                if slot.install_if_changed(job.clone()) {
                    info!(
                        seed = %job.seed,
                        diff = %hex::encode(job.diff),
                        reward = job.reward,
                        "new job installed"
                    );
                    observatory.reset_best_hash();
                }
            }
            Ok(None) => {}
            Err(err) => warn!("failed to fetch challenge: {}", err),
        }

        sleep_in_ticks(Duration::from_secs(config.job_interval.max(1)), shutdown);
    }
}

/// Sleep in short increments so shutdown is observed promptly instead of
/// only after a multi-second `job_interval` elapses.
fn sleep_in_ticks(total: Duration, shutdown: &Arc<AtomicBool>) {
    let step = Duration::from_millis(100);
    let mut slept = Duration::ZERO;
    while slept < total && !shutdown.load(Ordering::Relaxed) {
        let remaining = total - slept;
        std::thread::sleep(remaining.min(step));
        slept += step;
    }
}
