// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Telemetry loop (C6): every `report_interval` seconds, read-and-reset
// the hash counter and push a status report upstream if configured.
// This loop owns the hash-count reset exclusively — the hashrate
// printer only peeks — so the two can never double-reset the same
// window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::mining::observatory::Observatory;
use crate::submit;

pub fn run(client: &Client, config: &Config, observatory: &Observatory, shutdown: &Arc<AtomicBool>) {
    let interval = Duration::from_secs(config.report_interval.max(1));

    while !shutdown.load(Ordering::Relaxed) {
        sleep_in_ticks(interval, shutdown);
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        let hash_count = observatory.take_hash_count();
        let total_mined = observatory.total_mined();
        let hash_rate = hash_count as f64 / config.report_interval.max(1) as f64;

        if !config.telemetry_enabled() {
            continue;
        }

        let best_hash_hex = hex::encode(observatory.best_hash());
        match submit::report_status(client, config, hash_rate, &best_hash_hex, total_mined) {
            Ok(()) => info!("status reported successfully"),
            Err(err) => warn!("failed to report status: {}", err),
        }
    }
}

fn sleep_in_ticks(total: Duration, shutdown: &Arc<AtomicBool>) {
    let step = Duration::from_millis(100);
    let mut slept = Duration::ZERO;
    while slept < total && !shutdown.load(Ordering::Relaxed) {
        let remaining = total - slept;
        std::thread::sleep(remaining.min(step));
        slept += step;
    }
}
