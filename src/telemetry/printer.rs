// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// A faster, read-only hashrate printer: prints local throughput every
// ~3 seconds, deltaing against `Observatory::total_hashes`, a counter no
// other loop ever resets — the report loop's periodic `take_hash_count`
// swap-to-zero can't make this reading dip.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use crate::mining::observatory::Observatory;
use crate::utils::format::FormatUtils;

const PRINT_INTERVAL: Duration = Duration::from_secs(3);

pub fn run(observatory: &Observatory, shutdown: &Arc<AtomicBool>) {
    // Tracks its own previous reading against the never-reset total, so
    // an arbitrary `report_interval` on the telemetry loop never throws
    // this delta off.
    let mut previous = observatory.total_hashes();

    while !shutdown.load(Ordering::Relaxed) {
        std::thread::sleep(PRINT_INTERVAL);
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        let current = observatory.total_hashes();
        let delta = current.saturating_sub(previous);
        previous = current;

        let rate = delta as f64 / PRINT_INTERVAL.as_secs_f64();
        println!("{}", format!("[INFO] {}", FormatUtils::format_hashrate(rate)).cyan());
    }
}
