// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Top-level wiring (C7): pregenerate the keypair pool, spawn the worker
// threads plus one each of the job manager, telemetry reporter, and
// hashrate printer, then block until shutdown. Every loop polls the same
// `Arc<AtomicBool>`; a `ctrlc` handler is the only thing that flips it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::job::JobSlot;
use crate::keys::KeypairPool;
use crate::mining::observatory::Observatory;
use crate::mining::{worker, KEYPAIR_POOL_CAPACITY};
use crate::submit;
use crate::telemetry::{printer, reporter};

pub struct Coordinator {
    config: Config,
    shutdown: Arc<AtomicBool>,
}

impl Coordinator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        self.shutdown.clone()
    }

    pub fn run(&self) -> Result<()> {
        let thread_count = self.config.resolved_thread_count();
        info!(threads = thread_count, "starting miner");

        let pool = Arc::new(KeypairPool::pregenerate(KEYPAIR_POOL_CAPACITY, thread_count));
        let slot = Arc::new(JobSlot::waiting());
        let observatory = Arc::new(Observatory::new());
        let client = Arc::new(submit::build_client(&self.config)?);

        if self.config.telemetry_enabled() {
            info!(server = %self.config.report_server, "reporting status to configured endpoint");
        }

        std::thread::scope(|scope| {
            for i in 0..thread_count {
                let config = &self.config;
                let pool = Arc::clone(&pool);
                let slot = Arc::clone(&slot);
                let observatory = Arc::clone(&observatory);
                let client = Arc::clone(&client);
                let shutdown = Arc::clone(&self.shutdown);
                scope.spawn(move || {
                    info!(worker = i, "mining worker started");
                    worker::run(&client, config, &slot, &pool, &observatory, &shutdown);
                });
            }

            {
                let config = &self.config;
                let slot = Arc::clone(&slot);
                let observatory = Arc::clone(&observatory);
                let client = Arc::clone(&client);
                let shutdown = Arc::clone(&self.shutdown);
                scope.spawn(move || {
                    crate::job::manager::run(&client, config, &slot, &observatory, &shutdown);
                });
            }

            {
                let config = &self.config;
                let observatory = Arc::clone(&observatory);
                let client = Arc::clone(&client);
                let shutdown = Arc::clone(&self.shutdown);
                scope.spawn(move || {
                    reporter::run(&client, config, &observatory, &shutdown);
                });
            }

            {
                let observatory = Arc::clone(&observatory);
                let shutdown = Arc::clone(&self.shutdown);
                scope.spawn(move || {
                    printer::run(&observatory, &shutdown);
                });
            }
        });

        info!(
            total_mined = observatory.total_mined(),
            "miner shut down"
        );
        Ok(())
    }

    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
