// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Library root. The binary in `src/main.rs` is a thin CLI wrapper around
// `mining::Coordinator`; everything else here is organized by concern so
// each piece can be tested without spinning up threads or a network.

pub mod config;
pub mod core;
pub mod error;
pub mod job;
pub mod keys;
pub mod mining;
pub mod rewards;
pub mod submit;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::{MinerError, Result};
pub use mining::Coordinator;
