// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Crate-wide error taxonomy. Only `Resource` errors raised during startup
// are fatal; everything else is logged by the owning loop and retried on
// its next tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinerError {
    #[error("resource error: {0}")]
    Resource(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("submission rejected: {0}")]
    SubmissionRejected(String),

    #[error("on_mined command failed with status {0}")]
    Command(i32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MinerError>;
