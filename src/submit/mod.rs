// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.

pub mod client;
pub mod protocol;

pub use client::{build_client, fetch_challenge, report_status, submit_solution};
