// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Core data structures and the hash engine (C2). No submodule here knows
// about threads, HTTP, or the pool — they operate on plain values.

pub mod difficulty;
pub mod hash;
pub mod types;

pub use difficulty::{is_better, meets_target};
pub use hash::candidate_digest;
pub use types::{ChallengeResponse, Job, Keypair, Solution};
