// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Core data structures shared across the mining pipeline: keypairs,
// challenges, and mined solutions.

use serde::Deserialize;

/// A secp256k1 keypair vended by the [`crate::keys::KeypairPool`].
///
/// `pk` is the 65-byte uncompressed SEC1 serialization (leading `0x04`);
/// `sk` is the 32-byte scalar. Both are fixed-size so the pool can store
/// keypairs inline without per-entry heap allocation.
#[derive(Clone)]
pub struct Keypair {
    pub sk: [u8; 32],
    pub pk: [u8; 65],
}

impl Keypair {
    /// Lowercase hex encoding of the public key — this is the exact byte
    /// string the hash engine and the submission signature are computed
    /// over, so it must match the wire protocol precisely.
    pub fn pk_hex(&self) -> String {
        hex::encode(self.pk)
    }

    pub fn sk_hex(&self) -> String {
        hex::encode(self.sk)
    }
}

/// Raw challenge payload as returned by `GET {server}/get-challenge`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeResponse {
    pub seed: Option<String>,
    pub diff: Option<String>,
    #[serde(default)]
    pub reward: f64,
    #[serde(rename = "lastFound", default)]
    pub last_found: u64,
}

/// The currently installed mining job. `seed == "wait"` means no job has
/// been installed yet and workers should idle.
#[derive(Debug, Clone)]
pub struct Job {
    pub seed: String,
    pub diff: [u8; 32],
    pub reward: f64,
    pub last_found_ms: u64,
}

impl Job {
    pub const WAIT_SEED: &'static str = "wait";

    pub fn waiting() -> Self {
        Self {
            seed: Self::WAIT_SEED.to_string(),
            diff: [0u8; 32],
            reward: 0.0,
            last_found_ms: 0,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.seed == Self::WAIT_SEED
    }

    /// Build a [`Job`] from a parsed server response. Returns `None` if a
    /// required field is missing or malformed — the caller discards the
    /// response and keeps the currently installed job.
    pub fn from_response(resp: ChallengeResponse) -> Option<Self> {
        let seed = resp.seed?;
        let diff_hex = resp.diff?;
        let diff = parse_diff(&diff_hex)?;
        Some(Self {
            seed,
            diff,
            reward: resp.reward,
            last_found_ms: resp.last_found,
        })
    }
}

fn parse_diff(diff_hex: &str) -> Option<[u8; 32]> {
    let bytes = hex::decode(diff_hex).ok()?;
    if bytes.len() != 32 {
        return None;
    }
    let mut diff = [0u8; 32];
    diff.copy_from_slice(&bytes);
    Some(diff)
}

/// A winning `(public key, private key, digest, reward)` quadruple,
/// produced by a mining worker on a difficulty hit.
pub struct Solution {
    pub pk: [u8; 65],
    pub sk: [u8; 32],
    pub digest: [u8; 32],
    pub reward: f64,
}

impl Solution {
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    pub fn pk_hex(&self) -> String {
        hex::encode(self.pk)
    }

    pub fn sk_hex(&self) -> String {
        hex::encode(self.sk)
    }
}
