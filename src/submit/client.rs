// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Blocking HTTP client for the three endpoints: fetching a challenge,
// submitting a solution, and reporting telemetry. Blocking is deliberate
// here — the whole miner is built on OS threads, not an async runtime,
// so each caller simply eats the latency of its own request.

use std::time::Duration;

use reqwest::blocking::Client;
use secp256k1::{Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::types::{ChallengeResponse, Job, Solution};
use crate::error::{MinerError, Result};
use crate::submit::protocol::{challenge_url, report_url, submit_url};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(config.insecure_tls)
        .build()
        .map_err(MinerError::Transport)
}

/// Poll `{server}/get-challenge`. Returns `Ok(None)` for any malformed or
/// incomplete response — the caller treats that as "no change" and keeps
/// its currently installed job, per the job manager's retry contract.
pub fn fetch_challenge(client: &Client, config: &Config) -> Result<Option<Job>> {
    let url = challenge_url(&config.server);
    let body = client.get(&url).send()?.text()?;

    let parsed: std::result::Result<ChallengeResponse, _> = serde_json::from_str(&body);
    match parsed {
        Ok(resp) => Ok(Job::from_response(resp)),
        Err(err) => {
            debug!("malformed challenge response: {}", err);
            Ok(None)
        }
    }
}

/// Sign `hex(pk)` and submit the solution. Returns `Ok(())` on a response
/// containing `"success"`, otherwise a [`MinerError::SubmissionRejected`].
pub fn submit_solution(client: &Client, config: &Config, solution: &Solution) -> Result<()> {
    let secp = Secp256k1::signing_only();
    let sk = SecretKey::from_slice(&solution.sk)
        .map_err(|e| MinerError::Protocol(format!("invalid secret key: {e}")))?;

    let pk_hex = solution.pk_hex();
    let mut hasher = Sha256::new();
    hasher.update(pk_hex.as_bytes());
    let h: [u8; 32] = hasher.finalize().into();

    let message = Message::from_digest(h);
    let signature = secp.sign_ecdsa(&message, &sk);
    let signature_der_hex = hex::encode(signature.serialize_der());

    let url = submit_url(config, solution, &signature_der_hex);
    let body = client.get(&url).send()?.text()?;

    if body.contains("success") {
        Ok(())
    } else {
        warn!("submission rejected: {}", body);
        Err(MinerError::SubmissionRejected(body))
    }
}

/// Report hashrate/total-mined telemetry. A no-op, successful call when
/// reporting is not configured.
pub fn report_status(
    client: &Client,
    config: &Config,
    hash_rate: f64,
    best_hash_hex: &str,
    total_mined: f64,
) -> Result<()> {
    if !config.telemetry_enabled() {
        return Ok(());
    }
    let url = report_url(config, hash_rate, best_hash_hex, total_mined);
    client.get(&url).send()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::PublicKey;

    #[test]
    fn submit_solution_signs_over_hash_of_hex_pubkey() {
        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&[0x07; 32]).unwrap();
        let pk = PublicKey::from_secret_key(&secp, &sk);

        let solution = Solution {
            pk: pk.serialize_uncompressed(),
            sk: sk.secret_bytes(),
            digest: [0u8; 32],
            reward: 1.0,
        };

        let pk_hex = solution.pk_hex();
        let mut hasher = Sha256::new();
        hasher.update(pk_hex.as_bytes());
        let h: [u8; 32] = hasher.finalize().into();

        let message = Message::from_digest(h);
        let signing = Secp256k1::signing_only();
        let signature = signing.sign_ecdsa(&message, &sk);

        let verifying = Secp256k1::verification_only();
        assert!(verifying.verify_ecdsa(&message, &signature, &pk).is_ok());
    }
}
