// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// URL construction for the three HTTP endpoints the miner talks to:
// get-challenge, challenge-solved, and report. Kept free of any I/O so
// the query-string shape can be checked without a network stack.

use crate::config::Config;
use crate::core::types::Solution;

pub fn challenge_url(server: &str) -> String {
    format!("{}/get-challenge", server.trim_end_matches('/'))
}

/// Build the submission URL, appending `poolsecret`/`key` only when the
/// miner is running in pool mode.
pub fn submit_url(config: &Config, solution: &Solution, signature_der_hex: &str) -> String {
    let base = config.server.trim_end_matches('/');
    if config.pool_mode() {
        format!(
            "{}/challenge-solved?holder={}&sign={}&hash={}&poolsecret={}&key={}",
            base,
            solution.pk_hex(),
            signature_der_hex,
            solution.digest_hex(),
            config.pool_secret,
            solution.sk_hex(),
        )
    } else {
        format!(
            "{}/challenge-solved?holder={}&sign={}&hash={}",
            base,
            solution.pk_hex(),
            signature_der_hex,
            solution.digest_hex(),
        )
    }
}

pub fn report_url(config: &Config, hash_rate: f64, best_hash_hex: &str, total_mined: f64) -> String {
    format!(
        "{}/report?user={}&speed={:.2}&best={}&mined={:.2}",
        config.report_server.trim_end_matches('/'),
        config.report_user,
        hash_rate,
        best_hash_hex,
        total_mined,
    )
}
