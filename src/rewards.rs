// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Persists a mined solution's private key to `{rewards_dir}/{coin_id}.coin`
// and, if configured, runs the operator's `on_mined` command. `coin_id` is
// the mint timestamp (seconds since epoch), matching the `time(NULL)` id
// the original miner used to name reward files.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::config::Config;
use crate::core::types::Solution;
use crate::error::{MinerError, Result};

/// Create `rewards_dir` if it doesn't exist. Called once at startup; a
/// failure here is a `Resource` error — fatal, per spec.md §7's policy
/// that only initialization failures exit the process.
pub fn ensure_rewards_dir(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.rewards_dir).map_err(|e| {
        MinerError::Resource(format!(
            "could not create rewards directory {}: {e}",
            config.rewards_dir
        ))
    })
}

/// Save the solution's private key and, if configured, run `on_mined`.
/// A non-zero exit from `on_mined` is logged but never propagated — the
/// reward is already saved regardless of what the hook does with it.
pub fn save_reward(config: &Config, solution: &Solution, coin_id: u64) -> Result<()> {
    let path = Path::new(&config.rewards_dir).join(format!("{coin_id}.coin"));
    fs::write(&path, format!("{}\n", solution.sk_hex()))?;
    info!(path = %path.display(), "reward saved");

    if !config.on_mined.is_empty() {
        run_on_mined(&config.on_mined, coin_id);
    }

    Ok(())
}

/// `on_mined` is a `%lu`-style format template, substituting the coin id
/// the same way the original command substituted its timestamp. The
/// resulting command is handed to the shell, exactly as the original's
/// `system()` call did — the operator controls this string via their own
/// config file, not untrusted input.
fn run_on_mined(template: &str, coin_id: u64) {
    let cmd = template.replace("%lu", &coin_id.to_string());
    match Command::new("sh").arg("-c").arg(&cmd).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            let err = MinerError::Command(status.code().unwrap_or(-1));
            warn!("{}", err);
        }
        Err(err) => warn!("failed to spawn on_mined command: {}", err),
    }
}
