// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Loads the miner's `key = value` config file. This is deliberately not
// TOML: values are unquoted or double-quoted strings, `#` starts a comment,
// and there are no sections or typed values — the format the original
// C miner's own parser accepted.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub rewards_dir: String,
    pub thread_count: i64,
    pub job_interval: u64,
    pub report_interval: u64,
    pub on_mined: String,
    pub report_server: String,
    pub report_user: String,
    pub pool_secret: String,
    pub insecure_tls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "https://clc.ix.tc".to_string(),
            rewards_dir: "./rewards".to_string(),
            thread_count: -1,
            job_interval: 1,
            report_interval: 10,
            on_mined: String::new(),
            report_server: String::new(),
            report_user: String::new(),
            pool_secret: String::new(),
            insecure_tls: true,
        }
    }
}

impl Config {
    /// Load the config from `path`. A missing file falls back to defaults
    /// rather than failing — only a file that exists but cannot be read at
    /// all is worth a warning.
    pub fn load(path: &Path) -> Self {
        let mut config = Config::default();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                warn!("config file {:?} not found, using default values", path);
                return config;
            }
        };

        for line in contents.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = unquote(value.trim());

            match key {
                "server" => config.server = value.to_string(),
                "rewards_dir" => config.rewards_dir = value.to_string(),
                "thread" => config.thread_count = value.parse().unwrap_or(config.thread_count),
                "job_interval" => config.job_interval = value.parse().unwrap_or(config.job_interval),
                "report_interval" => {
                    config.report_interval = value.parse().unwrap_or(config.report_interval)
                }
                "on_mined" => config.on_mined = value.to_string(),
                "report_server" => config.report_server = value.to_string(),
                "report_user" => config.report_user = value.to_string(),
                "pool_secret" => config.pool_secret = value.to_string(),
                "insecure_tls" => {
                    config.insecure_tls = matches!(value, "1" | "true" | "yes")
                }
                _ => {} // unrecognized keys are ignored, per spec
            }
        }

        info!("loaded config from {:?}", path);
        info!("server = {}", config.server);
        info!("rewards_dir = {}", config.rewards_dir);
        info!("thread = {}", config.thread_count);
        info!("job_interval = {}", config.job_interval);
        info!("report_interval = {}", config.report_interval);
        info!("on_mined = {}", config.on_mined);
        info!("report_server = {}", config.report_server);
        info!("report_user = {}", config.report_user);
        info!(
            "pool_secret = {}",
            if config.pool_secret.is_empty() { "(none)" } else { "***" }
        );

        config
    }

    pub fn pool_mode(&self) -> bool {
        !self.pool_secret.is_empty()
    }

    pub fn telemetry_enabled(&self) -> bool {
        !self.report_server.is_empty() && !self.report_user.is_empty()
    }

    /// Resolve the configured thread count against the online CPU count.
    pub fn resolved_thread_count(&self) -> usize {
        let count = if self.thread_count < 0 {
            num_cpus::get()
        } else {
            self.thread_count as usize
        };
        count.min(crate::mining::MAX_THREADS)
    }
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/clcminer.conf"));
        assert_eq!(config.server, "https://clc.ix.tc");
        assert_eq!(config.thread_count, -1);
    }

    #[test]
    fn parses_quoted_and_unquoted_values_and_skips_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "# a comment\nserver = \"http://127.0.0.1:9000\"\nthread = 4\npool_secret=abcd\nunknown_key = ignored\n"
        )
        .unwrap();

        let config = Config::load(file.path());
        assert_eq!(config.server, "http://127.0.0.1:9000");
        assert_eq!(config.thread_count, 4);
        assert_eq!(config.pool_secret, "abcd");
        assert!(config.pool_mode());
    }
}
