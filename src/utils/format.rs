// clc-miner — proof-of-work miner for the CLC challenge pool.
// Licensed under the MIT License.
//
// Human-readable formatting for hashrates, durations, and large counts.

use std::time::Duration;

pub struct FormatUtils;

impl FormatUtils {
    /// Format a hashrate in the largest appropriate unit, H/s through
    /// TH/s.
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000_000_000.0 {
            format!("{:.2} TH/s", hashrate / 1_000_000_000_000.0)
        } else if hashrate >= 1_000_000_000.0 {
            format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
        } else if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} KH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{}s ago", secs)
        } else if secs < 3600 {
            format!("{}m ago", secs / 60)
        } else {
            format!("{}h ago", secs / 3600)
        }
    }

    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hashrate_picks_unit_by_magnitude() {
        assert_eq!(FormatUtils::format_hashrate(500.0), "500.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(1_500.0), "1.50 KH/s");
        assert_eq!(FormatUtils::format_hashrate(2_500_000.0), "2.50 MH/s");
    }

    #[test]
    fn format_number_uses_suffixes() {
        assert_eq!(FormatUtils::format_number(999), "999");
        assert_eq!(FormatUtils::format_number(1_500), "1.5K");
        assert_eq!(FormatUtils::format_number(2_500_000), "2.5M");
    }
}
