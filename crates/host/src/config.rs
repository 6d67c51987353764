//! Host configuration, read from `CUBETRIS_*` environment variables.
//!
//! Unset or unparsable values fall back to defaults.

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Seed for the piece generator
    pub seed: u32,
    /// Gravity period in milliseconds
    pub tick_ms: u64,
    /// Capacity of the command channel
    pub max_pending_commands: usize,
    /// Start a game as soon as the host comes up
    pub autostart: bool,
    /// Print `[Host]` lifecycle lines to stderr
    pub log_events: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            max_pending_commands: 16,
            autostart: true,
            log_events: true,
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key/value source (same keys as [`Self::from_env`])
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("CUBETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(seed_from_clock);

        let tick_ms = lookup("CUBETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.tick_ms)
            .max(1);

        let max_pending_commands = lookup("CUBETRIS_MAX_PENDING")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.max_pending_commands)
            .max(1);

        let autostart = lookup("CUBETRIS_AUTOSTART")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.autostart);

        let log_events = lookup("CUBETRIS_LOG")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.log_events);

        Self {
            seed,
            tick_ms,
            max_pending_commands,
            autostart,
            log_events,
        }
    }

    /// Gravity period
    ///
    /// Never zero: `from_lookup` clamps `tick_ms`, but the fields are public and
    /// a hand-built config may still carry 0, which `tokio::time::interval`
    /// rejects.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
