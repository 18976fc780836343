//! Server configuration from the process environment

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{RelayError, RelayResult};

/// Listen port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Idle-room TTL when `RELAY_ROOM_TTL_SECS` is unset (one hour)
pub const DEFAULT_ROOM_TTL_SECS: u64 = 3600;

/// Sweep period when `RELAY_SWEEP_INTERVAL_SECS` is unset
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Runtime settings for the relay server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` disables idle-room eviction
    pub room_idle_ttl: Option<Duration>,
    pub sweep_interval: Duration,
    /// Expose `GET /debug-rooms`
    pub debug_rooms: bool,
}

impl Config {
    /// Read settings from environment variables
    pub fn from_env() -> RelayResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> RelayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("RELAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let ttl_secs = parse_or(&lookup, "RELAY_ROOM_TTL_SECS", DEFAULT_ROOM_TTL_SECS)?;
        let sweep_secs = parse_or(
            &lookup,
            "RELAY_SWEEP_INTERVAL_SECS",
            DEFAULT_SWEEP_INTERVAL_SECS,
        )?;
        let debug_rooms = parse_or(&lookup, "RELAY_DEBUG_ROOMS", true)?;

        if sweep_secs == 0 {
            return Err(RelayError::Config {
                key: "RELAY_SWEEP_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            room_idle_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            sweep_interval: Duration::from_secs(sweep_secs),
            debug_rooms,
        })
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            room_idle_ttl: Some(Duration::from_secs(DEFAULT_ROOM_TTL_SECS)),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            debug_rooms: true,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> RelayResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| RelayError::Config { key, value: raw }),
        _ => Ok(default),
    }
}
