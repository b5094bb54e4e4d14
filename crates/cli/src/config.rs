use std::path::PathBuf;

use chrono::{DateTime, Utc};
use notifi_history_core::clock::{Clock, FixedClock, SystemClock};
use notifi_history_core::error::CoreError;
use notifi_history_core::timestamp::{offset_from_minutes, DisplayZone};
use notifi_history_core::types::Timestamp;

/// CLI configuration loaded from environment variables.
///
/// | Env Var                      | Default     |
/// |------------------------------|-------------|
/// | `HISTORY_LOCALE_PATH`        | built-in English strings |
/// | `HISTORY_UTC_OFFSET_MINUTES` | local zone  |
/// | `HISTORY_NOW`                | system clock |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Locale JSON file overriding the built-in strings.
    pub locale_path: Option<PathBuf>,
    /// Zone wall-clock times are rendered in: the host's local zone unless a
    /// fixed offset is configured.
    pub zone: DisplayZone,
    /// RFC 3339 instant to measure record age against, for reproducible runs.
    pub fixed_now: Option<Timestamp>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let locale_path = get("HISTORY_LOCALE_PATH").map(PathBuf::from);

        let zone = match get("HISTORY_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = raw.parse().map_err(|_| {
                    CoreError::Validation(format!(
                        "HISTORY_UTC_OFFSET_MINUTES must be an integer, got '{raw}'"
                    ))
                })?;
                let offset = offset_from_minutes(minutes).ok_or_else(|| {
                    CoreError::Validation(format!(
                        "HISTORY_UTC_OFFSET_MINUTES must be within ±1439, got {minutes}"
                    ))
                })?;
                DisplayZone::Fixed(offset)
            }
            None => DisplayZone::Local,
        };

        let fixed_now = get("HISTORY_NOW")
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| {
                        CoreError::Validation(format!(
                            "HISTORY_NOW must be an RFC 3339 timestamp: {e}"
                        ))
                    })
            })
            .transpose()?;

        Ok(Self {
            locale_path,
            zone,
            fixed_now,
        })
    }

    pub fn clock(&self) -> ConfiguredClock {
        match self.fixed_now {
            Some(now) => ConfiguredClock::Fixed(FixedClock(now)),
            None => ConfiguredClock::System(SystemClock),
        }
    }
}

/// Clock selected by configuration.
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for ConfiguredClock {
    fn now(&self) -> Timestamp {
        match self {
            ConfiguredClock::System(clock) => clock.now(),
            ConfiguredClock::Fixed(clock) => clock.now(),
        }
    }
}
