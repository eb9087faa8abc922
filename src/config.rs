use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};
use strum_macros::Display;

/// Invalid startup configuration. Fatal, unlike sink failures.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    ZeroTickRate,
}

impl std::error::Error for ConfigError {}

/// Run parameters, read from `AEROTWIN_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Flight cycles per run.
    pub cycles: u32,
    /// Ticks per simulated second.
    pub tick_rate: u32,
    /// Pace ticks to the wall clock instead of running as fast as possible.
    pub realtime: bool,
    /// Seed for a reproducible random source; the OS seeds the run otherwise.
    pub seed: Option<u64>,
    pub aircraft_id: u32,
    pub visual_addr: SocketAddr,
    pub metrics_addr: SocketAddr,
    pub event_log_url: Option<String>,
    pub alert_url: Option<String>,
    pub sample_log_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cycles: 75,
            tick_rate: 60,
            realtime: true,
            seed: None,
            aircraft_id: 1,
            visual_addr: SocketAddr::from(([127, 0, 0, 1], 5502)),
            metrics_addr: SocketAddr::from(([127, 0, 0, 1], 8094)),
            event_log_url: None,
            alert_url: None,
            sample_log_path: PathBuf::from("Dornier_228_HighFidelity_Dataset.csv"),
        }
    }
}

impl SimConfig {
    const CYCLES: &'static str = "AEROTWIN_CYCLES";
    const TICK_RATE: &'static str = "AEROTWIN_TICK_RATE";
    const REALTIME: &'static str = "AEROTWIN_REALTIME";
    const SEED: &'static str = "AEROTWIN_SEED";
    const AIRCRAFT_ID: &'static str = "AEROTWIN_AIRCRAFT_ID";
    const FG_ADDR: &'static str = "AEROTWIN_FG_ADDR";
    const METRICS_ADDR: &'static str = "AEROTWIN_METRICS_ADDR";
    const EVENT_LOG_URL: &'static str = "AEROTWIN_EVENT_LOG_URL";
    const ALERT_URL: &'static str = "AEROTWIN_ALERT_URL";
    const SAMPLE_LOG: &'static str = "AEROTWIN_SAMPLE_LOG";

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for any variable that is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| env::var(key).ok()) }

    /// Builds the configuration from an arbitrary key lookup, falling back to the
    /// defaults for unset or empty keys.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for any value that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let tick_rate = parse_or(Self::TICK_RATE, get(Self::TICK_RATE), defaults.tick_rate)?;
        if tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let realtime = match get(Self::REALTIME) {
            None => defaults.realtime,
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidValue { key: Self::REALTIME, value: v })?,
        };
        let seed = match get(Self::SEED) {
            None => None,
            Some(v) => Some(parse(Self::SEED, v)?),
        };

        Ok(Self {
            cycles: parse_or(Self::CYCLES, get(Self::CYCLES), defaults.cycles)?,
            tick_rate,
            realtime,
            seed,
            aircraft_id: parse_or(Self::AIRCRAFT_ID, get(Self::AIRCRAFT_ID), defaults.aircraft_id)?,
            visual_addr: parse_or(Self::FG_ADDR, get(Self::FG_ADDR), defaults.visual_addr)?,
            metrics_addr: parse_or(Self::METRICS_ADDR, get(Self::METRICS_ADDR), defaults.metrics_addr)?,
            event_log_url: get(Self::EVENT_LOG_URL),
            alert_url: get(Self::ALERT_URL),
            sample_log_path: get(Self::SAMPLE_LOG).map_or(defaults.sample_log_path, PathBuf::from),
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |v| parse(key, v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
