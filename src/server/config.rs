//! Environment configuration.

use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Default refresh period of the dashboard (2 minutes).
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 120;

/// Default timeout for a single upstream contract request.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default HTTP listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the upstream contract source.
    pub contracts_api_url: String,
    /// Contracts issued by this alliance contribute to item totals.
    pub tracked_alliance_id: i64,
    /// Systems tracked when the server starts.
    pub tracked_systems: Vec<String>,
    /// Period between two dashboard refresh cycles.
    pub refresh_interval: Duration,
    /// Timeout for a single upstream request.
    pub request_timeout: Duration,
    /// Address the HTTP server listens on.
    pub bind_address: String,
    /// User agent sent with upstream requests.
    pub user_agent: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - `CONTRACTS_API_URL` or `TRACKED_ALLIANCE_ID` unset
    /// - `Err(ConfigError::InvalidEnvValue)` - A value could not be parsed or is out of range
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let contracts_api_url = required("CONTRACTS_API_URL")?;
        let tracked_alliance_id = parse_i64("TRACKED_ALLIANCE_ID", &required("TRACKED_ALLIANCE_ID")?)?;

        let tracked_systems = lookup("TRACKED_SYSTEMS")
            .map(|value| parse_system_list(&value))
            .unwrap_or_default();

        let refresh_interval = match lookup("REFRESH_INTERVAL_SECONDS") {
            Some(value) => parse_seconds("REFRESH_INTERVAL_SECONDS", &value)?,
            None => Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECONDS),
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(value) => parse_seconds("REQUEST_TIMEOUT_SECONDS", &value)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let user_agent = lookup("USER_AGENT")
            .unwrap_or_else(|| format!("fuelwatch/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            contracts_api_url,
            tracked_alliance_id,
            tracked_systems,
            refresh_interval,
            request_timeout,
            bind_address,
            user_agent,
        })
    }
}

/// Splits a comma separated system list, dropping blanks and duplicates while keeping order.
pub fn parse_system_list(value: &str) -> Vec<String> {
    let mut systems: Vec<String> = Vec::new();

    for system in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !systems.iter().any(|existing| existing == system) {
            systems.push(system.to_string());
        }
    }

    systems
}

fn parse_i64(var: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn parse_seconds(var: &str, value: &str) -> Result<Duration, ConfigError> {
    let seconds = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

    if seconds == 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}
