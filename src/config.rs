//! Service configuration.
//!
//! Everything is read once at start-up (after `.env` is loaded) and handed
//! to the application state. Scoring code never looks at the environment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PAGESPEED_BASE_URL: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com/search.json";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Device profile PageSpeed Insights emulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Mobile,
    Desktop,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Strategy::Mobile),
            "desktop" => Ok(Strategy::Desktop),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,

    /// Listen port.
    pub port: u16,

    /// PageSpeed Insights key. Requests fail with a configuration error without it.
    pub pagespeed_api_key: Option<String>,

    /// SerpApi key. Visibility scoring is skipped without it.
    pub serpapi_key: Option<String>,

    pub pagespeed_strategy: Strategy,

    pub pagespeed_base_url: String,

    pub serpapi_base_url: String,

    /// Timeout applied to every outbound provider request.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            pagespeed_api_key: None,
            serpapi_key: None,
            pagespeed_strategy: Strategy::default(),
            pagespeed_base_url: DEFAULT_PAGESPEED_BASE_URL.to_string(),
            serpapi_base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
            http_timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port: u16 = match get("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => defaults.port,
        };

        let http_timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "HTTP_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => defaults.http_timeout_secs,
        };

        let pagespeed_strategy: Strategy = match get("PAGESPEED_STRATEGY") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PAGESPEED_STRATEGY",
                value,
            })?,
            None => defaults.pagespeed_strategy,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            pagespeed_api_key: get("PAGESPEED_API_KEY"),
            serpapi_key: get("SERPAPI_KEY"),
            pagespeed_strategy,
            pagespeed_base_url: get("PAGESPEED_BASE_URL").unwrap_or(defaults.pagespeed_base_url),
            serpapi_base_url: get("SERPAPI_BASE_URL").unwrap_or(defaults.serpapi_base_url),
            http_timeout_secs,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
