//! Service configuration, read once at startup.

use std::fmt;
use std::net::SocketAddr;

use crate::error::Error;

/// Shared public credential NASA hands out for light, rate-limited use.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Immutable after construction; hand it to [`app::build`](crate::app::build).
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `NASA_API_KEY` | `DEMO_KEY` |
    /// | `NASA_BASE_URL` | `https://api.nasa.gov` |
    /// | `BIND_ADDR` | `127.0.0.1:8000` |
    /// | `RUST_LOG` | `info` |
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let raw_addr = var("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr.parse().map_err(|_| {
            Error::Config(format!("BIND_ADDR `{raw_addr}` is not a socket address"))
        })?;

        Ok(Self {
            api_key: var("NASA_API_KEY", DEMO_API_KEY),
            base_url: var("NASA_BASE_URL", DEFAULT_BASE_URL).trim_end_matches('/').to_owned(),
            bind_addr,
            log_level: var("RUST_LOG", DEFAULT_LOG_LEVEL),
        })
    }

    /// Defaults everywhere except the upstream base URL. Handy for tests.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_key: DEMO_API_KEY.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            bind_addr: ([127, 0, 0, 1], 8000).into(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .finish()
    }
}
