//! Host server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set or is blank.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be used.
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin the `/api/*` routes are forwarded to, without a trailing `/`.
    pub api_upstream: String,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `API_UPSTREAM_URL`: `http://` or `https://` origin of the words API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream_timeout_secs =
            parse_or("API_UPSTREAM_TIMEOUT_SECS", lookup("API_UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        let raw = lookup("API_UPSTREAM_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing { var: "API_UPSTREAM_URL" })?;
        let api_upstream = raw.trim().trim_end_matches('/').to_string();
        if !(api_upstream.starts_with("http://") || api_upstream.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "API_UPSTREAM_URL", value: raw });
        }

        Ok(Self { port, api_upstream, upstream_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::Invalid { var, value })
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
