//! Page configuration parsed from environment variables.

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_MAX_COMMENTS: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HAPPINESS_PATH: &str = "/static/data/happiest_countries.json";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment value was present but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Origin the backend endpoints are resolved against, without a trailing `/`.
    pub base_url: String,
    /// Page size used until the user picks another one.
    pub default_max_comments: u32,
    /// Per-request timeout. Ignored in the browser.
    pub request_timeout_secs: u64,
    pub happiness_path: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_max_comments: DEFAULT_MAX_COMMENTS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            happiness_path: DEFAULT_HAPPINESS_PATH.to_string(),
        }
    }
}

impl PageConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORTFOLIO_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `PORTFOLIO_MAX_COMMENTS`: default 10
    /// - `PORTFOLIO_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PORTFOLIO_HAPPINESS_PATH`: default `/static/data/happiest_countries.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = std::env::var("PORTFOLIO_BASE_URL").unwrap_or(defaults.base_url);
        let default_max_comments = env_parse("PORTFOLIO_MAX_COMMENTS", defaults.default_max_comments)?;
        let request_timeout_secs = env_parse("PORTFOLIO_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
        let happiness_path = std::env::var("PORTFOLIO_HAPPINESS_PATH").unwrap_or(defaults.happiness_path);

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            default_max_comments,
            request_timeout_secs,
            happiness_path: normalize_path(&happiness_path),
        })
    }

    /// Replace the base URL, trimming any trailing `/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Endpoint paths are joined onto `base_url`, so they always start with `/`.
fn normalize_path(raw: &str) -> String {
    format!("/{}", raw.trim().trim_start_matches('/'))
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
