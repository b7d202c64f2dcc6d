//! Build-time client configuration.
//!
//! Values come from environment variables present when the crate is
//! compiled (e.g. by `trunk build`), since a browser bundle has no runtime
//! environment of its own.

use tracing::Level;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base: String,
    /// Number of candidates requested per search.
    pub search_limit: usize,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Read `AICHEF_API_BASE`, `AICHEF_SEARCH_LIMIT` and `AICHEF_LOG`.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("AICHEF_API_BASE"),
            option_env!("AICHEF_SEARCH_LIMIT"),
            option_env!("AICHEF_LOG"),
        )
    }

    fn from_values(api_base: Option<&str>, limit: Option<&str>, log: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            search_limit: limit
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.search_limit),
            log_level: log
                .and_then(|s| s.trim().parse::<Level>().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Join an absolute API path onto the configured base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
