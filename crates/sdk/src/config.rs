//! Client configuration loaded from defaults or the environment

use crate::error::{Result, SdkError};
use std::time::Duration;

/// Public ProbModelSEED endpoint
pub const DEFAULT_URL: &str = "https://p3.theseed.org/services/ProbModelSEED";

pub const ENV_URL: &str = "PROBMODELSEED_URL";
pub const ENV_TOKEN: &str = "PROBMODELSEED_TOKEN";
/// Fallback token variable shared with other KBase clients
pub const ENV_KB_TOKEN: &str = "KB_AUTH_TOKEN";
pub const ENV_USER_ID: &str = "PROBMODELSEED_USER_ID";
pub const ENV_TIMEOUT_SECS: &str = "PROBMODELSEED_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub token: Option<String>,
    pub user_id: Option<String>,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            token: None,
            user_id: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `PROBMODELSEED_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let timeout = match non_empty(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    SdkError::Config(format!("{} must be an integer, got '{}'", ENV_TIMEOUT_SECS, raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            url: non_empty(ENV_URL).unwrap_or_else(|| DEFAULT_URL.to_string()),
            token: non_empty(ENV_TOKEN).or_else(|| non_empty(ENV_KB_TOKEN)),
            user_id: non_empty(ENV_USER_ID),
            timeout,
        })
    }
}
