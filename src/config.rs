use crate::domain::{BoardView, GroupingMode, OrderBy};
use crate::error::{BoardError, Result};
use std::time::Duration;

pub const ENV_FETCH_URL: &str = "TICKETBOARD_FETCH_URL";
pub const ENV_TIMEOUT_SECS: &str = "TICKETBOARD_TIMEOUT_SECS";
pub const ENV_GROUPING: &str = "TICKETBOARD_GROUPING";
pub const ENV_ORDERING: &str = "TICKETBOARD_ORDERING";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub fetch_url: String,
    pub request_timeout: Duration,
    pub view: BoardView,
}

impl DashboardConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn new(fetch_url: impl Into<String>) -> Self {
        Self {
            fetch_url: fetch_url.into(),
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            view: BoardView::default(),
        }
    }

    /// Reads the configuration from `TICKETBOARD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch_url = lookup(ENV_FETCH_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| BoardError::Config(format!("{} is not set", ENV_FETCH_URL)))?;

        let mut config = Self::new(fetch_url);

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                BoardError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(ENV_GROUPING) {
            config.view.grouping = raw
                .parse::<GroupingMode>()
                .map_err(|e| BoardError::Config(e.to_string()))?;
        }

        if let Some(raw) = lookup(ENV_ORDERING) {
            config.view.ordering = raw
                .parse::<OrderBy>()
                .map_err(|e| BoardError::Config(e.to_string()))?;
        }

        Ok(config)
    }
}
