//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use ticketboard::config::ENV_FETCH_URL;
use ticketboard::{BoardView, DashboardConfig, GroupingMode, OrderBy};

/// Show tickets as kanban columns.
#[derive(Debug, Parser)]
#[command(name = "ticketboard", version, about = "Show tickets as kanban columns")]
pub struct Cli {
    /// Endpoint returning `{ "users": [...], "tickets": [...] }` (falls back to TICKETBOARD_FETCH_URL).
    #[arg(long)]
    pub url: Option<String>,

    /// Read the payload from a JSON file instead of fetching it.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Column dimension: status, users or priority.
    #[arg(long, short)]
    pub grouping: Option<GroupingMode>,

    /// Ticket ordering: priority, title or none.
    #[arg(long, short)]
    pub ordering: Option<OrderBy>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the board snapshot as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Configuration for the HTTP source: environment first, flags on top.
    pub fn http_config(&self) -> ticketboard::Result<DashboardConfig> {
        let mut config = DashboardConfig::from_lookup(|key| {
            if key == ENV_FETCH_URL && self.url.is_some() {
                self.url.clone()
            } else {
                std::env::var(key).ok()
            }
        })?;

        config.view = self.apply_view(config.view);
        if let Some(secs) = self.timeout {
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn apply_view(&self, mut view: BoardView) -> BoardView {
        if let Some(grouping) = self.grouping {
            view.grouping = grouping;
        }
        if let Some(ordering) = self.ordering {
            view.ordering = ordering;
        }
        view
    }
}
