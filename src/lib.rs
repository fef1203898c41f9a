//! # Ticketboard
//!
//! Ticket grouping engine and fetch orchestration for kanban-style dashboards.
//!
//! A [`DataSource`] supplies users and tickets; the grouping engine in
//! [`domain`] turns the flat ticket list into ordered columns by status,
//! assignee or priority; [`Dashboard`] ties the two together and keeps the
//! latest [`BoardSnapshot`] for a renderer to read.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod source;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, RefreshOutcome};
pub use domain::{
    board::{BoardSnapshot, BoardView, Column},
    grouping::{GroupedResult, GroupingMode},
    sorting::OrderBy,
    ticket::{BoardPayload, Priority, Ticket, TicketStatus, User},
};
pub use error::{BoardError, Result};
pub use source::{DataSource, FileSource, HttpSource};
