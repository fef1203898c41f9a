use crate::domain::grouping::{group_tickets, GroupedResult, GroupingMode};
use crate::domain::lookup::{
    avatar_for_user, compute_availability, compute_status_mapping, priority_icon, priority_label,
    status_icon, status_title,
};
use crate::domain::sorting::OrderBy;
use crate::domain::ticket::{BoardPayload, Ticket, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grouping and ordering the board is displayed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardView {
    pub grouping: GroupingMode,
    pub ordering: OrderBy,
}

impl BoardView {
    pub fn new(grouping: GroupingMode, ordering: OrderBy) -> Self {
        Self { grouping, ordering }
    }
}

/// One display column, ready for a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column<'a> {
    pub key: String,
    pub title: String,
    pub icon: &'static str,
    /// Assignee availability; only meaningful for user columns
    pub available: bool,
    /// Assignee avatar; only set for user columns
    pub avatar: Option<&'static str>,
    pub tickets: &'a [Ticket],
}

impl Column<'_> {
    pub fn count(&self) -> usize {
        self.tickets.len()
    }
}

/// Everything derived from one fetch, replaced as a unit
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub users: Vec<User>,
    pub view: BoardView,
    pub grouped: GroupedResult,
    pub availability: HashMap<String, bool>,
    pub status_mapping: HashMap<String, String>,
    pub fetched_at: DateTime<Utc>,
}

impl BoardSnapshot {
    /// Derives the full board state from a payload
    pub fn build(payload: BoardPayload, view: BoardView) -> Self {
        let grouped = group_tickets(
            &payload.tickets,
            view.ordering,
            view.grouping,
            &payload.user_ids(),
        );

        Self {
            availability: compute_availability(&payload.users),
            status_mapping: compute_status_mapping(&payload.tickets),
            users: payload.users,
            view,
            grouped,
            fetched_at: Utc::now(),
        }
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn is_available(&self, user_id: &str) -> bool {
        self.availability.get(user_id).copied().unwrap_or(false)
    }

    /// Columns in display order
    ///
    /// Ungoverned groups (unknown status, unlisted assignee) are not
    /// columns; see [`GroupedResult::ungoverned_keys`].
    pub fn columns(&self) -> Vec<Column<'_>> {
        self.grouped
            .display_keys()
            .into_iter()
            .map(|key| self.column(key))
            .collect()
    }

    fn column(&self, key: String) -> Column<'_> {
        let tickets = self.grouped.group(&key);
        match self.view.grouping {
            GroupingMode::Status => Column {
                title: status_title(&key),
                icon: status_icon(&key),
                available: false,
                avatar: None,
                tickets,
                key,
            },
            GroupingMode::Users => Column {
                title: self
                    .find_user(&key)
                    .map(|user| user.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                icon: "",
                available: self.is_available(&key),
                avatar: Some(avatar_for_user(&key)),
                tickets,
                key,
            },
            GroupingMode::Priority => Column {
                title: priority_label(&key).to_string(),
                icon: priority_icon(&key),
                available: false,
                avatar: None,
                tickets,
                key,
            },
        }
    }
}
