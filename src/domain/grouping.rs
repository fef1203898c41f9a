//! Ticket grouping engine
//!
//! Pure transformations from a flat ticket list into ordered display groups.
//! Grouping never drops or duplicates a ticket: every input ticket lands in
//! exactly one group, including tickets whose status or priority falls
//! outside the canonical sets (those get a group of their own that is not
//! listed in [`GroupedResult::keys`]).

use crate::domain::sorting::{sort_by_priority_desc, sort_by_title, OrderBy};
use crate::domain::ticket::{Ticket, TicketStatus};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Dimension used to split tickets into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    #[default]
    Status,
    Users,
    Priority,
}

impl FromStr for GroupingMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(GroupingMode::Status),
            "users" | "user" => Ok(GroupingMode::Users),
            "priority" => Ok(GroupingMode::Priority),
            _ => Err(BoardError::InvalidView(format!(
                "Invalid grouping '{}'. Valid groupings: status, users, priority",
                s
            ))),
        }
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Users => write!(f, "users"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

/// Ordered group keys plus the tickets filed under each key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedResult {
    pub mode: GroupingMode,
    /// Canonical keys to display, in display order
    pub keys: Vec<String>,
    pub groups: BTreeMap<String, Vec<Ticket>>,
}

impl GroupedResult {
    /// Tickets under `key`; empty when nothing was filed there
    pub fn group(&self, key: &str) -> &[Ticket] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of tickets across every group, listed or not
    pub fn total_tickets(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Keys of groups that hold tickets but are absent from `keys`
    pub fn ungoverned_keys(&self) -> Vec<&str> {
        self.groups
            .keys()
            .filter(|key| !self.keys.contains(*key))
            .map(String::as_str)
            .collect()
    }

    /// Keys in the order columns are drawn
    ///
    /// Priority keys are shown numerically ascending; the other modes use
    /// `keys` verbatim.
    pub fn display_keys(&self) -> Vec<String> {
        let mut keys = self.keys.clone();
        if self.mode == GroupingMode::Priority {
            keys.sort_by_key(|key| key.parse::<i64>().unwrap_or(i64::MAX));
        }
        keys
    }
}

/// Groups tickets by status under the five canonical status keys
///
/// All canonical keys are present even when no ticket carries them.
pub fn group_by_status(tickets: &[Ticket], order: OrderBy) -> GroupedResult {
    let (_, mut groups) = partition(tickets, order, |ticket| ticket.status.clone());

    for status in TicketStatus::CANONICAL {
        groups.entry(status.as_str().to_string()).or_default();
    }

    if order == OrderBy::Priority {
        groups
            .values_mut()
            .for_each(|group| sort_by_priority_desc(group));
    }

    GroupedResult {
        mode: GroupingMode::Status,
        keys: TicketStatus::CANONICAL
            .iter()
            .map(|status| status.as_str().to_string())
            .collect(),
        groups,
    }
}

/// Groups tickets by priority value, keys in first-seen order
pub fn group_by_priority(tickets: &[Ticket], order: OrderBy) -> GroupedResult {
    let (keys, groups) = partition(tickets, order, |ticket| ticket.priority.to_string());

    GroupedResult {
        mode: GroupingMode::Priority,
        keys,
        groups,
    }
}

/// Groups tickets by assignee
///
/// `keys` is `known_user_ids` verbatim, whether or not a user has tickets.
/// Tickets assigned to an unlisted user still get a group.
pub fn group_by_user(tickets: &[Ticket], order: OrderBy, known_user_ids: &[String]) -> GroupedResult {
    let (_, mut groups) = partition(tickets, order, |ticket| ticket.user_id.clone());

    if order == OrderBy::Priority {
        groups
            .values_mut()
            .for_each(|group| sort_by_priority_desc(group));
    }

    GroupedResult {
        mode: GroupingMode::Users,
        keys: known_user_ids.to_vec(),
        groups,
    }
}

/// Dispatches to the grouping operation for `mode`
pub fn group_tickets(
    tickets: &[Ticket],
    order: OrderBy,
    mode: GroupingMode,
    known_user_ids: &[String],
) -> GroupedResult {
    match mode {
        GroupingMode::Status => group_by_status(tickets, order),
        GroupingMode::Users => group_by_user(tickets, order, known_user_ids),
        GroupingMode::Priority => group_by_priority(tickets, order),
    }
}

/// Files tickets under `key_of`, after the title presort when requested
///
/// Returns the keys in first-seen order alongside the groups.
fn partition<F>(
    tickets: &[Ticket],
    order: OrderBy,
    key_of: F,
) -> (Vec<String>, BTreeMap<String, Vec<Ticket>>)
where
    F: Fn(&Ticket) -> String,
{
    let mut sorted = tickets.to_vec();
    if order == OrderBy::Title {
        sort_by_title(&mut sorted);
    }

    let mut seen = Vec::new();
    let mut groups: BTreeMap<String, Vec<Ticket>> = BTreeMap::new();
    for ticket in sorted {
        let key = key_of(&ticket);
        if !groups.contains_key(&key) {
            seen.push(key.clone());
        }
        groups.entry(key).or_default().push(ticket);
    }

    (seen, groups)
}
