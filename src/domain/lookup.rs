//! Derived lookup maps and display tables
//!
//! Every table has an explicit fallback for keys outside the canonical set:
//! an empty string for icons and labels, the default avatar for users.

use crate::domain::ticket::{Priority, Ticket, TicketStatus, User};
use std::collections::HashMap;

/// Avatar used for users without a dedicated picture
pub const DEFAULT_AVATAR: &str = "profile.png";

/// Availability flag of each user, keyed by user id
pub fn compute_availability(users: &[User]) -> HashMap<String, bool> {
    users
        .iter()
        .map(|user| (user.id.clone(), user.available))
        .collect()
}

/// Status of each ticket, keyed by ticket id
///
/// On duplicate ticket ids the last ticket in the list wins.
pub fn compute_status_mapping(tickets: &[Ticket]) -> HashMap<String, String> {
    tickets
        .iter()
        .map(|ticket| (ticket.id.clone(), ticket.status.clone()))
        .collect()
}

pub fn status_icon(status: &str) -> &'static str {
    TicketStatus::from_wire(status)
        .map(|s| s.icon())
        .unwrap_or("")
}

/// Column heading for a status key; unknown statuses are shown as-is
pub fn status_title(status: &str) -> String {
    TicketStatus::from_wire(status)
        .map(|s| s.to_string())
        .unwrap_or_else(|| status.to_string())
}

/// Icon for a priority group key such as `"3"`
pub fn priority_icon(key: &str) -> &'static str {
    parse_priority(key).map(|p| p.icon()).unwrap_or("")
}

/// Label for a priority group key such as `"3"`
pub fn priority_label(key: &str) -> &'static str {
    parse_priority(key).map(|p| p.label()).unwrap_or("")
}

pub fn avatar_for_user(user_id: &str) -> &'static str {
    match user_id {
        "usr-1" => "profile1.png",
        "usr-2" => "profile6.png",
        "usr-3" => "profile7.png",
        "usr-4" => "profile5.jpeg",
        "usr-5" => "profile4.jpeg",
        _ => DEFAULT_AVATAR,
    }
}

fn parse_priority(key: &str) -> Option<Priority> {
    key.parse::<i64>().ok().and_then(Priority::from_value)
}
