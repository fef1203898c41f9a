use crate::domain::ticket::Ticket;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How tickets are ordered within (or before) grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Descending priority inside each group
    #[default]
    Priority,
    /// Ascending title across the whole list, applied before grouping
    Title,
    /// Input order is kept as-is
    #[serde(rename = "none")]
    Unordered,
}

impl FromStr for OrderBy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(OrderBy::Priority),
            "title" => Ok(OrderBy::Title),
            "none" => Ok(OrderBy::Unordered),
            _ => Err(BoardError::InvalidView(format!(
                "Invalid ordering '{}'. Valid orderings: priority, title, none",
                s
            ))),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Title => write!(f, "title"),
            Self::Unordered => write!(f, "none"),
        }
    }
}

/// Sorts tickets by title, ascending
///
/// Stable: tickets with identical titles keep their relative order.
///
/// # Examples
/// ```
/// use ticketboard::domain::sorting::sort_by_title;
/// use ticketboard::domain::ticket::Ticket;
///
/// let mut tickets = vec![Ticket::new("t1", "Zeta"), Ticket::new("t2", "alpha")];
/// sort_by_title(&mut tickets);
/// assert_eq!(tickets[0].id, "t2");
/// ```
pub fn sort_by_title(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| compare_titles(&a.title, &b.title));
}

/// Sorts tickets by priority, highest first
///
/// Stable: equal priorities keep the order they arrived in, which may itself
/// be a title order.
pub fn sort_by_priority_desc(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Locale-style title comparison
///
/// Primary key is the base letter with accents and case removed, so "Éclair"
/// sorts among the E's. Accents break ties next (unaccented first), then case
/// (lowercase first).
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
