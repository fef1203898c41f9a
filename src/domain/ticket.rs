use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticket as delivered by the data source
///
/// `status` and `priority` are kept raw so that values outside the canonical
/// sets still flow through grouping untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    pub user_id: String,
    pub status: String,
    pub priority: i64,
}

impl Ticket {
    /// Creates a backlog ticket with no priority and no assignee
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tag: Vec::new(),
            user_id: String::new(),
            status: TicketStatus::Backlog.as_str().to_string(),
            priority: Priority::NoPriority.value(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    /// Parsed status, if it is one of the canonical values
    pub fn known_status(&self) -> Option<TicketStatus> {
        TicketStatus::from_wire(&self.status)
    }

    /// Parsed priority, if it is one of the canonical levels
    pub fn known_priority(&self) -> Option<Priority> {
        Priority::from_value(self.priority)
    }
}

/// A user that tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, available: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available,
        }
    }
}

/// Response body of the data source: `{ "users": [...], "tickets": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPayload {
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
}

impl BoardPayload {
    /// User ids in the order the data source listed them
    pub fn user_ids(&self) -> Vec<String> {
        self.users.iter().map(|user| user.id.clone()).collect()
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}

/// Canonical ticket statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Backlog,
    Todo,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
    Canceled,
}

impl TicketStatus {
    /// Column order used when grouping by status
    pub const CANONICAL: [TicketStatus; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Done,
        Self::Canceled,
    ];

    /// Wire value, as it appears in ticket payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Canceled => "Canceled",
        }
    }

    /// Exact match on the wire value
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::CANONICAL
            .into_iter()
            .find(|status| status.as_str() == s)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Backlog => "bx-task-x",
            Self::Todo => "bx-circle",
            Self::InProgress => "bx-adjust",
            Self::Done => "bxs-check-circle",
            Self::Canceled => "bxs-x-circle",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Canonical priority levels, from 0 (none) to 4 (urgent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::NoPriority),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::NoPriority => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPriority => "No Priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::NoPriority => "bx-dots-horizontal-rounded",
            Self::Low => "bx-signal-2",
            Self::Medium => "bx-signal-3",
            Self::High => "bx-signal-4",
            Self::Urgent => "bxs-message-square-error",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
