use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a ticket.
///
/// The five canonical statuses have a fixed board order (see
/// [`Status::CANONICAL`]). Anything else the API sends is preserved verbatim
/// in [`Status::Other`] rather than failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Backlog,
    Todo,
    InProgress,
    Done,
    Cancelled,
    Other(String),
}

impl Status {
    /// Board column order for status grouping.
    pub const CANONICAL: [Self; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Done,
        Self::Cancelled,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(raw) => raw,
            known => known.known_label().unwrap_or_default(),
        }
    }

    /// Static label of a canonical status; `None` for [`Status::Other`].
    #[must_use]
    pub const fn known_label(&self) -> Option<&'static str> {
        match self {
            Self::Backlog => Some("Backlog"),
            Self::Todo => Some("Todo"),
            Self::InProgress => Some("In progress"),
            Self::Done => Some("Done"),
            Self::Cancelled => Some("Cancelled"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Backlog" => Self::Backlog,
            "Todo" => Self::Todo,
            "In progress" => Self::InProgress,
            "Done" => Self::Done,
            "Cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket priority levels. The discriminant is the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    NoPriority = 0,
    Urgent = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl Priority {
    /// All levels indexed by wire value.
    pub const ALL: [Self; 5] = [
        Self::NoPriority,
        Self::Urgent,
        Self::High,
        Self::Medium,
        Self::Low,
    ];

    /// Column label shown on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPriority => "No priority",
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    #[must_use]
    pub const fn level(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Priority {
    type Error = PriorityOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(PriorityOutOfRange { value })
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a ticket carries a priority with no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("priority {value} is outside 0..=4")]
pub struct PriorityOutOfRange {
    pub value: i64,
}

/// A single ticket as delivered by the board API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub priority: i64,
    pub status: Status,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub tag: Vec<String>,
}

impl Ticket {
    /// Checked priority lookup.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityOutOfRange`] when the raw value has no label.
    pub fn priority_level(&self) -> Result<Priority, PriorityOutOfRange> {
        Priority::try_from(self.priority)
    }
}

/// A board user; only used to resolve assignee names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    /// Up to two uppercase initials, used as the card avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The full payload returned by the board endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardData {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }

    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}
