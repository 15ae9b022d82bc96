use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Raw ticket fields usable as a generic grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TicketField {
    Id,
    Title,
    UserId,
}

impl TicketField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::UserId => "userId",
        }
    }
}

/// Which attribute partitions tickets into board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Status,
    Priority,
    Assignee,
    /// Group by a raw field value, in first-encountered order.
    #[serde(untagged)]
    Field(TicketField),
}

impl Grouping {
    /// The selectable values, in menu order.
    pub const OPTIONS: [Self; 3] = [Self::Status, Self::Priority, Self::Assignee];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Assignee => "assignee",
            Self::Field(field) => field.as_str(),
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::Priority => "Priority",
            Self::Assignee => "Assignee",
            Self::Field(TicketField::Id) => "Id",
            Self::Field(TicketField::Title) => "Title",
            Self::Field(TicketField::UserId) => "User",
        }
    }
}

/// Sort order applied inside each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    #[default]
    Priority,
    Title,
}

impl Ordering {
    pub const OPTIONS: [Self; 2] = [Self::Priority, Self::Title];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::Title => "Title",
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a selector value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseSelectorError {
    pub expected: &'static str,
    pub got: String,
}

impl FromStr for Grouping {
    type Err = ParseSelectorError;

    /// Accepts only the exact lowercase selectable groupings; raw-field
    /// grouping is API-only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ParseSelectorError {
                expected: "grouping",
                got: s.to_string(),
            })
    }
}

impl FromStr for Ordering {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ParseSelectorError {
                expected: "ordering",
                got: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_status_and_priority() {
        assert_eq!(Grouping::default(), Grouping::Status);
        assert_eq!(Ordering::default(), Ordering::Priority);
    }

    #[test]
    fn display_parse_roundtrips() {
        for value in Grouping::OPTIONS {
            assert_eq!(value.to_string().parse::<Grouping>(), Ok(value));
        }
        for value in Ordering::OPTIONS {
            assert_eq!(value.to_string().parse::<Ordering>(), Ok(value));
        }
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "swimlane".parse::<Grouping>().unwrap_err();
        assert_eq!(err.to_string(), "invalid grouping: 'swimlane'");
        assert!("title".parse::<Grouping>().is_err());
        assert!("status".parse::<Ordering>().is_err());
    }

    #[test]
    fn parse_requires_exact_lowercase() {
        assert!(" assignee ".parse::<Grouping>().is_err());
        assert!("Assignee".parse::<Grouping>().is_err());
        assert!("TITLE".parse::<Ordering>().is_err());
        assert_eq!("assignee".parse::<Grouping>(), Ok(Grouping::Assignee));
    }

    #[test]
    fn field_grouping_uses_wire_field_names() {
        assert_eq!(Grouping::Field(TicketField::UserId).as_str(), "userId");
        assert_eq!(
            serde_json::to_string(&Grouping::Field(TicketField::Title)).unwrap(),
            "\"title\""
        );
        assert_eq!(
            serde_json::to_string(&Grouping::Assignee).unwrap(),
            "\"assignee\""
        );
    }
}
