use std::fmt;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    SourceUnreachable,
    SourceDecodeFailed,
    SourceReadFailed,
    InvalidSelector,
    PriorityOutOfRange,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::SourceUnreachable => "E4001",
            Self::SourceDecodeFailed => "E4002",
            Self::SourceReadFailed => "E4003",
            Self::InvalidSelector => "E2005",
            Self::PriorityOutOfRange => "E2006",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::SourceUnreachable => "Board source unreachable",
            Self::SourceDecodeFailed => "Board payload is not valid JSON",
            Self::SourceReadFailed => "Board file could not be read",
            Self::InvalidSelector => "Invalid grouping/ordering value",
            Self::PriorityOutOfRange => "Ticket priority outside 0..=4",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in ~/.config/kanban/config.toml and retry."),
            Self::SourceUnreachable => {
                Some("Check the endpoint URL or set KANBAN_ENDPOINT to a reachable server.")
            }
            Self::SourceDecodeFailed => {
                Some("The payload must be a JSON object with `tickets` and `users` arrays.")
            }
            Self::SourceReadFailed => Some("Check the --file path and its read permissions."),
            Self::InvalidSelector => Some(
                "Use grouping=status|priority|assignee and ordering=priority|title.",
            ),
            Self::PriorityOutOfRange => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
