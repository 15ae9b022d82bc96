//! Ticket projection: tickets + users + selectors → ordered board columns.
//!
//! [`project`] is a pure function. It borrows the fetched collections and
//! returns [`Group`]s that reference the original tickets; nothing is cloned
//! or mutated.

use crate::collate::locale_cmp;
use crate::error::ErrorCode;
use crate::model::{BoardData, Grouping, Ordering, Priority, Status, Ticket, TicketField, User};
use crate::view::ViewSelectors;
use serde::Serialize;
use std::collections::HashMap;

/// Column label for tickets whose `userId` matches no user.
pub const UNASSIGNED: &str = "Unassigned";

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<'a> {
    /// Display label of the column.
    pub key: String,
    pub tickets: Vec<&'a Ticket>,
}

impl Group<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Ticket ids in column order.
    #[must_use]
    pub fn ticket_ids(&self) -> Vec<&str> {
        self.tickets.iter().map(|t| t.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Text(&'a str),
    Priority(Priority),
}

impl GroupKey<'_> {
    fn label(self) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::Priority(priority) => priority.label().to_string(),
        }
    }
}

/// First-encountered-order buckets.
struct Buckets<'a> {
    order: Vec<(GroupKey<'a>, Vec<&'a Ticket>)>,
    index: HashMap<GroupKey<'a>, usize>,
}

impl<'a> Buckets<'a> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn slot(&mut self, key: GroupKey<'a>) -> &mut Vec<&'a Ticket> {
        let idx = if let Some(&idx) = self.index.get(&key) {
            idx
        } else {
            self.order.push((key, Vec::new()));
            let idx = self.order.len() - 1;
            self.index.insert(key, idx);
            idx
        };
        &mut self.order[idx].1
    }
}

fn priority_key(ticket: &Ticket) -> Priority {
    ticket.priority_level().unwrap_or_else(|err| {
        tracing::warn!(
            code = %ErrorCode::PriorityOutOfRange,
            ticket = %ticket.id,
            %err,
            "grouping ticket under {}",
            Priority::NoPriority.label()
        );
        Priority::NoPriority
    })
}

fn field_value(ticket: &Ticket, field: TicketField) -> &str {
    match field {
        TicketField::Id => &ticket.id,
        TicketField::Title => &ticket.title,
        TicketField::UserId => &ticket.user_id,
    }
}

fn sort_tickets(tickets: &mut [&Ticket], ordering: Ordering) {
    match ordering {
        Ordering::Priority => tickets.sort_by_key(|t| t.priority),
        Ordering::Title => tickets.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
    }
}

/// Group and order tickets for display.
///
/// - `Status` grouping always yields the five canonical columns in board
///   order, empty ones included; tickets with any other status get extra
///   columns after them, in first-encountered order.
/// - Every other grouping yields columns in first-encountered order.
/// - Tickets inside a column are stably sorted by the ordering selector.
///
/// Every input ticket appears in exactly one column.
#[must_use]
pub fn project<'a>(
    tickets: &'a [Ticket],
    users: &'a [User],
    selectors: &ViewSelectors,
) -> Vec<Group<'a>> {
    let mut names: HashMap<&str, &str> = HashMap::with_capacity(users.len());
    for user in users {
        names.entry(user.id.as_str()).or_insert(user.name.as_str());
    }

    let mut buckets = Buckets::new();
    if selectors.grouping == Grouping::Status {
        for label in Status::CANONICAL.iter().filter_map(Status::known_label) {
            buckets.slot(GroupKey::Text(label));
        }
    }

    for ticket in tickets {
        let key = match selectors.grouping {
            Grouping::Assignee => {
                GroupKey::Text(names.get(ticket.user_id.as_str()).copied().unwrap_or(UNASSIGNED))
            }
            Grouping::Priority => GroupKey::Priority(priority_key(ticket)),
            Grouping::Status => GroupKey::Text(ticket.status.as_str()),
            Grouping::Field(field) => GroupKey::Text(field_value(ticket, field)),
        };
        buckets.slot(key).push(ticket);
    }

    tracing::debug!(
        grouping = %selectors.grouping,
        ordering = %selectors.ordering,
        tickets = tickets.len(),
        groups = buckets.order.len(),
        "projected board"
    );

    buckets
        .order
        .into_iter()
        .map(|(key, mut tickets)| {
            sort_tickets(&mut tickets, selectors.ordering);
            Group {
                key: key.label(),
                tickets,
            }
        })
        .collect()
}

/// [`project`] over a fetched payload.
#[must_use]
pub fn project_board<'a>(data: &'a BoardData, selectors: &ViewSelectors) -> Vec<Group<'a>> {
    project(&data.tickets, &data.users, selectors)
}
