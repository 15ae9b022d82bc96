//! Terminal board: one section per column, one card per ticket.

use crate::output::{pretty_rule, pretty_section};
use kanban_core::model::{BoardData, Grouping, Ordering, Ticket};
use kanban_core::projector::Group;
use kanban_core::view::ViewSelectors;
use serde::Serialize;
use std::io::{self, Write};

/// Placeholder avatar for tickets without a known user.
const NO_AVATAR: &str = "--";

/// Column glyph keyed by display label.
#[must_use]
pub fn glyph(label: &str) -> &'static str {
    match label {
        "Backlog" => "◌",
        "Todo" => "○",
        "In progress" => "◑",
        "Done" => "●",
        "Cancelled" => "⊘",
        "No priority" => "···",
        "Urgent" => "[!]",
        "High" => "▃▅▇",
        "Medium" => "▃▅ ",
        "Low" => "▃  ",
        _ => "@",
    }
}

#[derive(Debug, Serialize)]
pub struct Card<'a> {
    #[serde(flatten)]
    pub ticket: &'a Ticket,
    pub avatar: String,
}

#[derive(Debug, Serialize)]
pub struct Column<'a> {
    pub key: String,
    pub count: usize,
    pub tickets: Vec<Card<'a>>,
}

/// Everything `kb board` prints.
#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    pub query: String,
    pub grouping: Grouping,
    pub ordering: Ordering,
    pub source: String,
    pub groups: Vec<Column<'a>>,
}

impl<'a> BoardView<'a> {
    pub fn new(
        selectors: ViewSelectors,
        source: String,
        data: &'a BoardData,
        groups: Vec<Group<'a>>,
    ) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| Column {
                count: group.len(),
                key: group.key,
                tickets: group
                    .tickets
                    .into_iter()
                    .map(|ticket| Card {
                        ticket,
                        avatar: data
                            .user(&ticket.user_id)
                            .map_or_else(|| NO_AVATAR.to_string(), |user| user.initials()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            query: selectors.to_query(),
            grouping: selectors.grouping,
            ordering: selectors.ordering,
            source,
            groups,
        }
    }

    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(|c| c.count).sum()
    }
}

/// Pretty board: sections with glyph, label and count, then cards.
pub fn write_pretty(board: &BoardView<'_>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "Display  grouping: {}  ordering: {}",
        board.grouping.text(),
        board.ordering.text()
    )?;
    writeln!(w, "?{}", board.query)?;
    writeln!(w)?;

    for column in &board.groups {
        pretty_section(
            w,
            &format!("{} {} {}", glyph(&column.key), column.key, column.count),
        )?;
        if column.tickets.is_empty() {
            writeln!(w, "  No tickets available")?;
        }
        for card in &column.tickets {
            write_card(card, w)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn write_card(card: &Card<'_>, w: &mut dyn Write) -> io::Result<()> {
    let ticket = card.ticket;
    writeln!(w, "  {:<40} ({})", ticket.id, card.avatar)?;
    writeln!(w, "  {}", ticket.title)?;
    if !ticket.tag.is_empty() {
        let tags: Vec<String> = ticket.tag.iter().map(|t| format!("• {t}")).collect();
        writeln!(w, "  {}", tags.join("  "))?;
    }
    pretty_rule(w)
}

/// Text board: one tab-separated row per ticket.
pub fn write_text(board: &BoardView<'_>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "GROUP\tID\tPRIORITY\tSTATUS\tUSER\tTITLE")?;
    for column in &board.groups {
        for card in &column.tickets {
            let t = card.ticket;
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}\t{}",
                column.key, t.id, t.priority, t.status, t.user_id, t.title
            )?;
        }
    }
    Ok(())
}
