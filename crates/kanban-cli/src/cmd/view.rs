//! `kb view`: normalize view state into a shareable query string.

use crate::output::{OutputMode, pretty_kv, render_mode};
use clap::Args;
use kanban_core::model::{Grouping, Ordering};
use kanban_core::view::{QueryHistory, ViewStateStore};
use serde::Serialize;
use std::io::Write;

/// View selection shared by `kb view` and `kb board`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Starting view as a query string, e.g. `grouping=priority&ordering=title`.
    ///
    /// Unknown or missing values fall back to `status` / `priority`.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Change grouping: status, priority, assignee.
    #[arg(short, long)]
    pub grouping: Option<Grouping>,

    /// Change ordering: priority, title.
    #[arg(short, long)]
    pub ordering: Option<Ordering>,
}

/// Parse the starting query, then apply flag changes through the store.
///
/// `default_query` is used when `--query` is absent.
pub fn build_view(args: &ViewArgs, default_query: &str) -> ViewStateStore<QueryHistory> {
    let start = args.query.as_deref().unwrap_or(default_query);
    let mut view = ViewStateStore::new(QueryHistory::new(start));
    if let Some(grouping) = args.grouping {
        view.set_grouping(grouping);
    }
    if let Some(ordering) = args.ordering {
        view.set_ordering(ordering);
    }
    view
}

#[derive(Debug, Serialize)]
struct ViewReport {
    query: String,
    grouping: Grouping,
    ordering: Ordering,
}

pub fn run_view(args: &ViewArgs, output: OutputMode, default_query: &str) -> anyhow::Result<()> {
    let view = build_view(args, default_query);
    let selectors = view.selectors();
    let report = ViewReport {
        query: view.query(),
        grouping: selectors.grouping,
        ordering: selectors.ordering,
    };

    render_mode(
        output,
        &report,
        |r, w| writeln!(w, "{}", r.query),
        |r, w| {
            pretty_kv(w, "grouping", r.grouping.text())?;
            pretty_kv(w, "ordering", r.ordering.text())?;
            pretty_kv(w, "query", format!("?{}", r.query))
        },
    )
}
