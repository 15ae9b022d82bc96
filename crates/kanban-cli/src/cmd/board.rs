//! `kb board`: fetch tickets and print them as board columns.

use crate::cmd::view::{ViewArgs, build_view};
use crate::output::{OutputMode, render_mode};
use crate::render::{self, BoardView};
use clap::Args;
use kanban_core::config::EffectiveConfig;
use kanban_core::projector::project_board;
use kanban_core::source::{BoardSource, FileSource, HttpSource, load_board};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BoardArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Board endpoint to fetch (overrides KANBAN_ENDPOINT and config).
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the board payload from a JSON file instead of fetching it.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

fn board_source(args: &BoardArgs, config: &EffectiveConfig) -> Box<dyn BoardSource> {
    if let Some(path) = &args.file {
        return Box::new(FileSource::new(path.clone()));
    }
    let url = args.url.clone().unwrap_or_else(|| config.endpoint.clone());
    Box::new(HttpSource::new(url))
}

pub fn run_board(
    args: &BoardArgs,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    let view = build_view(&args.view, &config.query);
    let selectors = view.selectors();

    let source = board_source(args, config);
    tracing::info!(source = %source.describe(), "Loading Tasks...");
    let data = load_board(source.as_ref());

    let groups = project_board(&data, &selectors);
    let board = BoardView::new(selectors, source.describe(), &data, groups);
    tracing::debug!(tickets = board.ticket_count(), "rendering board");

    render_mode(output, &board, render::write_text, render::write_pretty)
}
