#![forbid(unsafe_code)]

mod cmd;
mod output;
mod render;

use clap::{CommandFactory, Parser, Subcommand};
use kanban_core::config::{self, EffectiveConfig};
use kanban_core::error::ErrorCode;
use output::{CliError, OutputMode};
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "kb: kanban ticket board",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Output format (overrides FORMAT and config).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags, environment and config.
    fn output_mode(&self, config: Option<&EffectiveConfig>) -> OutputMode {
        let config_output = config.and_then(|c| c.user.output.as_deref());
        output::resolve_output_mode(self.format, self.json, config_output)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "Show the ticket board",
        long_about = "Fetch tickets and users, group and order them, and print the board.",
        after_help = "EXAMPLES:\n    # Board grouped by status, ordered by priority\n    kb board\n\n    # Restore a shared view\n    kb board --query 'grouping=assignee&ordering=title'\n\n    # Change grouping, keeping the query's ordering\n    kb board --query 'ordering=title' --grouping priority\n\n    # Read a saved payload\n    kb board --file board.json --json"
    )]
    Board(cmd::board::BoardArgs),

    #[command(
        next_help_heading = "Read",
        about = "Print the view query string",
        long_about = "Normalize grouping/ordering into a shareable query string without fetching.",
        after_help = "EXAMPLES:\n    # Defaults\n    kb view\n\n    # Switch grouping on an existing link\n    kb view --query 'grouping=status&ordering=title' --grouping assignee"
    )]
    View(cmd::view::ViewArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    kb completions bash\n\n    # Generate zsh completions\n    kb completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("KANBAN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "kanban=debug,kb=debug,info"
        } else {
            "kanban=info,kb=info,warn"
        })
    });

    let format = env::var("KANBAN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = match config::resolve_config() {
        Ok(config) => config,
        Err(err) => {
            let output = cli.output_mode(None);
            output::render_error(
                output,
                &CliError::with_code(format!("{err:#}"), ErrorCode::ConfigParseError),
            )?;
            std::process::exit(1);
        }
    };
    let output = cli.output_mode(Some(&config));

    match cli.command {
        Commands::Board(ref args) => cmd::board::run_board(args, output, &config),
        Commands::View(ref args) => cmd::view::run_view(args, output, &config.query),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args, &mut command)
        }
    }
}
