//! `kb completions <shell>`.

use anyhow::Result;
use clap::{Args, Command};
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Installed binary name; the clap command itself is named after the package.
const BIN_NAME: &str = "kb";

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Print the completion script for `args.shell` to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn run_completions(args: &CompletionsArgs, command: &mut Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_completions(args.shell, command, &mut out)
}

fn write_completions(shell: Shell, command: &mut Command, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(%shell, "generating completions");
    generate(shell, command, BIN_NAME, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::CommandFactory;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut Cli::command(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_completes_board_flags() {
        let out = script(Shell::Bash);
        assert!(out.contains("_kb()"));
        assert!(out.contains("board"));
        assert!(out.contains("--grouping"));
    }

    #[test]
    fn zsh_script_targets_kb() {
        let out = script(Shell::Zsh);
        assert!(out.starts_with("#compdef kb"));
        assert!(out.contains("completions"));
    }
}
