//! clitext command-line front end.
//!
//! Asks a single typed question on the terminal and prints the accepted answer
//! on stdout. Exits with status 1 when the user cancels.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clitext::utils::{DesiredType, Prompt, Terminal, Typewriter, set_title};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Int,
    Str,
    Bool,
    Float,
}

impl From<Kind> for DesiredType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Int => DesiredType::Integer,
            Kind::Str => DesiredType::String,
            Kind::Bool => DesiredType::Boolean,
            Kind::Float => DesiredType::Float,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "clitext", version, about = "Ask one typed question on the terminal")]
struct Cli {
    /// Question shown to the user
    #[arg(short, long, default_value = "Enter a value:")]
    message: String,

    /// Type the answer must have
    #[arg(short, long, value_enum, default_value_t = Kind::Str)]
    kind: Kind,

    /// Refuse cancel entries instead of returning
    #[arg(long)]
    no_cancel: bool,

    /// Keep literal \n and \t in string answers
    #[arg(long)]
    no_newlines: bool,

    /// Text printed when the user enters ?help?
    #[arg(long)]
    help_text: Option<String>,

    /// Use the stock help text for the chosen type
    #[arg(long, conflicts_with = "help_text")]
    default_help: bool,

    /// Type prompts out one character at a time
    #[arg(long)]
    typewriter: bool,

    /// Set the terminal window title first
    #[arg(long)]
    title: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long)]
    log: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_prompt(cli: &Cli, terminal: &Terminal<impl std::io::BufRead, impl std::io::Write>) -> Prompt {
    let mut prompt = Prompt::new(cli.message.clone(), cli.kind.into())
        .with_cancel(!cli.no_cancel)
        .with_newlines(!cli.no_newlines);

    if let Some(help) = &cli.help_text {
        prompt = prompt.with_help(help.clone());
    } else if cli.default_help {
        prompt = prompt.with_default_help(terminal.custom_types());
    }

    prompt
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log);
    debug!(?cli, "starting");

    if let Some(title) = &cli.title {
        if let Err(e) = set_title(title) {
            warn!(error = %e, "could not set terminal title");
        }
    }

    let mut terminal = Terminal::stdio();
    let prompt = build_prompt(&cli, &terminal);

    let answer = if cli.typewriter {
        let mut typewriter = Typewriter::stdout();
        terminal.read_with(&prompt, &mut typewriter)
    } else {
        terminal.read(&prompt)
    }
    .context("failed to read an answer")?;

    match answer {
        Some(answer) => {
            println!("{}", answer);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("cancelled");
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["clitext"]);
        assert_eq!(cli.kind, Kind::Str);
        assert_eq!(cli.message, "Enter a value:");
        assert!(!cli.no_cancel);
        assert!(!cli.typewriter);
    }

    #[test]
    fn test_cli_help_flags_conflict() {
        let result = Cli::try_parse_from(["clitext", "--help-text", "x", "--default-help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_prompt() {
        let cli = Cli::parse_from(["clitext", "-k", "bool", "--no-cancel", "--default-help"]);
        let terminal = Terminal::new(std::io::empty(), Vec::new());
        let prompt = build_prompt(&cli, &terminal);

        assert_eq!(prompt.kind, DesiredType::Boolean);
        assert!(!prompt.can_cancel);
        assert_eq!(prompt.help_message, Some(clitext::utils::bool_help()));
    }
}
