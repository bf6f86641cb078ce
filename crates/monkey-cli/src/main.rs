//! Monkey command-line front end
//!
//! Interactive REPL plus one-shot `lex` and `parse` commands over files.

mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use commands::repl::ReplMode;
use output::ColorMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "monkey")]
#[command(about = "Lexer, parser and REPL for the Monkey language", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// When to colour diagnostics
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the interactive REPL (default)
    Repl {
        /// What to print for each line
        #[arg(long, value_enum, default_value_t = ReplMode::Tokens)]
        mode: ReplMode,
    },

    /// Print the tokens of a file
    Lex {
        /// Input file
        file: PathBuf,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a file and print the program
    Parse {
        /// Input file
        file: PathBuf,
        /// Print the syntax tree as JSON
        #[arg(long)]
        json: bool,
        /// Maximum nesting depth (expressions and blocks)
        #[arg(long, default_value_t = monkey_parser::ParserOptions::default().max_depth)]
        max_depth: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        // stdout carries program output; keep logs plain and out of the way.
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let color = output::resolve_color_choice(cli.color);

    match cli.command.unwrap_or(Commands::Repl {
        mode: ReplMode::Tokens,
    }) {
        Commands::Repl { mode } => commands::repl::execute(mode, color)?,
        Commands::Lex { file, json } => commands::lex::execute(&file, json)?,
        Commands::Parse {
            file,
            json,
            max_depth,
        } => {
            if !commands::parse::execute(&file, json, max_depth, color)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // Targets are crate module paths, so `monkey_parser` covers the lexer
    // and parser spans as well.
    match v {
        0 => "monkey_cli=warn,monkey_parser=warn",
        1 => "monkey_cli=debug,monkey_parser=debug",
        _ => "monkey_cli=trace,monkey_parser=trace",
    }
}
