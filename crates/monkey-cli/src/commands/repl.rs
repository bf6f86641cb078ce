//! `monkey repl`: Interactive REPL.
//!
//! Reads one line at a time and prints its tokens, its canonical program
//! text or its syntax tree as JSON, depending on the mode.

use crate::output::print_error;
use clap::ValueEnum;
use monkey_parser::{diagnostic, Lexer, ParseError, Parser};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt;
use std::path::PathBuf;
use termcolor::ColorChoice;

const PROMPT: &str = ">> ";

/// What the REPL prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplMode {
    /// One token per line
    Tokens,
    /// Canonical program text
    Ast,
    /// Syntax tree as JSON
    Json,
}

impl fmt::Display for ReplMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplMode::Tokens => "tokens",
            ReplMode::Ast => "ast",
            ReplMode::Json => "json",
        };
        f.write_str(name)
    }
}

/// Result of evaluating one line.
#[derive(Debug)]
enum Outcome {
    Output(String),
    Errors(Vec<ParseError>),
}

pub fn execute(mut mode: ReplMode, color: ColorChoice) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    let history_path = history_path();
    if let Some(ref path) = history_path {
        if let Err(err) = editor.load_history(path) {
            tracing::debug!(path = %path.display(), error = %err, "no history loaded");
        }
    }

    println!("Monkey v{} REPL ({} mode)", env!("CARGO_PKG_VERSION"), mode);
    println!("Type help for help, exit to quit\n");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                if is_command(trimmed) {
                    match handle_command(trimmed, &mut mode) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(message) => print_error(color, &message),
                    }
                    continue;
                }

                match evaluate(&line, mode)? {
                    Outcome::Output(text) => {
                        if !text.is_empty() {
                            println!("{}", text);
                        }
                    }
                    Outcome::Errors(errors) => {
                        diagnostic::emit(&errors, "<repl>", &line, color)?;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("\n(To exit, press Ctrl+D or type exit)");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                print_error(color, &err.to_string());
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = editor.save_history(path) {
            tracing::warn!(path = %path.display(), error = %err, "could not save history");
        }
    }

    Ok(())
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".monkey").join("history"))
}

/// Check if input looks like a REPL command.
fn is_command(input: &str) -> bool {
    matches!(
        input.split_whitespace().next(),
        Some("exit" | "quit" | "help" | "mode")
    )
}

/// Handle REPL commands. Returns true if the REPL should exit.
fn handle_command(cmd: &str, mode: &mut ReplMode) -> Result<bool, String> {
    let mut words = cmd.split_whitespace();
    match (words.next(), words.next()) {
        (Some("exit" | "quit"), None) => return Ok(true),
        (Some("help"), None) => {
            println!("Commands:");
            println!("  help            Show this help");
            println!("  mode            Show the current output mode");
            println!("  mode <m>        Switch output mode (tokens, ast, json)");
            println!("  exit            Exit the REPL (also Ctrl-D)");
        }
        (Some("mode"), None) => println!("mode: {}", mode),
        (Some("mode"), Some(name)) => {
            *mode = ReplMode::from_str(name, true)?;
            println!("mode: {}", mode);
        }
        _ => {
            return Err(format!(
                "Unknown command: {}\nType help for available commands.",
                cmd
            ))
        }
    }
    Ok(false)
}

fn evaluate(line: &str, mode: ReplMode) -> anyhow::Result<Outcome> {
    if mode == ReplMode::Tokens {
        let lines: Vec<String> = Lexer::new(line)
            .tokens()
            .take_while(|token| !token.is_eof())
            .map(|token| super::lex::format_token(&token))
            .collect();
        return Ok(Outcome::Output(lines.join("\n")));
    }

    let mut parser = Parser::from_source(line);
    let program = parser.parse_program();
    if parser.has_errors() {
        return Ok(Outcome::Errors(parser.into_errors()));
    }

    let text = match mode {
        ReplMode::Json => serde_json::to_string_pretty(&program)?,
        _ => program.to_string(),
    };
    Ok(Outcome::Output(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(line: &str, mode: ReplMode) -> String {
        match evaluate(line, mode).unwrap() {
            Outcome::Output(text) => text,
            Outcome::Errors(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn commands_recognised() {
        assert!(is_command("exit"));
        assert!(is_command("quit"));
        assert!(is_command("help"));
        assert!(is_command("mode json"));
        assert!(!is_command("let x = 1;"));
        assert!(!is_command("exits"));
    }

    #[test]
    fn exit_and_quit_stop() {
        let mut mode = ReplMode::Tokens;
        assert_eq!(handle_command("exit", &mut mode), Ok(true));
        assert_eq!(handle_command("quit", &mut mode), Ok(true));
        assert_eq!(handle_command("help", &mut mode), Ok(false));
    }

    #[test]
    fn mode_switch() {
        let mut mode = ReplMode::Tokens;
        assert_eq!(handle_command("mode AST", &mut mode), Ok(false));
        assert_eq!(mode, ReplMode::Ast);
        assert!(handle_command("mode yaml", &mut mode).is_err());
        assert_eq!(mode, ReplMode::Ast);
    }

    #[test]
    fn tokens_mode_prints_one_token_per_line() {
        assert_eq!(
            output("let x = 5;", ReplMode::Tokens),
            "1:1 LET \"let\"\n1:5 IDENT \"x\"\n1:7 ASSIGN \"=\"\n1:9 INT \"5\"\n1:10 SEMICOLON \";\""
        );
    }

    #[test]
    fn ast_mode_prints_canonical_text() {
        assert_eq!(output("-a * b + c", ReplMode::Ast), "(((-a) * b) + c)");
    }

    #[test]
    fn json_mode_prints_tree() {
        let text = output("x", ReplMode::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["statements"][0]["Expression"]["expression"]["Identifier"]["value"],
            "x"
        );
    }

    #[test]
    fn parse_errors_are_returned() {
        match evaluate("let = 1;", ReplMode::Ast).unwrap() {
            Outcome::Errors(errors) => assert_eq!(errors.len(), 1),
            Outcome::Output(text) => panic!("expected errors, got {:?}", text),
        }
    }
}
