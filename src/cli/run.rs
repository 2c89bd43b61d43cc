//! Dispatches a parsed command line to the matching command handler.
//!
//! `serve` never reaches this point; `main` starts the MCP server for it
//! before the CLI layer runs.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, extract::extract, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve(_)) => {
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
