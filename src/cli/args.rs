//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan files and directories for untranslated fragments
//! - `extract`: Extract suggestions from one snippet (file or stdin) as JSON
//! - `init`: Initialize codetr configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::{config::Overrides, core::ConfidenceScale};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's service args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.verbose,
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Serve(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Settings shared by every command that talks to the translation service.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Config file to use instead of searching for .codetrrc.json
    #[arg(long, env = "CODETR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Translation service base URL (overrides config file and environment)
    #[arg(long)]
    pub service_url: Option<String>,

    /// Detection confidence a fragment must exceed (overrides config file and environment)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Scale the service reports confidences on
    #[arg(long, value_enum)]
    pub confidence_scale: Option<ConfidenceScale>,

    /// Language code to look for (overrides config file)
    #[arg(long)]
    pub source_lang: Option<String>,

    /// Language code to translate into (overrides config file)
    #[arg(long)]
    pub target_lang: Option<String>,

    /// File with one excluded substring per line (overrides config file)
    #[arg(long)]
    pub exclude_file: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServiceArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            service_url: self.service_url.clone(),
            threshold: self.threshold,
            confidence_scale: self.confidence_scale,
            source_language: self.source_lang.clone(),
            target_language: self.target_lang.clone(),
            exclude_file: self.exclude_file.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, cargo-style
    #[default]
    Text,
    /// JSON, one entry per file
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub args: ServiceArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source language of the snippet: csharp, js or sql
    #[arg(short, long)]
    pub language: String,

    /// File to read the snippet from (default: stdin)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub args: ServiceArgs,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[command(flatten)]
    pub args: ServiceArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check C#, JavaScript and SQL files for untranslated comments and strings
    Check(CheckCommand),
    /// Extract translation suggestions from a single snippet as JSON
    Extract(ExtractCommand),
    /// Initialize a new .codetrrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve(ServeCommand),
}
