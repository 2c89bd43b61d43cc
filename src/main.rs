use std::{env, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use codetr::{
    cli::{Arguments, Command, ExitStatus, ServeCommand},
    config::Settings,
    logging,
};

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose());

    if let Some(Command::Serve(cmd)) = &args.command {
        if let Err(err) = serve(cmd) {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match codetr::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

fn serve(cmd: &ServeCommand) -> Result<()> {
    let settings = Settings::load(
        &env::current_dir()?,
        cmd.args.config.as_deref(),
        &cmd.args.overrides(),
    )?;
    codetr::mcp::run_server(settings)
}
