use std::{
    env, fs,
    io::{self, Read},
};

use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::{
    config::Settings,
    core::{Extractor, Grammar, decode_source},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let grammar = Grammar::from_name(&cmd.language);
    if !grammar.is_supported() {
        tracing::warn!("Unsupported language: {}", cmd.language);
    }

    let base_dir = env::current_dir()?;
    let settings = Settings::load(&base_dir, cmd.args.config.as_deref(), &cmd.args.overrides())?;

    let (code, origin) = match &cmd.file {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            (decode_source(&bytes).text, Some(path.display().to_string()))
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read snippet from stdin")?;
            (decode_source(&bytes).text, None)
        }
    };

    let client = settings
        .service_client()
        .context("Failed to create translation service client")?;
    let outcome =
        Extractor::new(&settings.rules, &client, &client).extract(&code, grammar, origin.as_deref());

    Ok(finish(
        CommandSummary::Extract(ExtractSummary { outcome }),
        true,
    ))
}
