use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary, FileReport},
};
use crate::{
    config::Settings,
    core::{Extractor, Grammar, decode_source},
    file_scanner::scan_paths,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let base_dir = env::current_dir()?;
    let settings = Settings::load(&base_dir, cmd.args.config.as_deref(), &cmd.args.overrides())?;

    let paths = if cmd.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cmd.paths.clone()
    };
    let scan = scan_paths(&paths, &base_dir, &settings.ignores)?;

    let client = settings
        .service_client()
        .context("Failed to create translation service client")?;
    let extractor = Extractor::new(&settings.rules, &client, &client);

    // Files are independent requests; each one is processed sequentially inside.
    let files: Vec<&PathBuf> = scan.files.iter().collect();
    let mut reports = files
        .par_iter()
        .map(|path| check_file(&extractor, path, &base_dir))
        .collect::<Result<Vec<_>>>()?;
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let unsupported = scan
        .unsupported
        .iter()
        .map(|path| display_path(path, &base_dir))
        .collect();

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            format: cmd.format,
            files: reports,
            unsupported,
            skipped: scan.skipped_count,
            language_pair: (
                settings.rules.source_language.clone(),
                settings.rules.target_language.clone(),
            ),
        }),
        true,
    ))
}

fn check_file(extractor: &Extractor, path: &Path, base_dir: &Path) -> Result<FileReport> {
    let shown_path = display_path(path, base_dir);
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", shown_path))?;
    let decoded = decode_source(&bytes);
    let grammar = Grammar::from_path(path);

    tracing::info!("{} detected as {}", shown_path, grammar);
    tracing::info!("{} start processing", shown_path);
    let extracted = extractor
        .extract(&decoded.text, grammar, Some(&shown_path))
        .with_context(|| format!("Cannot check {}", shown_path))?;
    tracing::info!("{} finished processing", shown_path);

    Ok(FileReport {
        path: shown_path,
        grammar,
        encoding: decoded.encoding.name(),
        extracted,
    })
}

/// Path relative to `base_dir` when it lies inside it.
fn display_path(path: &Path, base_dir: &Path) -> String {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    let relative = relative.strip_prefix(".").unwrap_or(relative);
    relative.to_string_lossy().to_string()
}
