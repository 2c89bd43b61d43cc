//! Report formatting and printing utilities.
//!
//! Text output is cargo-style; JSON output is meant for scripts and editors.
//! Kept separate from the extraction pipeline so codetr can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::{Value, json};

use super::{
    args::OutputFormat,
    commands::{CheckSummary, CommandResult, CommandSummary, ExtractSummary, FileReport, InitSummary},
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{ExtractError, Suggestion},
    utils::pluralize,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Payload printed when a snippet's language is not supported.
pub const UNSUPPORTED_LANGUAGE: &str = "Unsupported language";

/// Payload printed for files whose extension is not supported.
pub const UNSUPPORTED_EXTENSION: &str = "Unsupported file extension";

pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Check(summary) => {
            match summary.format {
                OutputFormat::Text => report_check_to(summary, &mut stdout),
                OutputFormat::Json => report_check_json_to(summary, &mut stdout),
            }
            print_skip_warning_to(summary.skipped, &mut io::stderr().lock());
        }
        CommandSummary::Extract(summary) => report_extract_to(summary, &mut stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print check results in cargo-style format to a custom writer.
pub fn report_check_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let (source, target) = &summary.language_pair;
    let max_line_width = calculate_max_line_width(&summary.files);

    for file in &summary.files {
        for suggestion in &file.extracted.results {
            print_suggestion(
                &file.path,
                suggestion,
                (source.as_str(), target.as_str()),
                writer,
                max_line_width,
            );
        }
    }

    for path in &summary.unsupported {
        let _ = writeln!(
            writer,
            "{}: unsupported file extension",
            "error".bold().red()
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        let _ = writeln!(writer);
    }

    print_summary(summary, writer);
}

/// Print check results as a JSON array, one entry per file.
pub fn report_check_json_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let mut entries: Vec<Value> = summary.files.iter().map(file_entry).collect();
    entries.extend(
        summary
            .unsupported
            .iter()
            .map(|path| json!({"file": path, "error": UNSUPPORTED_EXTENSION})),
    );

    write_json(&Value::Array(entries), writer);
}

/// Print a warning about paths the directory walk could not read.
pub fn print_skip_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} could not be read and {} skipped",
            "warning:".bold().yellow(),
            pluralize(count, "path"),
            if count == 1 { "was" } else { "were" }
        );
    }
}

/// Print a single extraction as `{"extracted": ...}` or `{"error": ...}`.
pub fn report_extract_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let value = match &summary.outcome {
        Ok(extracted) => json!({ "extracted": extracted }),
        Err(ExtractError::UnsupportedGrammar) => json!({ "error": UNSUPPORTED_LANGUAGE }),
    };
    write_json(&value, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_suggestion<W: Write>(
    path: &str,
    suggestion: &Suggestion,
    (source, target): (&str, &str),
    writer: &mut W,
    max_line_width: usize,
) {
    let mut lines = suggestion.original.lines();
    let headline = lines.next().unwrap_or_default();
    let ellipsis = if suggestion.original.contains('\n') {
        " ..."
    } else {
        ""
    };

    let _ = writeln!(
        writer,
        "{}: \"{}{}\"  {}",
        "warning".bold().yellow(),
        headline,
        ellipsis,
        format!("untranslated ({}\u{2192}{})", source, target)
            .dimmed()
            .cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        path,
        suggestion.line
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    for (offset, text) in suggestion.original.lines().enumerate() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            (suggestion.line + offset).to_string().blue(),
            "|".blue(),
            text,
            width = max_line_width
        );
    }
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );

    if suggestion.suggested_translation.is_empty() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            "no translation available".dimmed(),
            width = max_line_width
        );
    } else {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "suggestion:".bold().cyan(),
            suggestion.suggested_translation,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between suggestions
}

fn print_summary<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let untranslated = summary.suggestion_count();
    let unsupported = summary.unsupported.len();
    let checked = summary.files.len();

    if untranslated + unsupported == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} - nothing untranslated found",
                pluralize(checked, "file")
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} ({} in {}, {})",
        FAILURE_MARK.red(),
        pluralize(untranslated + unsupported, "problem"),
        format!("{} untranslated", untranslated).yellow(),
        pluralize(summary.files_with_suggestions(), "file"),
        format!("{} unsupported", unsupported).red()
    );
}

fn file_entry(file: &FileReport) -> Value {
    let mut entry = json!({
        "file": file.path,
        "language": file.grammar.name(),
        "extracted": file.extracted,
    });
    if file.encoding != "UTF-8" {
        entry["encoding"] = json!(file.encoding);
    }
    entry
}

fn write_json<W: Write>(value: &Value, writer: &mut W) {
    if serde_json::to_writer_pretty(&mut *writer, value).is_ok() {
        let _ = writeln!(writer);
    }
}

/// Widest gutter needed for any reported line, including every line of a block comment.
fn calculate_max_line_width(files: &[FileReport]) -> usize {
    files
        .iter()
        .flat_map(|f| &f.extracted.results)
        .map(|s| s.line + s.original.lines().count().saturating_sub(1))
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Tests
// ============================================================
