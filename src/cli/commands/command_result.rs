use crate::{
    cli::args::OutputFormat,
    core::{ExtractError, ExtractionResult, Grammar},
};

/// Suggestions found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path as displayed to the user (relative to the working directory when possible).
    pub path: String,
    pub grammar: Grammar,
    /// Name of the encoding the file was decoded with.
    pub encoding: &'static str,
    pub extracted: ExtractionResult,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub format: OutputFormat,
    /// Reports for every checked file, sorted by path.
    pub files: Vec<FileReport>,
    /// Files given explicitly whose extension is not supported.
    pub unsupported: Vec<String>,
    /// Paths the directory walk could not read.
    pub skipped: usize,
    /// Source language and target language codes, for display.
    pub language_pair: (String, String),
}

impl CheckSummary {
    pub fn suggestion_count(&self) -> usize {
        self.files.iter().map(|f| f.extracted.len()).sum()
    }

    pub fn files_with_suggestions(&self) -> usize {
        self.files.iter().filter(|f| !f.extracted.is_empty()).count()
    }
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub outcome: Result<ExtractionResult, ExtractError>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// Result of running codetr commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Untranslated fragments plus unsupported inputs.
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
