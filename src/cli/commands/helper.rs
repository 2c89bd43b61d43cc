use super::{CommandResult, CommandSummary};

pub fn finish(summary: CommandSummary, exit_on_errors: bool) -> CommandResult {
    let error_count = match &summary {
        CommandSummary::Check(check) => check.suggestion_count() + check.unsupported.len(),
        // Extraction output is data, not a lint result; only a refused request fails.
        CommandSummary::Extract(extract) => usize::from(extract.outcome.is_err()),
        CommandSummary::Init(init) => usize::from(init.error.is_some()),
    };

    CommandResult {
        summary,
        error_count,
        exit_on_errors,
    }
}
