//! Assess command handler.
//!
//! Scores answers from a file or from saved progress and prints the report.

use super::exit_codes;
use super::output::{OutputTarget, should_use_color, write_output};
use super::progress::open_progress;
use crate::assessment::Assessment;
use crate::config::AppConfig;
use crate::model::AnswerSet;
use crate::reports::create_reporter;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Run the assess command, returning the desired exit code.
///
/// With `fail_on_incomplete`, a report with unanswered questions exits with
/// [`exit_codes::INCOMPLETE`].
pub fn run_assess(
    config: &AppConfig,
    answers_file: Option<PathBuf>,
    fail_on_incomplete: bool,
) -> Result<i32> {
    let assessment = Assessment::from_config(config).context("failed to set up assessment")?;

    let answers = match answers_file {
        Some(ref path) => read_answers(path)?,
        None => open_progress(config)?.load_answers(),
    };
    if answers.is_empty() {
        tracing::warn!("No answers found; the report reflects an empty assessment");
    }

    let report = assessment.assess(&answers, config.assessment.locale);

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );
    let rendered = reporter
        .generate(&report)
        .context("failed to render report")?;
    write_output(&rendered, &target)?;

    if fail_on_incomplete && !report.is_complete() {
        tracing::info!(
            "{}/{} questions answered",
            report.answered_questions,
            report.total_questions
        );
        return Ok(exit_codes::INCOMPLETE);
    }
    Ok(exit_codes::SUCCESS)
}

/// Read an answer file. Malformed content yields an empty set.
fn read_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;
    let answers = AnswerSet::from_json_lenient(&content);
    tracing::debug!("Read {} answer(s) from {}", answers.len(), path.display());
    Ok(answers)
}
