//! Progress command handlers: `answer`, `reset` and `lesson`.

use super::exit_codes;
use crate::assessment::Assessment;
use crate::config::AppConfig;
use crate::store::{JsonFileStore, ProgressStore};
use anyhow::{Context, Result};

/// What to do with a lesson marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonAction {
    Complete,
    Status,
    Clear,
}

/// Open the progress store named by the config.
pub fn open_progress(config: &AppConfig) -> Result<ProgressStore<JsonFileStore>> {
    let path = config
        .store
        .resolved_path()
        .context("no data directory on this platform; set store.path in the config")?;
    Ok(ProgressStore::new(JsonFileStore::open(path)))
}

/// Record one answer in saved progress. Unknown questions and
/// out-of-range indices are rejected before anything is written.
pub fn run_answer(config: &AppConfig, question_id: &str, index: u32) -> Result<i32> {
    let assessment = Assessment::from_config(config).context("failed to set up assessment")?;
    let label = assessment
        .check_answer(question_id, index)
        .context("run `finwell questions` to list valid answers")?;

    let mut progress = open_progress(config)?;
    let answers = progress
        .record_answer(question_id, index)
        .context("failed to save answer")?;
    eprintln!(
        "Recorded {question_id} = {index} ({}). {}/{} answered.",
        label.get(config.assessment.locale),
        answers.len(),
        assessment.table().len()
    );
    Ok(exit_codes::SUCCESS)
}

/// Forget all saved answers.
pub fn run_reset(config: &AppConfig) -> Result<i32> {
    let mut progress = open_progress(config)?;
    progress
        .clear_answers()
        .context("failed to clear answers")?;
    eprintln!("Saved answers cleared.");
    Ok(exit_codes::SUCCESS)
}

/// Complete, inspect or clear a lesson marker.
pub fn run_lesson(config: &AppConfig, action: LessonAction, lesson_id: &str) -> Result<i32> {
    let mut progress = open_progress(config)?;
    match action {
        LessonAction::Complete => {
            let marker = progress
                .mark_lesson_complete(lesson_id)
                .context("failed to save lesson progress")?;
            eprintln!(
                "Lesson '{lesson_id}' completed at {}",
                marker.completed_at.to_rfc3339()
            );
        }
        LessonAction::Status => match progress.lesson_marker(lesson_id) {
            Some(marker) => println!(
                "{lesson_id}: completed {}",
                marker.completed_at.to_rfc3339()
            ),
            None => println!("{lesson_id}: not completed"),
        },
        LessonAction::Clear => {
            progress
                .clear_lesson(lesson_id)
                .context("failed to clear lesson progress")?;
            eprintln!("Lesson '{lesson_id}' cleared.");
        }
    }
    Ok(exit_codes::SUCCESS)
}
