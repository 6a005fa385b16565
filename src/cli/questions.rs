//! Questions command handler.
//!
//! Lists the question bank in the configured locale, optionally in a
//! shuffled session order. Indices printed next to each answer are always
//! the table's own indices, which is what `finwell answer` expects.

use super::exit_codes;
use super::output::{OutputTarget, write_output};
use super::progress::open_progress;
use crate::assessment::Assessment;
use crate::config::AppConfig;
use crate::model::{AnswerSet, Locale};
use crate::reports::ReportFormat;
use crate::session::SessionOrder;
use crate::weights::{Question, SliderView};
use anyhow::{Context, Result};
use serde::Serialize;

/// How to order the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Table order
    Table,
    /// Shuffled with a fresh random seed
    Random,
    /// Shuffled with a fixed seed
    Seeded(u64),
}

impl Ordering {
    /// Pick an ordering from CLI flags, falling back to the configured seed.
    #[must_use]
    pub const fn from_flags(shuffle: bool, seed: Option<u64>, configured: Option<u64>) -> Self {
        match (seed, shuffle, configured) {
            (Some(seed), _, _) => Self::Seeded(seed),
            (None, true, Some(seed)) => Self::Seeded(seed),
            (None, true, None) => Self::Random,
            (None, false, _) => Self::Table,
        }
    }
}

#[derive(Debug, Serialize)]
struct QuestionListing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    questions: Vec<QuestionEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct QuestionEntry<'a> {
    id: &'a str,
    prompt: &'a str,
    slider: bool,
    answers: Vec<AnswerEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slider_view: Option<SliderView<'a>>,
}

#[derive(Debug, Serialize)]
struct AnswerEntry<'a> {
    index: u32,
    label: &'a str,
}

/// Run the questions command, returning the desired exit code.
pub fn run_questions(config: &AppConfig, ordering: Ordering) -> Result<i32> {
    let assessment = Assessment::from_config(config).context("failed to set up assessment")?;
    let locale = config.assessment.locale;
    let saved = open_progress(config)
        .map(|progress| progress.load_answers())
        .unwrap_or_default();

    let listing = build_listing(&assessment, &saved, locale, ordering);
    let rendered = match config.output.format {
        ReportFormat::Json => serde_json::to_string_pretty(&listing)
            .context("failed to serialize question listing")?,
        ReportFormat::Summary => render_text(&listing),
    };
    write_output(&rendered, &OutputTarget::from_option(config.output.file.clone()))?;
    Ok(exit_codes::SUCCESS)
}

fn build_listing<'a>(
    assessment: &'a Assessment,
    saved: &AnswerSet,
    locale: Locale,
    ordering: Ordering,
) -> QuestionListing<'a> {
    let table = assessment.table();
    let order = match ordering {
        Ordering::Table => None,
        Ordering::Random => Some(SessionOrder::random(table)),
        Ordering::Seeded(seed) => Some(SessionOrder::from_seed(table, seed)),
    };

    let questions = match order {
        Some(ref order) => order
            .questions
            .iter()
            .filter_map(|q| table.get(&q.id).map(|question| (question, q.options.clone())))
            .map(|(question, options)| entry(question, options, saved, locale))
            .collect(),
        None => table
            .questions()
            .iter()
            .map(|question| {
                let count = u32::try_from(question.answer_count()).unwrap_or(u32::MAX);
                entry(question, (0..count).collect(), saved, locale)
            })
            .collect(),
    };

    QuestionListing {
        seed: order.map(|o| o.seed),
        questions,
    }
}

fn entry<'a>(
    question: &'a Question,
    options: Vec<u32>,
    saved: &AnswerSet,
    locale: Locale,
) -> QuestionEntry<'a> {
    let answers = options
        .into_iter()
        .filter_map(|index| {
            question
                .answer_label(index as usize)
                .map(|label| AnswerEntry {
                    index,
                    label: label.get(locale),
                })
        })
        .collect();
    let saved_index = saved.get(&question.id);
    QuestionEntry {
        id: &question.id,
        prompt: question.prompt.get(locale),
        slider: question.is_slider(),
        answers,
        saved: saved_index,
        slider_view: SliderView::for_answer(question, saved_index, locale),
    }
}

fn render_text(listing: &QuestionListing<'_>) -> String {
    let mut lines = Vec::new();
    if let Some(seed) = listing.seed {
        lines.push(format!("# order seed: {seed}"));
    }
    for question in &listing.questions {
        lines.push(format!("{}  {}", question.id, question.prompt));
        for answer in &question.answers {
            let marker = if question.saved == Some(answer.index) { "*" } else { " " };
            lines.push(format!("  {marker} [{}] {}", answer.index, answer.label));
        }
        if let Some(ref view) = question.slider_view
            && !view.answered
        {
            lines.push(format!("    (shown at {}%: {})", view.fill_percent, view.label));
        }
    }
    lines.join("\n")
}
