//! The validated question/weight table.

use super::builtin::builtin_questions;
use super::question::{Question, QuestionKind};
use crate::error::{ErrorContext, FinwellError, Result, TableErrorKind};
use crate::model::{Dimension, DimensionMap};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// On-disk layout of a YAML weight table.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeightTableFile {
    questions: Vec<Question>,
}

/// An immutable, validated set of questions with their per-dimension caps
/// precomputed.
///
/// Every construction path runs the same validation, so a `WeightTable` in
/// hand is always well formed.
#[derive(Debug, Clone)]
pub struct WeightTable {
    questions: Vec<Question>,
    caps: Vec<DimensionMap<u32>>,
    positions: HashMap<String, usize>,
}

impl WeightTable {
    /// Validate questions and build the table.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(FinwellError::table("building table", TableErrorKind::Empty));
        }

        let mut seen = HashSet::new();
        for (position, question) in questions.iter().enumerate() {
            validate_question(position, question, &mut seen)?;
            warn_on_asymmetry(question);
        }

        let caps = questions
            .iter()
            .map(|q| DimensionMap::from_fn(|d| q.cap(d)))
            .collect();
        let positions = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();

        tracing::debug!("Loaded weight table with {} questions", questions.len());
        Ok(Self {
            questions,
            caps,
            positions,
        })
    }

    /// The built-in bilingual question bank.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_questions()).context("built-in question bank")
    }

    /// Parse and validate a YAML table with a top-level `questions` list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: WeightTableFile = serde_yaml_ng::from_str(yaml)?;
        Self::new(file.questions)
    }

    /// Load and validate a YAML table from disk.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FinwellError::io(path, e))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("loading questions from {}", path.display()))
    }

    /// Serialize back to the YAML layout read by [`from_yaml_str`](Self::from_yaml_str).
    pub fn to_yaml(&self) -> Result<String> {
        let file = WeightTableFile {
            questions: self.questions.clone(),
        };
        Ok(serde_yaml_ng::to_string(&file)?)
    }

    /// Questions in declaration order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.positions.get(id).and_then(|&i| self.questions.get(i))
    }

    /// Per-dimension caps of a question, by id.
    #[must_use]
    pub fn caps(&self, id: &str) -> Option<&DimensionMap<u32>> {
        self.positions.get(id).and_then(|&i| self.caps.get(i))
    }

    /// Iterate questions together with their caps.
    pub fn entries(&self) -> impl Iterator<Item = (&Question, &DimensionMap<u32>)> {
        self.questions.iter().zip(self.caps.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Denominator a dimension reaches when every question is answered.
    #[must_use]
    pub fn full_max(&self, dimension: Dimension) -> u32 {
        self.caps.iter().map(|caps| caps[dimension]).sum()
    }
}

fn validate_question(position: usize, question: &Question, seen: &mut HashSet<String>) -> Result<()> {
    let context = || format!("question #{position}");

    if question.id.trim().is_empty() {
        return Err(FinwellError::table(context(), TableErrorKind::EmptyId(position)));
    }
    if !seen.insert(question.id.clone()) {
        return Err(FinwellError::table(
            context(),
            TableErrorKind::DuplicateId(question.id.clone()),
        ));
    }

    match &question.kind {
        QuestionKind::Choice { options } if options.is_empty() => {
            return Err(FinwellError::table(
                context(),
                TableErrorKind::NoOptions(question.id.clone()),
            ));
        }
        QuestionKind::Slider { dimensions, .. } if dimensions.is_empty() => {
            return Err(FinwellError::table(
                context(),
                TableErrorKind::NoSliderDimensions(question.id.clone()),
            ));
        }
        QuestionKind::Choice { .. } | QuestionKind::Slider { .. } => {}
    }

    if !question.has_nonzero_weight() {
        return Err(FinwellError::table(
            context(),
            TableErrorKind::NoWeights(question.id.clone()),
        ));
    }

    Ok(())
}

/// Normalization maps `[-max, +max]` onto `[0, 100]`, which is only exact
/// when each question can swing a dimension equally in both directions.
fn warn_on_asymmetry(question: &Question) {
    for dimension in Dimension::ALL {
        if let Some((low, high)) = question.weight_range(dimension)
            && low.unsigned_abs() != high.unsigned_abs()
        {
            tracing::warn!(
                "Question '{}' has asymmetric weights on {} ({low}..{high}); percentages will be skewed",
                question.id,
                dimension
            );
        }
    }
}
