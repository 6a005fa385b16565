//! Scoring engine: answers in, per-dimension sums out.

use super::score::{RawScore, Score};
use crate::model::{AnswerSet, DimensionMap};
use crate::weights::WeightTable;

/// Aggregates an [`AnswerSet`] against a [`WeightTable`].
///
/// Scoring is total: unanswered questions are skipped, out-of-range indices
/// are treated as unanswered and answers to unknown question ids are
/// ignored. Nothing here can fail.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'t> {
    table: &'t WeightTable,
}

impl<'t> ScoringEngine<'t> {
    #[must_use]
    pub const fn new(table: &'t WeightTable) -> Self {
        Self { table }
    }

    /// Sum selected weights and the caps of answered questions.
    ///
    /// A question's cap is added once per answered question regardless of
    /// which option was picked, so a skipped question never inflates the
    /// denominator.
    #[must_use]
    pub fn score(&self, answers: &AnswerSet) -> RawScore {
        let mut raw: DimensionMap<i32> = DimensionMap::default();
        let mut max: DimensionMap<u32> = DimensionMap::default();
        let mut answered = 0;

        for (question, caps) in self.table.entries() {
            let Some(index) = answers.get(&question.id) else {
                continue;
            };
            let Some(weights) = question.selection_weights(index) else {
                tracing::debug!(
                    "Answer {index} to '{}' is out of range (0..{}); treating as unanswered",
                    question.id,
                    question.answer_count()
                );
                continue;
            };

            for (dimension, weight) in weights.iter() {
                raw[dimension] = raw[dimension].saturating_add(*weight);
            }
            for (dimension, cap) in caps.iter() {
                max[dimension] = max[dimension].saturating_add(*cap);
            }
            answered += 1;
        }

        let unknown = answers
            .iter()
            .filter(|(id, _)| self.table.get(id).is_none())
            .count();
        if unknown > 0 {
            tracing::debug!("Ignored {unknown} answer(s) to unknown questions");
        }

        RawScore::new(raw, max, answered)
    }

    /// Score and normalize in one step.
    #[must_use]
    pub fn score_full(&self, answers: &AnswerSet) -> Score {
        self.score(answers).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimension, LocalizedText};
    use crate::scoring::Bucket;
    use crate::weights::{ChoiceOption, Question};

    fn table() -> WeightTable {
        let text = || LocalizedText::new("x", "x");
        WeightTable::new(vec![
            Question::choice(
                "a",
                text(),
                vec![
                    ChoiceOption::new(text(), [(Dimension::Habits, 2), (Dimension::Confidence, 1)]),
                    ChoiceOption::new(text(), [(Dimension::Habits, -2)]),
                ],
            ),
            Question::slider("b", text(), vec![Dimension::Habits, Dimension::Resilience]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let table = table();
        let raw = ScoringEngine::new(&table).score(&AnswerSet::new());
        for dimension in Dimension::ALL {
            assert_eq!(raw.raw(dimension), 0);
            assert_eq!(raw.max(dimension), 0);
        }
        assert_eq!(raw.answered_questions(), 0);
    }

    #[test]
    fn test_cap_added_once_regardless_of_choice() {
        let table = table();
        let engine = ScoringEngine::new(&table);

        let worst = engine.score(&AnswerSet::new().with("a", 1));
        assert_eq!(worst.raw(Dimension::Habits), -2);
        assert_eq!(worst.max(Dimension::Habits), 2);
        // Option 1 never touches confidence, but the question's cap still counts.
        assert_eq!(worst.raw(Dimension::Confidence), 0);
        assert_eq!(worst.max(Dimension::Confidence), 1);
    }

    #[test]
    fn test_slider_contributes_to_each_listed_dimension() {
        let table = table();
        let raw = ScoringEngine::new(&table).score(&AnswerSet::new().with("a", 0).with("b", 4));
        assert_eq!(raw.raw(Dimension::Habits), 4);
        assert_eq!(raw.max(Dimension::Habits), 4);
        assert_eq!(raw.raw(Dimension::Resilience), 2);
        assert_eq!(raw.max(Dimension::Resilience), 2);
        assert_eq!(raw.answered_questions(), 2);
    }

    #[test]
    fn test_out_of_range_treated_as_unanswered() {
        let table = table();
        let engine = ScoringEngine::new(&table);
        let baseline = engine.score(&AnswerSet::new().with("a", 0));
        let with_bad = engine.score(&AnswerSet::new().with("a", 0).with("b", 5));
        assert_eq!(baseline, with_bad);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let table = table();
        let engine = ScoringEngine::new(&table);
        let raw = engine.score(&AnswerSet::new().with("zzz", 1));
        assert_eq!(raw, engine.score(&AnswerSet::new()));
    }

    #[test]
    fn test_score_full_normalizes() {
        let table = table();
        let score = ScoringEngine::new(&table).score_full(&AnswerSet::new().with("a", 0));
        let habits = score.get(Dimension::Habits).unwrap();
        assert_eq!(habits.pct, 100);
        assert_eq!(habits.bucket, Bucket::Strong);
        assert_eq!(score.pct(Dimension::Resilience), 0);
    }
}
