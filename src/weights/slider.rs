//! Display state for slider questions, derived without hidden state.

use super::question::{Question, QuestionKind, SLIDER_BUCKETS, SLIDER_MIDDLE_BUCKET};
use crate::model::Locale;
use serde::Serialize;

/// What a slider should show for the current answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderView<'a> {
    /// Bucket the handle sits on
    pub bucket: u32,
    /// Handle position along the track, 0-100
    pub fill_percent: u8,
    /// Localized label of the bucket
    pub label: &'a str,
    /// False when showing the default middle position
    pub answered: bool,
}

impl<'a> SliderView<'a> {
    /// Derive the view for `answer`, or `None` if `question` is not a slider.
    ///
    /// Missing and out-of-range answers both show the middle bucket.
    #[must_use]
    pub fn for_answer(question: &'a Question, answer: Option<u32>, locale: Locale) -> Option<Self> {
        let QuestionKind::Slider { .. } = question.kind else {
            return None;
        };

        let valid = answer.filter(|b| (*b as usize) < SLIDER_BUCKETS);
        let bucket = valid.unwrap_or(SLIDER_MIDDLE_BUCKET);
        let fill_percent = (bucket as usize * 100 / (SLIDER_BUCKETS - 1)) as u8;
        let label = question
            .answer_label(bucket as usize)
            .map_or("", |text| text.get(locale));

        Some(Self {
            bucket,
            fill_percent,
            label,
            answered: valid.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimension, LocalizedText};
    use crate::weights::ChoiceOption;

    fn slider() -> Question {
        Question::slider(
            "s",
            LocalizedText::new("Trust?", "¿Confianza?"),
            vec![Dimension::Inclusion],
        )
    }

    #[test]
    fn test_unanswered_shows_middle() {
        let q = slider();
        let view = SliderView::for_answer(&q, None, Locale::En).unwrap();
        assert_eq!(view.bucket, 2);
        assert_eq!(view.fill_percent, 50);
        assert_eq!(view.label, "Somewhat");
        assert!(!view.answered);
    }

    #[test]
    fn test_answered_positions() {
        let q = slider();
        let ends: Vec<_> = [0, 1, 3, 4]
            .into_iter()
            .map(|b| SliderView::for_answer(&q, Some(b), Locale::Es).unwrap())
            .map(|v| (v.fill_percent, v.label))
            .collect();
        assert_eq!(
            ends,
            [(0, "Para nada"), (25, "Un poco"), (75, "Bastante"), (100, "Totalmente")]
        );
    }

    #[test]
    fn test_out_of_range_falls_back_to_middle() {
        let q = slider();
        let view = SliderView::for_answer(&q, Some(9), Locale::En).unwrap();
        assert_eq!(view.bucket, 2);
        assert!(!view.answered);
    }

    #[test]
    fn test_choice_has_no_slider_view() {
        let q = Question::choice(
            "c",
            LocalizedText::new("?", "?"),
            vec![ChoiceOption::new(LocalizedText::new("a", "a"), [(Dimension::Habits, 1)])],
        );
        assert!(SliderView::for_answer(&q, Some(0), Locale::En).is_none());
    }
}
