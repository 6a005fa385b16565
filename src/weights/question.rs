//! Question definitions and their weight contributions.

use crate::model::{Dimension, DimensionMap, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of discrete buckets a slider answer is mapped into.
pub const SLIDER_BUCKETS: usize = 5;

/// Bucket assumed for display when a slider has not been answered.
pub const SLIDER_MIDDLE_BUCKET: u32 = (SLIDER_BUCKETS / 2) as u32;

/// Weight per bucket when a slider does not declare its own scale.
pub const DEFAULT_SLIDER_SCALE: [i32; SLIDER_BUCKETS] = [-2, -1, 0, 1, 2];

/// Bucket labels when a slider does not declare its own.
pub static DEFAULT_SLIDER_LABELS: [LocalizedText; SLIDER_BUCKETS] = [
    LocalizedText::new("Not at all", "Para nada"),
    LocalizedText::new("A little", "Un poco"),
    LocalizedText::new("Somewhat", "Más o menos"),
    LocalizedText::new("Mostly", "Bastante"),
    LocalizedText::new("Completely", "Totalmente"),
];

/// Partial mapping from dimension to signed weight.
///
/// Dimensions not present contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(BTreeMap<Dimension, i32>);

impl WeightMap {
    /// Build from `(dimension, weight)` pairs. Later pairs win.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Dimension, i32)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Weight on a dimension, zero if absent.
    #[must_use]
    pub fn weight(&self, dimension: Dimension) -> i32 {
        self.0.get(&dimension).copied().unwrap_or(0)
    }

    /// Iterate declared `(dimension, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, i32)> + '_ {
        self.0.iter().map(|(d, w)| (*d, *w))
    }

    /// Whether any declared weight is non-zero.
    #[must_use]
    pub fn has_nonzero(&self) -> bool {
        self.0.values().any(|w| *w != 0)
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: LocalizedText,
    #[serde(default)]
    pub weights: WeightMap,
}

impl ChoiceOption {
    pub fn new(label: LocalizedText, weights: impl IntoIterator<Item = (Dimension, i32)>) -> Self {
        Self {
            label,
            weights: WeightMap::from_pairs(weights),
        }
    }
}

/// The two kinds of question, matched exhaustively everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Discrete options, each with its own partial weight map
    Choice { options: Vec<ChoiceOption> },
    /// Continuous input discretized into [`SLIDER_BUCKETS`] buckets; every
    /// listed dimension receives the selected bucket's scale weight
    Slider {
        dimensions: Vec<Dimension>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<[i32; SLIDER_BUCKETS]>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<[LocalizedText; SLIDER_BUCKETS]>,
    },
}

/// An immutable question definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: LocalizedText,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// A choice question.
    pub fn choice(id: impl Into<String>, prompt: LocalizedText, options: Vec<ChoiceOption>) -> Self {
        Self {
            id: id.into(),
            prompt,
            kind: QuestionKind::Choice { options },
        }
    }

    /// A slider question using the default scale and labels.
    pub fn slider(id: impl Into<String>, prompt: LocalizedText, dimensions: Vec<Dimension>) -> Self {
        Self {
            id: id.into(),
            prompt,
            kind: QuestionKind::Slider {
                dimensions,
                scale: None,
                labels: None,
            },
        }
    }

    /// Replace a slider's bucket scale. No effect on choice questions.
    #[must_use]
    pub fn with_scale(mut self, new_scale: [i32; SLIDER_BUCKETS]) -> Self {
        if let QuestionKind::Slider { scale, .. } = &mut self.kind {
            *scale = Some(new_scale);
        }
        self
    }

    #[must_use]
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, QuestionKind::Slider { .. })
    }

    /// Number of valid answer indices (options or buckets).
    #[must_use]
    pub fn answer_count(&self) -> usize {
        match &self.kind {
            QuestionKind::Choice { options } => options.len(),
            QuestionKind::Slider { .. } => SLIDER_BUCKETS,
        }
    }

    /// Weights contributed by selecting `index`, or `None` if out of range.
    #[must_use]
    pub fn selection_weights(&self, index: u32) -> Option<DimensionMap<i32>> {
        let index = usize::try_from(index).ok()?;
        match &self.kind {
            QuestionKind::Choice { options } => {
                let option = options.get(index)?;
                Some(DimensionMap::from_fn(|d| option.weights.weight(d)))
            }
            QuestionKind::Slider {
                dimensions, scale, ..
            } => {
                let weight = scale.unwrap_or(DEFAULT_SLIDER_SCALE).get(index).copied()?;
                Some(DimensionMap::from_fn(|d| {
                    if dimensions.contains(&d) { weight } else { 0 }
                }))
            }
        }
    }

    /// Largest weight magnitude any single option or bucket contributes to
    /// `dimension`.
    #[must_use]
    pub fn cap(&self, dimension: Dimension) -> u32 {
        self.weight_range(dimension)
            .map_or(0, |(low, high)| low.unsigned_abs().max(high.unsigned_abs()))
    }

    /// Lowest and highest weight on `dimension` across all options/buckets,
    /// or `None` if the question never touches it. Options that leave the
    /// dimension out count as zero.
    #[must_use]
    pub fn weight_range(&self, dimension: Dimension) -> Option<(i32, i32)> {
        let weights: Vec<i32> = match &self.kind {
            QuestionKind::Choice { options } => {
                if !options.iter().any(|o| o.weights.0.contains_key(&dimension)) {
                    return None;
                }
                options.iter().map(|o| o.weights.weight(dimension)).collect()
            }
            QuestionKind::Slider {
                dimensions, scale, ..
            } => {
                if !dimensions.contains(&dimension) {
                    return None;
                }
                scale.unwrap_or(DEFAULT_SLIDER_SCALE).to_vec()
            }
        };
        let low = weights.iter().copied().min()?;
        let high = weights.iter().copied().max()?;
        Some((low, high))
    }

    /// Whether some option or bucket carries a non-zero weight.
    #[must_use]
    pub fn has_nonzero_weight(&self) -> bool {
        match &self.kind {
            QuestionKind::Choice { options } => options.iter().any(|o| o.weights.has_nonzero()),
            QuestionKind::Slider {
                dimensions, scale, ..
            } => !dimensions.is_empty() && scale.unwrap_or(DEFAULT_SLIDER_SCALE).iter().any(|w| *w != 0),
        }
    }

    /// Label for answer `index` in display order.
    #[must_use]
    pub fn answer_label(&self, index: usize) -> Option<&LocalizedText> {
        match &self.kind {
            QuestionKind::Choice { options } => options.get(index).map(|o| &o.label),
            QuestionKind::Slider { labels, .. } => labels
                .as_ref()
                .unwrap_or(&DEFAULT_SLIDER_LABELS)
                .get(index),
        }
    }
}
