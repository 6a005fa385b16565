//! Randomized, replayable question ordering.
//!
//! The weight table is never reordered. A session draws a presentation
//! order for questions and choice options from an injected RNG and maps
//! displayed positions back to the table's own indices, so stored answers
//! always refer to the original option order.

use crate::weights::{Question, WeightTable};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Questions of `table` in a random order.
pub fn shuffled_questions<'t, R: Rng + ?Sized>(
    table: &'t WeightTable,
    rng: &mut R,
) -> Vec<&'t Question> {
    let mut questions: Vec<&Question> = table.questions().iter().collect();
    questions.shuffle(rng);
    questions
}

/// Display order of a question's options, as original indices.
///
/// Slider buckets are ordinal and keep their order.
pub fn shuffled_option_order<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<u32> {
    let count = u32::try_from(question.answer_count()).unwrap_or(u32::MAX);
    let mut order: Vec<u32> = (0..count).collect();
    if !question.is_slider() {
        order.shuffle(rng);
    }
    order
}

/// Presentation order of one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOrder {
    pub id: String,
    /// `options[displayed] == original`
    pub options: Vec<u32>,
}

/// A full presentation order, reproducible from its seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOrder {
    pub seed: u64,
    pub questions: Vec<QuestionOrder>,
}

impl SessionOrder {
    /// Derive the order for `seed`. The same table and seed always give
    /// the same order.
    #[must_use]
    pub fn from_seed(table: &WeightTable, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let questions = shuffled_questions(table, &mut rng)
            .into_iter()
            .map(|question| QuestionOrder {
                id: question.id.clone(),
                options: shuffled_option_order(question, &mut rng),
            })
            .collect();
        tracing::debug!("Derived session order from seed {seed}");
        Self { seed, questions }
    }

    /// Order with a fresh random seed.
    #[must_use]
    pub fn random(table: &WeightTable) -> Self {
        Self::from_seed(table, rand::random())
    }

    /// Translate a displayed option position to the table's index.
    #[must_use]
    pub fn original_index(&self, question_id: &str, displayed: u32) -> Option<u32> {
        self.questions
            .iter()
            .find(|q| q.id == question_id)
            .and_then(|q| q.options.get(displayed as usize).copied())
    }

    /// Question ids in presentation order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }
}
