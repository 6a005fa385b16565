//! Typed access to saved answers and lesson markers.

use super::KeyValueStore;
use crate::error::Result;
use crate::model::AnswerSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key holding the in-progress answer set.
pub const ANSWERS_KEY: &str = "finwell.answers.v1";

/// Prefix of lesson completion keys; the lesson id follows.
pub const LESSON_KEY_PREFIX: &str = "finwell.lesson.";

/// Stored when a lesson is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonMarker {
    pub completed_at: DateTime<Utc>,
}

/// Saved answers and lesson progress over any [`KeyValueStore`].
///
/// Malformed stored JSON reads back as absent.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Saved answers, empty when nothing usable is stored.
    pub fn load_answers(&self) -> AnswerSet {
        self.backend
            .get(ANSWERS_KEY)
            .map(|json| AnswerSet::from_json_lenient(&json))
            .unwrap_or_default()
    }

    pub fn save_answers(&mut self, answers: &AnswerSet) -> Result<()> {
        self.backend.set(ANSWERS_KEY, answers.to_json()?)
    }

    /// Record one answer on top of what is saved. Returns the updated set.
    pub fn record_answer(&mut self, question_id: &str, index: u32) -> Result<AnswerSet> {
        let mut answers = self.load_answers();
        answers.insert(question_id, index);
        self.save_answers(&answers)?;
        Ok(answers)
    }

    pub fn clear_answers(&mut self) -> Result<()> {
        self.backend.remove(ANSWERS_KEY)
    }

    /// Mark a lesson complete now. Re-completing refreshes the timestamp.
    pub fn mark_lesson_complete(&mut self, lesson_id: &str) -> Result<LessonMarker> {
        let marker = LessonMarker {
            completed_at: Utc::now(),
        };
        self.backend
            .set(&lesson_key(lesson_id), serde_json::to_string(&marker)?)?;
        tracing::info!("Marked lesson '{lesson_id}' complete");
        Ok(marker)
    }

    pub fn lesson_marker(&self, lesson_id: &str) -> Option<LessonMarker> {
        let json = self.backend.get(&lesson_key(lesson_id))?;
        match serde_json::from_str(&json) {
            Ok(marker) => Some(marker),
            Err(e) => {
                tracing::debug!("Ignoring malformed marker for lesson '{lesson_id}': {e}");
                None
            }
        }
    }

    pub fn is_lesson_complete(&self, lesson_id: &str) -> bool {
        self.lesson_marker(lesson_id).is_some()
    }

    pub fn clear_lesson(&mut self, lesson_id: &str) -> Result<()> {
        self.backend.remove(&lesson_key(lesson_id))
    }

    /// Ids of every lesson with a valid marker, sorted.
    pub fn completed_lessons(&self) -> Vec<String> {
        self.backend
            .keys()
            .into_iter()
            .filter_map(|key| key.strip_prefix(LESSON_KEY_PREFIX).map(str::to_string))
            .filter(|id| self.is_lesson_complete(id))
            .collect()
    }
}

fn lesson_key(lesson_id: &str) -> String {
    format!("{LESSON_KEY_PREFIX}{lesson_id}")
}
