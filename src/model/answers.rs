//! A user's answers to the question bank.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from question id to the selected option index (choice questions)
/// or bucket index (slider questions).
///
/// Answer sets are partial: questions a user skipped are simply absent.
/// Whether an index is in range is decided by the scoring engine, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, u32>,
}

impl AnswerSet {
    /// Create an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, question_id: impl Into<String>, index: u32) -> Self {
        self.insert(question_id, index);
        self
    }

    /// Record an answer, replacing any previous answer to the same question.
    pub fn insert(&mut self, question_id: impl Into<String>, index: u32) -> Option<u32> {
        self.answers.insert(question_id.into(), index)
    }

    /// Forget the answer to a question.
    pub fn remove(&mut self, question_id: &str) -> Option<u32> {
        self.answers.remove(question_id)
    }

    /// The answer recorded for a question, if any.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<u32> {
        self.answers.get(question_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate `(question_id, index)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.answers.iter().map(|(id, index)| (id.as_str(), *index))
    }

    /// Parse persisted answers, recovering from anything malformed.
    ///
    /// Input that is not a JSON object yields an empty set. Entries whose
    /// value is not a non-negative integer that fits in `u32` are dropped
    /// individually; the remaining entries survive.
    #[must_use]
    pub fn from_json_lenient(input: &str) -> Self {
        let map = match serde_json::from_str::<serde_json::Map<String, Value>>(input) {
            Ok(map) => map,
            Err(e) => {
                tracing::debug!("Ignoring malformed answer set: {e}");
                return Self::default();
            }
        };

        map.into_iter()
            .filter_map(|(id, value)| {
                let index = value.as_u64().and_then(|n| u32::try_from(n).ok());
                if index.is_none() {
                    tracing::debug!("Dropping non-index answer for '{id}': {value}");
                }
                index.map(|index| (id, index))
            })
            .collect()
    }

    /// Serialize to the compact JSON object form read by
    /// [`from_json_lenient`](Self::from_json_lenient).
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<(String, u32)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_previous_answer() {
        let mut answers = AnswerSet::new().with("q1", 0);
        assert_eq!(answers.insert("q1", 2), Some(0));
        assert_eq!(answers.get("q1"), Some(2));
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.remove("q1"), Some(2));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_lenient_parse_valid_object() {
        let answers = AnswerSet::from_json_lenient(r#"{"q1": 3, "q5": 0}"#);
        assert_eq!(answers, AnswerSet::new().with("q1", 3).with("q5", 0));
    }

    #[test]
    fn test_lenient_parse_malformed_is_empty() {
        for input in ["", "not json", "[1,2,3]", "42", "{\"q1\": 3"] {
            assert!(
                AnswerSet::from_json_lenient(input).is_empty(),
                "{input:?} should parse as empty"
            );
        }
    }

    #[test]
    fn test_lenient_parse_drops_bad_entries() {
        let answers = AnswerSet::from_json_lenient(
            r#"{"q1": -1, "q2": "2", "q3": 1.5, "q4": null, "q5": 4, "q6": 99999999999}"#,
        );
        assert_eq!(answers, AnswerSet::new().with("q5", 4));
    }

    #[test]
    fn test_to_json_is_read_back() {
        let answers = AnswerSet::new().with("q2", 1).with("q10", 3);
        let json = answers.to_json().unwrap();
        assert_eq!(json, r#"{"q10":3,"q2":1}"#);
        assert_eq!(AnswerSet::from_json_lenient(&json), answers);
    }
}
