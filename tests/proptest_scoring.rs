//! Property-based tests for scoring, classification and plan selection.
//!
//! Ensures the pipeline is total over arbitrary answer sets and that its
//! ordering invariants hold across random inputs.

use finwell::Assessment;
use finwell::model::{AnswerSet, Dimension, Locale};
use finwell::persona::{Percentages, Persona, classify};
use finwell::scoring::{Bucket, ScoringEngine, bucketize, normalize};
use finwell::weights::WeightTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

fn answer_set(map: BTreeMap<String, u32>) -> AnswerSet {
    map.into_iter()
        .fold(AnswerSet::new(), |answers, (id, index)| answers.with(id, index))
}

/// Answers mixing real ids, unknown ids and out-of-range indices.
fn arb_answers() -> impl Strategy<Value = AnswerSet> {
    prop::collection::btree_map("q(1[0-2]|[0-9])", 0u32..8, 0..12).prop_map(answer_set)
}

fn arb_percentages() -> impl Strategy<Value = Percentages> {
    (0u8..=100, 0u8..=100, 0u8..=100, 0u8..=100).prop_map(
        |(habits, confidence, resilience, inclusion)| Percentages {
            habits,
            confidence,
            resilience,
            inclusion,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn normalize_stays_in_range(raw in -1000i32..1000, max in 0u32..1000) {
        let pct = normalize(raw, max);
        prop_assert!(pct <= 100);
        if max == 0 {
            prop_assert_eq!(pct, 0);
        }
    }

    #[test]
    fn normalize_is_monotonic_in_raw(a in -50i32..50, b in -50i32..50, max in 1u32..50) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalize(low, max) <= normalize(high, max));
    }

    #[test]
    fn bucketize_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bucketize(low) <= bucketize(high));
        prop_assert!(bucketize(low).rank() <= bucketize(high).rank());
    }

    #[test]
    fn scoring_is_total_and_bounded(answers in arb_answers()) {
        let table = WeightTable::builtin().unwrap();
        let score = ScoringEngine::new(&table).score_full(&answers);
        prop_assert!(score.answered_questions <= table.len());
        for dimension in Dimension::ALL {
            let result = score.get(dimension).unwrap();
            prop_assert!(result.pct <= 100);
            prop_assert!(result.raw.unsigned_abs() <= result.max);
            prop_assert_eq!(result.bucket, Bucket::from_pct(result.pct));
        }
    }

    #[test]
    fn scoring_is_deterministic(answers in arb_answers()) {
        let table = WeightTable::builtin().unwrap();
        let engine = ScoringEngine::new(&table);
        prop_assert_eq!(engine.score_full(&answers), engine.score_full(&answers));
    }

    #[test]
    fn unknown_answers_change_nothing(answers in arb_answers(), index in 0u32..4) {
        let table = WeightTable::builtin().unwrap();
        let engine = ScoringEngine::new(&table);
        let noisy = answers.clone().with("not-a-question", index);
        prop_assert_eq!(engine.score_full(&answers), engine.score_full(&noisy));
    }

    #[test]
    fn unanswered_question_is_as_if_absent(
        map in prop::collection::btree_map("q(10|[1-9])", 0u32..5, 0..10),
        skipped in 0usize..10,
    ) {
        let table = WeightTable::builtin().unwrap();
        let skipped_id = table.questions()[skipped].id.clone();
        let mut map = map;
        map.remove(&skipped_id);
        let answers = answer_set(map);

        let reduced = WeightTable::new(
            table
                .questions()
                .iter()
                .filter(|q| q.id != skipped_id)
                .cloned()
                .collect(),
        )
        .unwrap();

        let full = ScoringEngine::new(&table).score_full(&answers);
        let without = ScoringEngine::new(&reduced).score_full(&answers);
        for dimension in Dimension::ALL {
            let (a, b) = (full.get(dimension).unwrap(), without.get(dimension).unwrap());
            prop_assert_eq!((a.raw, a.max), (b.raw, b.max), "{} skipping {}", dimension, &skipped_id);
        }
    }

    #[test]
    fn classification_is_total_and_ordered(p in arb_percentages()) {
        let persona = classify(&p);
        prop_assert!(Persona::ALL.contains(&persona));
        if p.habits >= 70 && p.resilience >= 70 && p.confidence >= 70 {
            prop_assert_eq!(persona, Persona::Secure);
        } else if p.confidence < 40 && p.resilience < 40 {
            prop_assert_eq!(persona, Persona::Overwhelmed);
        }
    }

    #[test]
    fn plan_is_a_distinct_prefix(answers in arb_answers(), max_steps in 0usize..16) {
        let assessment = Assessment::builtin().unwrap();
        let score = assessment.score(&answers);
        let metrics = score.metrics();
        let selector = assessment.selector();
        let candidates = selector.candidates(&metrics);
        let steps = selector.select_steps(&metrics, Locale::En, max_steps);

        prop_assert_eq!(candidates.len(), assessment.catalog().len());
        prop_assert_eq!(steps.len(), max_steps.min(assessment.catalog().len()));
        let ids: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(ids.len(), steps.len());
        for (step, (candidate, source)) in steps.iter().zip(&candidates) {
            prop_assert_eq!(&step.id, &candidate.id);
            prop_assert_eq!(step.source, *source);
        }
    }
}
