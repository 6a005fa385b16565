//! End-to-end tests of the assessment pipeline on the built-in bank.

use finwell::model::{AnswerSet, Dimension, Locale};
use finwell::persona::{Percentages, Persona, PersonaClassifier};
use finwell::plan::StepSource;
use finwell::reports::{ReportFormat, create_reporter};
use finwell::scoring::Bucket;
use finwell::{Assessment, WeightTable};

fn best_answers() -> AnswerSet {
    AnswerSet::new()
        .with("q1", 0)
        .with("q2", 0)
        .with("q3", 0)
        .with("q4", 0)
        .with("q5", 4)
        .with("q6", 0)
        .with("q7", 0)
        .with("q8", 4)
        .with("q9", 4)
        .with("q10", 0)
}

fn worst_answers() -> AnswerSet {
    AnswerSet::new()
        .with("q1", 3)
        .with("q2", 3)
        .with("q3", 3)
        .with("q4", 3)
        .with("q5", 0)
        .with("q6", 3)
        .with("q7", 3)
        .with("q8", 0)
        .with("q9", 0)
        .with("q10", 3)
}

// ============================================================================
// Scoring scenarios
// ============================================================================

#[test]
fn worst_single_answer_scores_zero() {
    let assessment = Assessment::builtin().unwrap();
    let score = assessment.score(&AnswerSet::new().with("q1", 3));
    let habits = score.get(Dimension::Habits).unwrap();

    assert_eq!(habits.raw, -2);
    assert_eq!(habits.max, 2);
    assert_eq!(habits.pct, 0);
    assert_eq!(habits.bucket, Bucket::NeedsFocus);
    assert_eq!(score.answered_questions, 1);
}

#[test]
fn empty_answers_score_zero_everywhere() {
    let assessment = Assessment::builtin().unwrap();
    let score = assessment.score(&AnswerSet::new());
    for dimension in Dimension::ALL {
        let result = score.get(dimension).unwrap();
        assert_eq!((result.raw, result.max, result.pct), (0, 0, 0));
        assert!(!result.is_scored());
    }
}

#[test]
fn skipped_questions_do_not_dilute() {
    let assessment = Assessment::builtin().unwrap();
    // One perfect habits answer scores 100% even though q2 and q9 also
    // touch habits and were skipped.
    let score = assessment.score(&AnswerSet::new().with("q1", 0));
    assert_eq!(score.pct(Dimension::Habits), 100);
}

#[test]
fn unanswered_slider_adds_nothing() {
    let assessment = Assessment::builtin().unwrap();
    let without = assessment.score(&AnswerSet::new().with("q6", 0));
    let with_middle = assessment.score(&AnswerSet::new().with("q6", 0).with("q5", 2));

    assert_eq!(without.pct(Dimension::Confidence), 100);
    // Answering the middle bucket counts toward the denominator.
    assert!(with_middle.pct(Dimension::Confidence) < 100);
}

// ============================================================================
// Persona scenarios
// ============================================================================

#[test]
fn uniform_eighty_is_secure() {
    assert_eq!(
        PersonaClassifier::new().classify(&Percentages::uniform(80)),
        Persona::Secure
    );
}

#[test]
fn low_confidence_and_resilience_is_overwhelmed_despite_strong_habits() {
    let p = Percentages {
        habits: 90,
        confidence: 30,
        resilience: 20,
        inclusion: 90,
    };
    assert_eq!(PersonaClassifier::new().classify(&p), Persona::Overwhelmed);
}

#[test]
fn best_answers_make_a_secure_profile() {
    let assessment = Assessment::builtin().unwrap();
    let report = assessment.assess(&best_answers(), Locale::En);

    assert!(report.is_complete());
    for dimension in Dimension::ALL {
        assert_eq!(report.score.pct(dimension), 100);
    }
    assert_eq!(report.persona.key, Persona::Secure);
    assert_eq!(report.steps.len(), 3);
    assert!(report.steps.iter().all(|s| s.source == StepSource::Growth));
}

#[test]
fn worst_answers_make_an_overwhelmed_profile() {
    let assessment = Assessment::builtin().unwrap();
    let report = assessment.assess(&worst_answers(), Locale::Es);

    assert_eq!(report.persona.key, Persona::Overwhelmed);
    assert_eq!(report.persona.title, Persona::Overwhelmed.title().get(Locale::Es));
    assert!(report.steps.iter().all(|s| s.source == StepSource::Focus));
    assert!(
        report
            .steps
            .iter()
            .filter(|s| !s.href.starts_with("http"))
            .all(|s| s.href.contains("lang=es"))
    );
}

// ============================================================================
// Plan scenarios
// ============================================================================

#[test]
fn weakest_dimension_comes_first() {
    let assessment = Assessment::builtin().unwrap();
    // Habits at 25%, resilience at 0%: both need focus, lower pct first.
    let answers = AnswerSet::new().with("q1", 2).with("q3", 3);
    let report = assessment.assess(&answers, Locale::En);

    assert_eq!(report.steps[0].dimension, Some(Dimension::Resilience));
    assert_eq!(report.steps[0].source, StepSource::Focus);
}

#[test]
fn plan_never_repeats_a_step() {
    let assessment = Assessment::builtin().unwrap();
    let report = assessment.assess_with_steps(&worst_answers(), Locale::En, 20);
    let mut ids: Vec<&str> = report.steps.iter().map(|s| s.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

// ============================================================================
// Custom tables and rendering
// ============================================================================

#[test]
fn yaml_table_drives_assessment() {
    let yaml = r#"
questions:
  - id: save
    prompt: { en: "Do you save?", es: "¿Ahorras?" }
    kind: choice
    options:
      - label: { en: "Yes", es: "Sí" }
        weights: { resilience: 3 }
      - label: { en: "No", es: "No" }
        weights: { resilience: -3 }
"#;
    let table = WeightTable::from_yaml_str(yaml).unwrap();
    let assessment = Assessment::builder().table(table).build().unwrap();
    let report = assessment.assess(&AnswerSet::new().with("save", 1), Locale::En);

    assert_eq!(report.total_questions, 1);
    assert_eq!(report.score.pct(Dimension::Resilience), 0);
    assert_eq!(report.steps[0].dimension, Some(Dimension::Resilience));
}

#[test]
fn every_format_renders() {
    let assessment = Assessment::builtin().unwrap();
    let report = assessment.assess(&best_answers(), Locale::En);
    for format in [ReportFormat::Summary, ReportFormat::Json] {
        let rendered = create_reporter(format, false).generate(&report).unwrap();
        assert!(!rendered.is_empty(), "{format} rendered nothing");
    }
}
