//! The assessment pipeline: answers in, scored and classified report out.

use crate::config::{AppConfig, Validatable};
use crate::error::{CatalogErrorKind, ErrorContext, FinwellError, OptionContext, Result};
use crate::model::{AnswerSet, Locale, LocalizedText};
use crate::persona::{Persona, PersonaClassifier};
use crate::plan::{
    ActionCatalog, DEFAULT_FOCUS_CEILING, DEFAULT_MAX_STEPS, RecommendationSelector, ResolvedStep, StepSource,
};
use crate::scoring::{Bucket, SCORING_ENGINE_VERSION, Score, ScoringEngine};
use crate::weights::WeightTable;
use serde::{Deserialize, Serialize};

/// A ready-to-use assessment: question bank, action catalog and plan
/// settings, validated together.
///
/// Immutable once built and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Assessment {
    table: WeightTable,
    catalog: ActionCatalog,
    classifier: PersonaClassifier,
    focus_ceiling: Bucket,
    max_steps: usize,
}

impl Assessment {
    #[must_use]
    pub fn builder() -> AssessmentBuilder {
        AssessmentBuilder::default()
    }

    /// Built-in question bank and catalog with default settings.
    pub fn builtin() -> Result<Self> {
        Self::builder().build()
    }

    /// Build from configuration, loading a custom question bank if one is set.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.ensure_valid()?;

        let mut builder = Self::builder()
            .focus_ceiling(config.plan.focus_ceiling)
            .max_steps(config.assessment.max_steps);
        if let Some(ref path) = config.assessment.questions_file {
            let table = WeightTable::from_yaml_file(path)
                .with_context(|| format!("loading questions from {}", path.display()))?;
            builder = builder.table(table);
        }
        builder.build()
    }

    #[must_use]
    pub const fn table(&self) -> &WeightTable {
        &self.table
    }

    #[must_use]
    pub const fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn max_steps(&self) -> usize {
        self.max_steps
    }

    #[must_use]
    pub const fn engine(&self) -> ScoringEngine<'_> {
        ScoringEngine::new(&self.table)
    }

    #[must_use]
    pub const fn selector(&self) -> RecommendationSelector<'_> {
        RecommendationSelector::new(&self.catalog).with_focus_ceiling(self.focus_ceiling)
    }

    /// Check a single answer strictly, returning its label.
    ///
    /// Scoring tolerates unknown ids and out-of-range indices; this is for
    /// callers that record answers and want typos rejected up front.
    pub fn check_answer(&self, question_id: &str, index: u32) -> Result<&LocalizedText> {
        let question = self
            .table
            .get(question_id)
            .with_context_none(|| format!("unknown question '{question_id}'"))?;
        question.answer_label(index as usize).with_context_none(|| {
            format!(
                "answer {index} is out of range for '{question_id}' (0..{})",
                question.answer_count()
            )
        })
    }

    /// Score answers without classifying or planning.
    #[must_use]
    pub fn score(&self, answers: &AnswerSet) -> Score {
        self.engine().score_full(answers)
    }

    /// Run the full pipeline with the configured plan length.
    #[must_use]
    pub fn assess(&self, answers: &AnswerSet, locale: Locale) -> AssessmentReport {
        self.assess_with_steps(answers, locale, self.max_steps)
    }

    /// Run the full pipeline with an explicit plan length.
    #[must_use]
    pub fn assess_with_steps(
        &self,
        answers: &AnswerSet,
        locale: Locale,
        max_steps: usize,
    ) -> AssessmentReport {
        let score = self.score(answers);
        let persona = self.classifier.classify_score(&score);
        let steps = self
            .selector()
            .select_steps(&score.metrics(), locale, max_steps);

        tracing::info!(
            "Assessed {}/{} answers: persona {persona}, {} step(s)",
            score.answered_questions,
            self.table.len(),
            steps.len()
        );

        AssessmentReport {
            engine_version: SCORING_ENGINE_VERSION.to_string(),
            locale,
            answered_questions: score.answered_questions,
            total_questions: self.table.len(),
            persona: self.persona_summary(persona, locale),
            score,
            steps,
        }
    }

    fn persona_summary(&self, persona: Persona, locale: Locale) -> PersonaSummary {
        // Featured steps are checked when the assessment is built.
        let featured_step = self
            .catalog
            .get(persona.featured_step())
            .map(|step| ResolvedStep::resolve(step, StepSource::Fallback, locale));
        PersonaSummary {
            key: persona,
            title: persona.title().get(locale).to_string(),
            blurb: persona.blurb().get(locale).to_string(),
            featured_step,
        }
    }
}

/// Builder for [`Assessment`].
#[derive(Debug, Clone)]
#[must_use]
pub struct AssessmentBuilder {
    table: Option<WeightTable>,
    catalog: Option<ActionCatalog>,
    focus_ceiling: Bucket,
    max_steps: usize,
}

impl Default for AssessmentBuilder {
    fn default() -> Self {
        Self {
            table: None,
            catalog: None,
            focus_ceiling: DEFAULT_FOCUS_CEILING,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl AssessmentBuilder {
    /// Use a custom question bank instead of the built-in one.
    pub fn table(mut self, table: WeightTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Use a custom action catalog instead of the built-in one.
    pub fn catalog(mut self, catalog: ActionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub const fn focus_ceiling(mut self, ceiling: Bucket) -> Self {
        self.focus_ceiling = ceiling;
        self
    }

    pub const fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Build, checking that every persona's featured step is in the catalog.
    pub fn build(self) -> Result<Assessment> {
        let table = match self.table {
            Some(table) => table,
            None => WeightTable::builtin()?,
        };
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => ActionCatalog::builtin().context("built-in action catalog")?,
        };

        for persona in Persona::ALL {
            if !catalog.contains(persona.featured_step()) {
                return Err(FinwellError::catalog(
                    "building assessment",
                    CatalogErrorKind::UnknownStep {
                        step: persona.featured_step().to_string(),
                        slot: format!("persona {persona}"),
                    },
                ));
            }
        }

        Ok(Assessment {
            table,
            catalog,
            classifier: PersonaClassifier::new(),
            focus_ceiling: self.focus_ceiling,
            max_steps: self.max_steps,
        })
    }
}

/// Persona with its copy resolved to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSummary {
    pub key: Persona,
    pub title: String,
    pub blurb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_step: Option<ResolvedStep>,
}

/// Everything one assessment produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub engine_version: String,
    pub locale: Locale,
    pub answered_questions: usize,
    pub total_questions: usize,
    pub score: Score,
    pub persona: PersonaSummary,
    pub steps: Vec<ResolvedStep>,
}

impl AssessmentReport {
    /// Whether every question in the bank was answered.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.answered_questions == self.total_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimension, LocalizedText};
    use crate::plan::ActionStep;

    #[test]
    fn test_builtin_assessment_builds() {
        let assessment = Assessment::builtin().unwrap();
        assert_eq!(assessment.max_steps(), 3);
        assert_eq!(assessment.table().len(), 10);
    }

    #[test]
    fn test_empty_answers_report() {
        let assessment = Assessment::builtin().unwrap();
        let report = assessment.assess(&AnswerSet::new(), Locale::En);

        assert_eq!(report.answered_questions, 0);
        assert!(!report.is_complete());
        for dimension in Dimension::ALL {
            assert_eq!(report.score.pct(dimension), 0);
        }
        assert_eq!(report.persona.key, Persona::Overwhelmed);
        assert_eq!(report.steps.len(), 3);
        assert!(report.steps.iter().all(|s| s.source == StepSource::Fallback));
    }

    #[test]
    fn test_featured_step_resolved_in_locale() {
        let assessment = Assessment::builtin().unwrap();
        let report = assessment.assess(&AnswerSet::new(), Locale::Es);
        let featured = report.persona.featured_step.unwrap();
        assert_eq!(featured.id, Persona::Overwhelmed.featured_step());
        assert!(featured.href.ends_with("lang=es"));
        assert_eq!(report.persona.title, "Abrumado");
    }

    #[test]
    fn test_check_answer() {
        let assessment = Assessment::builtin().unwrap();
        assert_eq!(
            assessment.check_answer("q1", 0).unwrap().get(Locale::En),
            "Every week"
        );
        assert!(matches!(
            assessment.check_answer("q1", 4),
            Err(FinwellError::Validation(_))
        ));
        assert!(matches!(
            assessment.check_answer("q99", 0),
            Err(FinwellError::Validation(_))
        ));
    }

    #[test]
    fn test_explicit_step_count() {
        let assessment = Assessment::builder().max_steps(1).build().unwrap();
        let answers = AnswerSet::new().with("q1", 3);
        assert_eq!(assessment.assess(&answers, Locale::En).steps.len(), 1);
        assert!(assessment.assess_with_steps(&answers, Locale::En, 0).steps.is_empty());
    }

    #[test]
    fn test_catalog_missing_featured_step_rejected() {
        let text = || LocalizedText::new("t", "t");
        let mut builder = ActionCatalog::builder();
        for dimension in Dimension::ALL {
            let id = format!("{dimension}-step");
            builder = builder
                .step(ActionStep::new(&id, Some(dimension), text(), text(), "/s"))
                .focus(dimension, id.clone())
                .growth(dimension, id);
        }
        let catalog = builder
            .step(ActionStep::new("general", None, text(), text(), "/g"))
            .fallback("general")
            .build()
            .unwrap();

        let err = Assessment::builder().catalog(catalog).build().unwrap_err();
        assert!(matches!(
            err,
            FinwellError::Catalog {
                source: CatalogErrorKind::UnknownStep { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_from_config_rejects_invalid_settings() {
        let config = AppConfig::builder().max_steps(0).build();
        assert!(matches!(
            Assessment::from_config(&config),
            Err(FinwellError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_applies_focus_ceiling() {
        let config = AppConfig::builder()
            .focus_ceiling(Bucket::Building)
            .max_steps(1)
            .build();
        let assessment = Assessment::from_config(&config).unwrap();
        // Habits at 75% is `solid`: focus by default, growth under this ceiling.
        let answers = AnswerSet::new().with("q1", 1);
        assert_eq!(
            Assessment::builtin().unwrap().assess(&answers, Locale::En).steps[0].source,
            StepSource::Focus
        );
        let report = assessment.assess(&answers, Locale::En);
        assert_eq!(report.steps[0].source, StepSource::Growth);
    }
}
