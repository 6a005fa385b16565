//! Ordered rule cascade over normalized percentages.

use super::Persona;
use crate::model::Dimension;
use crate::scoring::Score;
use serde::{Deserialize, Serialize};

/// Normalized percentages the cascade looks at.
///
/// Dimensions nobody answered are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Percentages {
    pub habits: u8,
    pub confidence: u8,
    pub resilience: u8,
    pub inclusion: u8,
}

impl Percentages {
    /// Same percentage on every dimension.
    #[must_use]
    pub const fn uniform(pct: u8) -> Self {
        Self {
            habits: pct,
            confidence: pct,
            resilience: pct,
            inclusion: pct,
        }
    }

    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Habits => self.habits,
            Dimension::Confidence => self.confidence,
            Dimension::Resilience => self.resilience,
            Dimension::Inclusion => self.inclusion,
        }
    }
}

impl From<&Score> for Percentages {
    fn from(score: &Score) -> Self {
        Self {
            habits: score.pct(Dimension::Habits),
            confidence: score.pct(Dimension::Confidence),
            resilience: score.pct(Dimension::Resilience),
            inclusion: score.pct(Dimension::Inclusion),
        }
    }
}

/// One step of the cascade.
#[derive(Debug, Clone, Copy)]
pub struct PersonaRule {
    pub persona: Persona,
    /// Human-readable condition, used in logs
    pub condition: &'static str,
    pub matches: fn(&Percentages) -> bool,
}

/// The cascade, evaluated top to bottom; the first match wins.
pub const PERSONA_RULES: &[PersonaRule] = &[
    PersonaRule {
        persona: Persona::Secure,
        condition: "habits, resilience and confidence >= 70",
        matches: |p| p.habits >= 70 && p.resilience >= 70 && p.confidence >= 70,
    },
    PersonaRule {
        persona: Persona::Overwhelmed,
        condition: "confidence < 40 and resilience < 40",
        matches: |p| p.confidence < 40 && p.resilience < 40,
    },
    PersonaRule {
        persona: Persona::Skeptical,
        condition: "inclusion < 50",
        matches: |p| p.inclusion < 50,
    },
    PersonaRule {
        persona: Persona::Strained,
        condition: "habits < 65 and resilience < 55",
        matches: |p| p.habits < 65 && p.resilience < 55,
    },
    PersonaRule {
        persona: Persona::OptimisticStarter,
        condition: "confidence >= 60, resilience >= 40, 40 <= habits < 75",
        matches: |p| p.confidence >= 60 && p.resilience >= 40 && (40..75).contains(&p.habits),
    },
];

/// Applies [`PERSONA_RULES`], falling back to [`Persona::CautiousBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonaClassifier;

impl PersonaClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Select exactly one persona. Total over every input.
    #[must_use]
    pub fn classify(&self, percentages: &Percentages) -> Persona {
        match PERSONA_RULES.iter().find(|rule| (rule.matches)(percentages)) {
            Some(rule) => {
                tracing::debug!("Persona {} matched: {}", rule.persona, rule.condition);
                rule.persona
            }
            None => {
                tracing::debug!("No persona rule matched; falling back to cautious builder");
                Persona::CautiousBuilder
            }
        }
    }

    /// Classify straight from a score.
    #[must_use]
    pub fn classify_score(&self, score: &Score) -> Persona {
        self.classify(&Percentages::from(score))
    }
}

/// Free-function form of [`PersonaClassifier::classify`].
#[must_use]
pub fn classify(percentages: &Percentages) -> Persona {
    PersonaClassifier.classify(percentages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(habits: u8, confidence: u8, resilience: u8, inclusion: u8) -> Percentages {
        Percentages {
            habits,
            confidence,
            resilience,
            inclusion,
        }
    }

    #[test]
    fn test_all_eighty_is_secure() {
        assert_eq!(classify(&Percentages::uniform(80)), Persona::Secure);
    }

    #[test]
    fn test_secure_ignores_inclusion() {
        assert_eq!(classify(&pct(70, 70, 70, 0)), Persona::Secure);
    }

    #[test]
    fn test_overwhelmed_beats_later_rules() {
        assert_eq!(classify(&pct(90, 30, 20, 90)), Persona::Overwhelmed);
        // Would also satisfy skeptical and strained.
        assert_eq!(classify(&pct(10, 39, 39, 10)), Persona::Overwhelmed);
    }

    #[test]
    fn test_skeptical() {
        assert_eq!(classify(&pct(80, 80, 60, 49)), Persona::Skeptical);
        assert_eq!(classify(&pct(80, 80, 60, 50)), Persona::CautiousBuilder);
    }

    #[test]
    fn test_strained() {
        assert_eq!(classify(&pct(64, 50, 54, 80)), Persona::Strained);
        assert_ne!(classify(&pct(65, 50, 54, 80)), Persona::Strained);
    }

    #[test]
    fn test_optimistic_starter_bounds() {
        assert_eq!(classify(&pct(40, 60, 40, 60)), Persona::Strained);
        assert_eq!(classify(&pct(65, 60, 55, 60)), Persona::OptimisticStarter);
        assert_eq!(classify(&pct(74, 60, 55, 60)), Persona::OptimisticStarter);
        assert_eq!(classify(&pct(75, 60, 55, 60)), Persona::CautiousBuilder);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify(&pct(65, 50, 55, 50)), Persona::CautiousBuilder);
    }

    #[test]
    fn test_totality_on_grid() {
        for h in (0..=100).step_by(5) {
            for c in (0..=100).step_by(5) {
                for r in (0..=100).step_by(5) {
                    for i in (0..=100).step_by(5) {
                        let persona = classify(&pct(h, c, r, i));
                        assert!(Persona::ALL.contains(&persona));
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_score_uses_zero_for_unscored() {
        let score = crate::scoring::RawScore::default().normalize();
        assert_eq!(Percentages::from(&score), Percentages::uniform(0));
        assert_eq!(PersonaClassifier::new().classify_score(&score), Persona::Overwhelmed);
    }
}
