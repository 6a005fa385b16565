//! Persona classification.
//!
//! A persona is a single label summarizing the user's overall profile. It is
//! chosen by an ordered cascade of rules over the normalized percentages; see
//! [`PersonaClassifier`] for the rules.

mod classifier;

pub use classifier::{PERSONA_RULES, Percentages, PersonaClassifier, PersonaRule, classify};

use crate::model::LocalizedText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    /// Habits, resilience and confidence all comfortably high
    Secure,
    /// Low confidence and low resilience at the same time
    Overwhelmed,
    /// Low trust in, or access to, mainstream financial services
    Skeptical,
    /// Habits and resilience both under pressure
    Strained,
    /// Confident and moderately resilient, habits still forming
    OptimisticStarter,
    /// Everyone else
    CautiousBuilder,
}

impl Persona {
    /// All personas, in cascade order.
    pub const ALL: [Self; 6] = [
        Self::Secure,
        Self::Overwhelmed,
        Self::Skeptical,
        Self::Strained,
        Self::OptimisticStarter,
        Self::CautiousBuilder,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Overwhelmed => "overwhelmed",
            Self::Skeptical => "skeptical",
            Self::Strained => "strained",
            Self::OptimisticStarter => "optimistic-starter",
            Self::CautiousBuilder => "cautious-builder",
        }
    }

    #[must_use]
    pub const fn title(self) -> LocalizedText {
        match self {
            Self::Secure => LocalizedText::new("Secure & Confident", "Seguro y con confianza"),
            Self::Overwhelmed => LocalizedText::new("Overwhelmed", "Abrumado"),
            Self::Skeptical => LocalizedText::new("Skeptical Outsider", "Escéptico del sistema"),
            Self::Strained => LocalizedText::new("Stretched Thin", "Al límite"),
            Self::OptimisticStarter => {
                LocalizedText::new("Optimistic Starter", "Principiante optimista")
            }
            Self::CautiousBuilder => LocalizedText::new("Cautious Builder", "Constructor cauteloso"),
        }
    }

    #[must_use]
    pub const fn blurb(self) -> LocalizedText {
        match self {
            Self::Secure => LocalizedText::new(
                "Your foundation is strong. Keep growing it with intention.",
                "Tu base es sólida. Sigue haciéndola crecer con intención.",
            ),
            Self::Overwhelmed => LocalizedText::new(
                "Money feels heavy right now. Small, steady steps will lighten the load.",
                "El dinero pesa mucho ahora. Pasos pequeños y constantes aligerarán la carga.",
            ),
            Self::Skeptical => LocalizedText::new(
                "Financial institutions haven't earned your trust. Safe options exist on your terms.",
                "Las instituciones financieras no se han ganado tu confianza. Hay opciones seguras a tu manera.",
            ),
            Self::Strained => LocalizedText::new(
                "You're juggling a lot. A simple plan and a small cushion go a long way.",
                "Estás haciendo malabares. Un plan sencillo y un pequeño colchón ayudan mucho.",
            ),
            Self::OptimisticStarter => LocalizedText::new(
                "You believe in your future. Now turn that energy into routines.",
                "Crees en tu futuro. Ahora convierte esa energía en hábitos.",
            ),
            Self::CautiousBuilder => LocalizedText::new(
                "You're making progress carefully. Keep building one piece at a time.",
                "Avanzas con cuidado. Sigue construyendo pieza por pieza.",
            ),
        }
    }

    /// Action catalog step highlighted for this persona.
    #[must_use]
    pub const fn featured_step(self) -> &'static str {
        match self {
            Self::Secure => "grow-invest-basics",
            Self::Overwhelmed => "general-one-small-step",
            Self::Skeptical => "focus-safe-account",
            Self::Strained => "focus-emergency-cushion",
            Self::OptimisticStarter => "focus-spending-snapshot",
            Self::CautiousBuilder => "general-monthly-checkin",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key.trim())
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Locale;

    #[test]
    fn test_keys_roundtrip() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_key(persona.key()), Some(persona));
            let json = serde_json::to_string(&persona).unwrap();
            assert_eq!(json, format!("\"{}\"", persona.key()));
        }
    }

    #[test]
    fn test_copy_is_bilingual_and_distinct() {
        for persona in Persona::ALL {
            let title = persona.title();
            assert_ne!(title.get(Locale::En), title.get(Locale::Es), "{persona}");
            assert!(!persona.blurb().get(Locale::Es).is_empty());
        }
    }
}
