//! Wellbeing dimensions and per-dimension storage.

use super::LocalizedText;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One axis of financial wellbeing.
///
/// The enumeration order is significant: it is the order reports list
/// dimensions in, and the order unscored dimensions keep when ranked by need.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    /// Day-to-day money habits: tracking, paying on time, saving regularly
    Habits,
    /// Confidence in making and understanding financial decisions
    Confidence,
    /// Ability to absorb shocks: savings cushion, income gaps
    Resilience,
    /// Access to and trust in mainstream financial services
    Inclusion,
}

impl Dimension {
    /// Number of dimensions in the enumeration.
    pub const COUNT: usize = 4;

    /// All dimensions in enumeration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Habits,
        Self::Confidence,
        Self::Resilience,
        Self::Inclusion,
    ];

    /// Position in the enumeration.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Habits => 0,
            Self::Confidence => 1,
            Self::Resilience => 2,
            Self::Inclusion => 3,
        }
    }

    /// Stable machine key, as used in serialized data.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Habits => "habits",
            Self::Confidence => "confidence",
            Self::Resilience => "resilience",
            Self::Inclusion => "inclusion",
        }
    }

    /// Bilingual display name.
    #[must_use]
    pub const fn label(self) -> LocalizedText {
        match self {
            Self::Habits => LocalizedText::new("Money habits", "Hábitos financieros"),
            Self::Confidence => LocalizedText::new("Confidence", "Confianza"),
            Self::Resilience => LocalizedText::new("Resilience", "Resiliencia"),
            Self::Inclusion => LocalizedText::new("Trust & inclusion", "Confianza e inclusión"),
        }
    }

    /// Parse a dimension from its key. Accepts a few legacy aliases.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "habits" => Some(Self::Habits),
            "confidence" => Some(Self::Confidence),
            "resilience" | "stability" => Some(Self::Resilience),
            "inclusion" | "trust" => Some(Self::Inclusion),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value for every [`Dimension`], stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionMap<T> {
    values: [T; Dimension::COUNT],
}

impl<T> DimensionMap<T> {
    /// Build a map by evaluating `f` once per dimension, in enumeration order.
    pub fn from_fn(f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            values: Dimension::ALL.map(f),
        }
    }

    /// Iterate `(dimension, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T> Index<Dimension> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        &self.values[dimension.index()]
    }
}

impl<T> IndexMut<Dimension> for DimensionMap<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        &mut self.values[dimension.index()]
    }
}
