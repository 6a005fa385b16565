//! Percentage normalization and bucketing.

use crate::model::{Locale, LocalizedText};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the `needs-focus` bucket.
pub const NEEDS_FOCUS_BELOW: u8 = 40;
/// Upper bound (exclusive) of the `building` bucket.
pub const BUILDING_BELOW: u8 = 70;
/// Upper bound (exclusive) of the `solid` bucket.
pub const SOLID_BELOW: u8 = 85;

/// Map a raw dimension sum onto 0-100.
///
/// Assumes every question swings the dimension symmetrically, so `raw` lies
/// in `[-max, +max]`; values outside are clamped. A dimension nobody answered
/// (`max == 0`) normalizes to 0.
#[must_use]
pub fn normalize(raw: i32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let max = f64::from(max);
    let ratio = ((f64::from(raw) + max) / (2.0 * max)).clamp(0.0, 1.0);
    (ratio * 100.0).round() as u8
}

/// Ordinal tier a percentage falls into, ordered from most to least in need.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    /// Below 40
    NeedsFocus,
    /// 40-69
    Building,
    /// 70-84
    Solid,
    /// 85 and above
    Strong,
}

impl Bucket {
    /// All buckets in severity order.
    pub const ALL: [Self; 4] = [Self::NeedsFocus, Self::Building, Self::Solid, Self::Strong];

    /// Bucket for a percentage. Monotonic: a higher `pct` never yields a
    /// lower bucket.
    #[must_use]
    pub const fn from_pct(pct: u8) -> Self {
        if pct < NEEDS_FOCUS_BELOW {
            Self::NeedsFocus
        } else if pct < BUILDING_BELOW {
            Self::Building
        } else if pct < SOLID_BELOW {
            Self::Solid
        } else {
            Self::Strong
        }
    }

    /// Position in the severity order, 0 = most in need.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::NeedsFocus => 0,
            Self::Building => 1,
            Self::Solid => 2,
            Self::Strong => 3,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NeedsFocus => "needs-focus",
            Self::Building => "building",
            Self::Solid => "solid",
            Self::Strong => "strong",
        }
    }

    #[must_use]
    pub const fn label(self) -> LocalizedText {
        match self {
            Self::NeedsFocus => LocalizedText::new("Needs focus", "Necesita atención"),
            Self::Building => LocalizedText::new("Building", "En construcción"),
            Self::Solid => LocalizedText::new("Solid", "Sólido"),
            Self::Strong => LocalizedText::new("Strong", "Fuerte"),
        }
    }

    /// Localized label, convenience for report rendering.
    #[must_use]
    pub fn display(self, locale: Locale) -> String {
        self.label().get(locale).to_string()
    }

    /// Parse a bucket from its key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key.trim())
    }
}

/// Free-function form of [`Bucket::from_pct`].
#[must_use]
pub const fn bucketize(pct: u8) -> Bucket {
    Bucket::from_pct(pct)
}

/// Free-function form of [`Bucket::rank`].
#[must_use]
pub const fn rank(bucket: Bucket) -> u8 {
    bucket.rank()
}
