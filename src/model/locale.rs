//! Locale selection and bilingual text.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Language that copy is resolved to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

impl Locale {
    /// ISO 639-1 code, used as the `lang` query parameter value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parse a language tag such as `es`, `ES`, `es-MX` or `en_US`.
    ///
    /// Only the primary subtag is considered.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unsupported locale '{s}'. Valid options: en, es"))
    }
}

/// A piece of copy available in every supported [`Locale`].
///
/// Built-in copy borrows `'static` strings; copy loaded from a YAML weight
/// table owns its strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: Cow<'static, str>,
    pub es: Cow<'static, str>,
}

impl LocalizedText {
    /// Create text from static strings.
    #[must_use]
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self {
            en: Cow::Borrowed(en),
            es: Cow::Borrowed(es),
        }
    }

    /// Resolve to the given locale.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => self.en.as_ref(),
            Locale::Es => self.es.as_ref(),
        }
    }
}
