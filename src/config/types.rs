//! Configuration types for finwell.

use crate::model::Locale;
use crate::reports::ReportFormat;
use crate::scoring::Bucket;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Assessment settings (locale, plan length, question bank)
    pub assessment: AssessmentConfig,
    /// Recommendation settings
    pub plan: PlanConfig,
    /// Progress persistence
    pub store: StoreConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Assessment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Language of report copy and step links
    pub locale: Locale,
    /// Number of steps in the action plan
    #[schemars(range(min = 1, max = 10))]
    pub max_steps: usize,
    /// YAML weight table replacing the built-in question bank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_file: Option<PathBuf>,
    /// Seed for a replayable question order; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,
}

/// Recommendation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlanConfig {
    /// Highest bucket that still receives a dimension's focus step
    pub focus_ceiling: Bucket,
}

/// Progress store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding saved answers and lesson markers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Configured path, or the per-user default.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(super::defaults::default_store_path)
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

// ============================================================================
// CLI overrides
// ============================================================================

/// Settings given explicitly on the command line.
///
/// `None` leaves the file or default value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub locale: Option<Locale>,
    pub max_steps: Option<usize>,
    pub questions_file: Option<PathBuf>,
    pub shuffle_seed: Option<u64>,
    pub focus_ceiling: Option<Bucket>,
    pub store_path: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn locale(mut self, locale: Locale) -> Self {
        self.config.assessment.locale = locale;
        self
    }

    pub const fn max_steps(mut self, max_steps: usize) -> Self {
        self.config.assessment.max_steps = max_steps;
        self
    }

    pub fn questions_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.assessment.questions_file = file;
        self
    }

    pub const fn shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.config.assessment.shuffle_seed = seed;
        self
    }

    pub const fn focus_ceiling(mut self, ceiling: Bucket) -> Self {
        self.config.plan.focus_ceiling = ceiling;
        self
    }

    pub fn store_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.store.path = path;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}
