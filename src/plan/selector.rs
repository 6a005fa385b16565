//! Need ranking and plan assembly.

use super::catalog::{ActionCatalog, ActionStep};
use super::links::localize_href;
use crate::model::{Dimension, Locale};
use crate::scoring::{Bucket, DimensionMetric, DimensionMetrics};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of steps in a plan.
pub const DEFAULT_MAX_STEPS: usize = 3;

/// Highest bucket that receives focus steps by default (ranks 0 through 2).
pub const DEFAULT_FOCUS_CEILING: Bucket = Bucket::Solid;

/// Where a selected step came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepSource {
    /// Focus variant of a weak dimension
    Focus,
    /// Growth variant of an adequate dimension
    Growth,
    /// General fallback list
    Fallback,
}

/// A plan step resolved to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStep {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    pub source: StepSource,
    pub title: String,
    pub detail: String,
    pub href: String,
}

impl ResolvedStep {
    /// Resolve copy and link of a catalog step.
    #[must_use]
    pub fn resolve(step: &ActionStep, source: StepSource, locale: Locale) -> Self {
        Self {
            id: step.id.clone(),
            dimension: step.dimension,
            source,
            title: step.title.get(locale).to_string(),
            detail: step.detail.get(locale).to_string(),
            href: localize_href(&step.href, locale),
        }
    }
}

/// Ranks dimensions by need and assembles a deduplicated plan.
///
/// A dimension whose bucket is at or below the focus ceiling is weak and
/// receives its focus step; stronger dimensions receive their growth step.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationSelector<'c> {
    catalog: &'c ActionCatalog,
    focus_ceiling: Bucket,
}

impl<'c> RecommendationSelector<'c> {
    /// Selector with the default `solid` focus ceiling.
    #[must_use]
    pub const fn new(catalog: &'c ActionCatalog) -> Self {
        Self {
            catalog,
            focus_ceiling: DEFAULT_FOCUS_CEILING,
        }
    }

    #[must_use]
    pub const fn with_focus_ceiling(mut self, ceiling: Bucket) -> Self {
        self.focus_ceiling = ceiling;
        self
    }

    #[must_use]
    pub const fn focus_ceiling(&self) -> Bucket {
        self.focus_ceiling
    }

    /// Whether a metric counts as weak.
    #[must_use]
    pub const fn is_focus(&self, metric: &DimensionMetric) -> bool {
        metric.rank() <= self.focus_ceiling.rank()
    }

    /// All dimensions, most in need first.
    ///
    /// Scored dimensions sort by bucket rank then percentage, ties keeping
    /// enumeration order. Unscored dimensions follow in enumeration order.
    #[must_use]
    pub fn rank_dimensions(&self, metrics: &DimensionMetrics) -> Vec<Dimension> {
        let mut scored: Vec<(Dimension, DimensionMetric)> = Dimension::ALL
            .into_iter()
            .filter_map(|d| metrics.get(&d).map(|m| (d, *m)))
            .collect();
        scored.sort_by_key(|(_, m)| (m.rank(), m.pct));

        let unscored = Dimension::ALL
            .into_iter()
            .filter(|d| !metrics.contains_key(d));
        scored.into_iter().map(|(d, _)| d).chain(unscored).collect()
    }

    /// Every distinct step the plan could draw from, in priority order.
    ///
    /// Chosen variants come first, then the fallback list, then the rest of
    /// the catalog in catalog order. A plan is always a prefix of this list,
    /// which holds every catalog entry exactly once.
    #[must_use]
    pub fn candidates(&self, metrics: &DimensionMetrics) -> Vec<(&'c ActionStep, StepSource)> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for dimension in self.rank_dimensions(metrics) {
            let Some(metric) = metrics.get(&dimension) else {
                continue;
            };
            let (step, source) = if self.is_focus(metric) {
                (self.catalog.focus_step(dimension), StepSource::Focus)
            } else {
                (self.catalog.growth_step(dimension), StepSource::Growth)
            };
            if seen.insert(step.id.as_str()) {
                candidates.push((step, source));
            } else {
                tracing::debug!("Step '{}' for {dimension} already planned", step.id);
            }
        }

        let remaining = self.catalog.fallback_steps().chain(self.catalog.steps());
        for step in remaining {
            if seen.insert(step.id.as_str()) {
                candidates.push((step, StepSource::Fallback));
            }
        }
        candidates
    }

    /// Assemble at most `max_steps` distinct steps resolved to `locale`.
    #[must_use]
    pub fn select_steps(
        &self,
        metrics: &DimensionMetrics,
        locale: Locale,
        max_steps: usize,
    ) -> Vec<ResolvedStep> {
        let steps: Vec<ResolvedStep> = self
            .candidates(metrics)
            .into_iter()
            .take(max_steps)
            .map(|(step, source)| ResolvedStep::resolve(step, source, locale))
            .collect();
        tracing::debug!(
            "Selected {} step(s): {}",
            steps.len(),
            steps
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        steps
    }
}
