//! Score types produced by the scoring engine.

use super::normalize::{Bucket, normalize};
use crate::model::{Dimension, DimensionMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw per-dimension sums before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawScore {
    raw: DimensionMap<i32>,
    max: DimensionMap<u32>,
    answered: usize,
}

impl RawScore {
    pub(crate) const fn new(raw: DimensionMap<i32>, max: DimensionMap<u32>, answered: usize) -> Self {
        Self { raw, max, answered }
    }

    /// Signed sum of selected weights.
    #[must_use]
    pub fn raw(&self, dimension: Dimension) -> i32 {
        self.raw[dimension]
    }

    /// Sum of caps of the answered questions.
    #[must_use]
    pub fn max(&self, dimension: Dimension) -> u32 {
        self.max[dimension]
    }

    /// Number of questions that contributed.
    #[must_use]
    pub const fn answered_questions(&self) -> usize {
        self.answered
    }

    /// Normalize every dimension into a full [`Score`].
    pub fn normalize(&self) -> Score {
        let dimensions = Dimension::ALL
            .into_iter()
            .map(|d| (d, DimensionScore::new(self.raw[d], self.max[d])))
            .collect();
        Score {
            dimensions,
            answered_questions: self.answered,
        }
    }
}

/// Everything known about one dimension after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub raw: i32,
    pub max: u32,
    /// 0-100
    pub pct: u8,
    pub bucket: Bucket,
    /// Severity position of `bucket`, 0 = most in need
    pub rank: u8,
}

impl DimensionScore {
    #[must_use]
    pub fn new(raw: i32, max: u32) -> Self {
        let pct = normalize(raw, max);
        let bucket = Bucket::from_pct(pct);
        Self {
            raw,
            max,
            pct,
            bucket,
            rank: bucket.rank(),
        }
    }

    /// Whether any answered question measured this dimension.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.max > 0
    }

    #[must_use]
    pub const fn metric(&self) -> DimensionMetric {
        DimensionMetric {
            pct: self.pct,
            bucket: self.bucket,
        }
    }
}

/// The slice of a dimension score the recommendation selector needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionMetric {
    pub pct: u8,
    pub bucket: Bucket,
}

impl DimensionMetric {
    /// Metric for a percentage, bucketed with the standard thresholds.
    #[must_use]
    pub const fn from_pct(pct: u8) -> Self {
        Self {
            pct,
            bucket: Bucket::from_pct(pct),
        }
    }

    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.bucket.rank()
    }
}

/// Metrics for the dimensions that were actually measured. Absent keys mean
/// the dimension went unanswered.
pub type DimensionMetrics = IndexMap<Dimension, DimensionMetric>;

/// A complete, immutable score. Recomputed whenever answers change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Every dimension, in enumeration order
    pub dimensions: IndexMap<Dimension, DimensionScore>,
    /// Questions that contributed to this score
    pub answered_questions: usize,
}

impl Score {
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions.get(&dimension)
    }

    /// Percentage of a dimension, 0 if it was never scored.
    #[must_use]
    pub fn pct(&self, dimension: Dimension) -> u8 {
        self.get(dimension).map_or(0, |s| s.pct)
    }

    /// Metrics of scored dimensions only, in enumeration order.
    #[must_use]
    pub fn metrics(&self) -> DimensionMetrics {
        self.dimensions
            .iter()
            .filter(|(_, s)| s.is_scored())
            .map(|(d, s)| (*d, s.metric()))
            .collect()
    }

    /// Percentage of every dimension, unscored ones at 0.
    #[must_use]
    pub fn percentages(&self) -> IndexMap<Dimension, u8> {
        self.dimensions.iter().map(|(d, s)| (*d, s.pct)).collect()
    }

    /// Whether nothing was answered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.answered_questions == 0
    }
}
