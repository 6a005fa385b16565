//! Scoring, normalization and bucketing.
//!
//! ```no_run
//! use finwell::model::{AnswerSet, Dimension};
//! use finwell::scoring::ScoringEngine;
//! use finwell::weights::WeightTable;
//!
//! let table = WeightTable::builtin()?;
//! let score = ScoringEngine::new(&table).score_full(&AnswerSet::new().with("q1", 3));
//! assert_eq!(score.pct(Dimension::Habits), 0);
//! # Ok::<(), finwell::FinwellError>(())
//! ```
//!
//! # Buckets
//!
//! | pct     | bucket        | rank |
//! |---------|---------------|------|
//! | `< 40`  | `needs-focus` | 0    |
//! | `< 70`  | `building`    | 1    |
//! | `< 85`  | `solid`       | 2    |
//! | `>= 85` | `strong`      | 3    |

mod engine;
mod normalize;
mod score;

pub use engine::ScoringEngine;
pub use normalize::{
    BUILDING_BELOW, Bucket, NEEDS_FOCUS_BELOW, SOLID_BELOW, bucketize, normalize, rank,
};
pub use score::{DimensionMetric, DimensionMetrics, DimensionScore, RawScore, Score};

/// Scoring engine version, reported alongside every assessment.
pub const SCORING_ENGINE_VERSION: &str = "1.0";
