//! **A bilingual financial-wellness self-assessment engine.**
//!
//! `finwell` turns a short questionnaire into a scored profile across four
//! wellness dimensions, a named persona, and a short plan of concrete next
//! steps. All user-facing text is available in English and Spanish. The same
//! engine powers the `finwell` command-line tool and can be embedded in any
//! Rust application.
//!
//! ## Core Concepts & Modules
//!
//! - **[`weights`]**: The [`WeightTable`], the static question bank. Every
//!   answer option (or slider bucket) carries signed weights per
//!   [`Dimension`](model::Dimension). Tables are validated on construction
//!   and may be loaded from YAML.
//! - **[`scoring`]**: The [`ScoringEngine`] sums weights for an
//!   [`AnswerSet`](model::AnswerSet), normalizes each dimension to a 0-100
//!   percentage against the answered questions only, and maps percentages
//!   to a [`Bucket`](scoring::Bucket).
//! - **[`persona`]**: The [`PersonaClassifier`], an ordered rule cascade
//!   from percentages to one of six personas.
//! - **[`plan`]**: The [`ActionCatalog`] of steps and the
//!   [`RecommendationSelector`] that ranks dimensions and picks a deduplicated
//!   plan, with localized links.
//! - **[`assessment`]**: The [`Assessment`] facade tying the above into a
//!   single [`AssessmentReport`].
//! - **[`session`]**: Seeded, replayable shuffling of questions and options.
//! - **[`store`]**: Saved answers and lesson progress behind a small
//!   key-value trait.
//! - **[`reports`]**: Summary and JSON renderers.
//!
//! ## Getting Started
//!
//! ```no_run
//! use finwell::{Assessment, model::{AnswerSet, Locale}};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assessment = Assessment::builtin()?;
//!     let answers = AnswerSet::new().with("q1", 3).with("q2", 0);
//!     let report = assessment.assess(&answers, Locale::Es);
//!
//!     println!("{}: {}", report.persona.title, report.persona.blurb);
//!     for step in &report.steps {
//!         println!("  - {} ({})", step.title, step.href);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Scoring Without a Plan
//!
//! ```no_run
//! use finwell::{WeightTable, ScoringEngine, model::AnswerSet};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = WeightTable::builtin()?;
//!     let score = ScoringEngine::new(&table).score_full(&AnswerSet::new().with("q1", 0));
//!     for (dimension, result) in &score.dimensions {
//!         println!("{}: {}% ({:?})", dimension.key(), result.pct, result.bucket);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `finwell` library crate. For the command-line
//! tool, see the project's README or run `finwell --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod persona;
pub mod plan;
pub mod reports;
pub mod scoring;
pub mod session;
pub mod store;
pub mod weights;

// Re-export main types for convenience
pub use assessment::{Assessment, AssessmentBuilder, AssessmentReport, PersonaSummary};
pub use error::{ErrorContext, FinwellError, OptionContext, Result};
pub use model::{AnswerSet, Dimension, Locale, LocalizedText};
pub use persona::{Persona, PersonaClassifier};
pub use plan::{ActionCatalog, ActionStep, RecommendationSelector, ResolvedStep};
pub use scoring::{Bucket, Score, ScoringEngine};
pub use session::SessionOrder;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, ProgressStore};
pub use weights::{Question, WeightTable};
