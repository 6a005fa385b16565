//! Core data model shared by every stage of the assessment pipeline.
//!
//! - [`Dimension`]: the closed set of wellbeing axes being measured
//! - [`DimensionMap`]: a fixed-size per-dimension table
//! - [`Locale`] and [`LocalizedText`]: bilingual copy resolution
//! - [`AnswerSet`]: a user's (possibly partial) answers
//!
//! Nothing in this module infers a locale or mutates shared state; callers
//! always pass the locale they want copy resolved to.

mod answers;
mod dimension;
mod locale;

pub use answers::*;
pub use dimension::*;
pub use locale::*;
