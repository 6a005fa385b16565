//! Question bank and weight table.
//!
//! A [`WeightTable`] is the static definition every score is computed
//! against: questions, their answer options or slider buckets, and the signed
//! weight each answer contributes to each [`Dimension`](crate::model::Dimension).
//!
//! Tables come from three places, all validated identically:
//!
//! ```no_run
//! use finwell::weights::WeightTable;
//! use std::path::Path;
//!
//! let builtin = WeightTable::builtin()?;
//! let custom = WeightTable::from_yaml_file(Path::new("questions.yaml"))?;
//! # Ok::<(), finwell::FinwellError>(())
//! ```

mod builtin;
mod question;
mod slider;
mod table;

pub use question::{
    ChoiceOption, DEFAULT_SLIDER_LABELS, DEFAULT_SLIDER_SCALE, Question, QuestionKind,
    SLIDER_BUCKETS, SLIDER_MIDDLE_BUCKET, WeightMap,
};
pub use slider::SliderView;
pub use table::WeightTable;
