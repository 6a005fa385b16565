//! Default values for finwell configuration.

use super::types::{AssessmentConfig, PlanConfig};
use crate::model::Locale;
use crate::plan::DEFAULT_MAX_STEPS;
pub use crate::plan::DEFAULT_FOCUS_CEILING;
use std::path::PathBuf;

/// Largest plan a config may ask for.
pub const MAX_STEPS_LIMIT: usize = 10;

/// Directory name under the platform config and data directories.
pub const APP_DIR_NAME: &str = "finwell";

/// File name of the default progress store.
pub const STORE_FILE_NAME: &str = "progress.json";

/// `<data dir>/finwell/progress.json`, when the platform has a data dir.
#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            max_steps: DEFAULT_MAX_STEPS,
            questions_file: None,
            shuffle_seed: None,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            focus_ceiling: DEFAULT_FOCUS_CEILING,
        }
    }
}
