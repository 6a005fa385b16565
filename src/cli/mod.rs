//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic for one subcommand and returns the
//! process exit code.

mod assess;
mod output;
mod progress;
mod questions;

pub use assess::run_assess;
pub use output::{OutputTarget, should_use_color, write_output};
pub use progress::{LessonAction, open_progress, run_answer, run_lesson, run_reset};
pub use questions::{Ordering, run_questions};

/// Exit codes for scripted use
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Assessment has unanswered questions (with --fail-on-incomplete)
    pub const INCOMPLETE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
