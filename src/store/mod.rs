//! Persistence of in-progress answers and lesson completion.
//!
//! The engine itself is stateless. Everything that outlives one call goes
//! through a [`KeyValueStore`] of string keys to string values; the
//! [`ProgressStore`] layers typed access on top.

mod file;
mod memory;
mod progress;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use progress::{ANSWERS_KEY, LESSON_KEY_PREFIX, LessonMarker, ProgressStore};

use crate::error::Result;

/// Minimal string key-value storage.
///
/// Reads never fail; an unreadable value is simply absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Every stored key, sorted.
    fn keys(&self) -> Vec<String>;
}
