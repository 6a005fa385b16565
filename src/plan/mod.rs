//! Action plans.
//!
//! The [`RecommendationSelector`] walks dimensions from most to least in
//! need, picks each one's focus or growth step from the [`ActionCatalog`],
//! tops the plan up from the general fallback list and resolves everything
//! to the caller's locale.

mod catalog;
mod links;
mod selector;

pub use catalog::{ActionCatalog, ActionCatalogBuilder, ActionStep};
pub use links::{LANG_PARAM, is_external, localize_href};
pub use selector::{
    DEFAULT_FOCUS_CEILING, DEFAULT_MAX_STEPS, RecommendationSelector, ResolvedStep, StepSource,
};
