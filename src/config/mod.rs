//! Configuration module for finwell.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use finwell::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .locale(Locale::Es)
//!     .max_steps(5)
//!     .build();
//!
//! // Load from file
//! use finwell::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.finwell.yaml` file in your working directory or `~/.config/finwell/`:
//!
//! ```yaml
//! assessment:
//!   locale: es
//!   max_steps: 5
//! plan:
//!   focus_ceiling: building
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    APP_DIR_NAME, DEFAULT_FOCUS_CEILING, MAX_STEPS_LIMIT, STORE_FILE_NAME, default_store_path,
};
pub use types::{
    AppConfig, AppConfigBuilder, AssessmentConfig, ConfigOverrides, OutputConfig, PlanConfig,
    StoreConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.finwell.yaml` files.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        for section in ["assessment", "plan", "store", "output", "focus_ceiling"] {
            assert!(schema.contains(section), "missing {section}");
        }
    }
}
