//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::APP_DIR_NAME;
use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".finwell.yaml",
    ".finwell.yml",
    "finwell.yaml",
    "finwell.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/finwell/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join(APP_DIR_NAME))
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer explicit CLI settings over this config.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(locale) = overrides.locale {
            self.assessment.locale = locale;
        }
        if let Some(max_steps) = overrides.max_steps {
            self.assessment.max_steps = max_steps;
        }
        if overrides.questions_file.is_some() {
            self.assessment
                .questions_file
                .clone_from(&overrides.questions_file);
        }
        if overrides.shuffle_seed.is_some() {
            self.assessment.shuffle_seed = overrides.shuffle_seed;
        }
        if let Some(ceiling) = overrides.focus_ceiling {
            self.plan.focus_ceiling = ceiling;
        }
        if overrides.store_path.is_some() {
            self.store.path.clone_from(&overrides.store_path);
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# finwell configuration
# Place this file at .finwell.yaml in your working directory or ~/.config/finwell/

{}
",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# finwell configuration file
# ===========================
#
# Place it at:
#   - .finwell.yaml in your working directory
#   - ~/.config/finwell/finwell.yaml for global config
#
# CLI arguments always override file settings.

assessment:
  # Language: en, es
  locale: en
  # Number of steps in the action plan (1-10)
  max_steps: 3
  # Custom question bank (YAML weight table)
  # questions_file: ./questions.yaml
  # Fixed seed for a replayable question order
  # shuffle_seed: 42

plan:
  # Highest bucket that still gets a focus step:
  # needs-focus, building, solid, strong
  focus_ceiling: solid

# Progress file, defaulting to <data dir>/finwell/progress.json
store: {}
# store:
#   path: ./progress.json

output:
  # Format: summary, json
  format: summary
  # Output file path (omit for stdout)
  # file: report.json
  no_color: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Locale;
    use crate::reports::ReportFormat;
    use crate::scoring::Bucket;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".finwell.yaml");
        std::fs::write(&config_path, "assessment:\n  locale: es\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_hidden_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("finwell.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".finwell.yml"), "").unwrap();

        assert_eq!(
            find_config_in_dir(tmp.path()),
            Some(tmp.path().join(".finwell.yml"))
        );
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
assessment:
  locale: es
  max_steps: 5
plan:
  focus_ceiling: building
output:
  format: json
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.assessment.locale, Locale::Es);
        assert_eq!(config.assessment.max_steps, 5);
        assert_eq!(config.plan.focus_ceiling, Bucket::Building);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "assessment: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back_on_bad_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "output:\n  format: pdf\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_merge_only_touches_given_fields() {
        let mut config = AppConfig::builder()
            .locale(Locale::Es)
            .max_steps(5)
            .build();
        config.merge(&ConfigOverrides {
            locale: Some(Locale::En),
            format: Some(ReportFormat::Json),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.assessment.locale, Locale::En);
        assert_eq!(config.assessment.max_steps, 5);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.output.no_color);
    }

    #[test]
    fn test_example_configs_parse() {
        let example: AppConfig = serde_yaml_ng::from_str(&generate_example_config()).unwrap();
        assert_eq!(example, AppConfig::default());
        let full: AppConfig = serde_yaml_ng::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "plan:\n  focus_ceiling: strong\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
