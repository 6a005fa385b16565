//! Tests for config file loading, CLI override merging and validation.

use finwell::Assessment;
use finwell::config::{
    AppConfig, ConfigOverrides, Validatable, generate_full_example_config, load_config_file,
};
use finwell::model::{AnswerSet, Locale};
use finwell::reports::ReportFormat;
use finwell::scoring::Bucket;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(tmp: &TempDir, yaml: &str) -> PathBuf {
    let path = tmp.path().join(".finwell.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn file_values_are_loaded() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "assessment:\n  locale: es\n  max_steps: 5\nplan:\n  focus_ceiling: building\noutput:\n  format: json\n",
    );
    let config = load_config_file(&path).unwrap();

    assert_eq!(config.assessment.locale, Locale::Es);
    assert_eq!(config.assessment.max_steps, 5);
    assert_eq!(config.plan.focus_ceiling, Bucket::Building);
    assert_eq!(config.output.format, ReportFormat::Json);
    assert!(config.is_valid());
}

#[test]
fn cli_overrides_beat_file_values() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "assessment:\n  locale: es\n  max_steps: 5\n");
    let overrides = ConfigOverrides {
        locale: Some(Locale::En),
        ..ConfigOverrides::default()
    };
    let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.assessment.locale, Locale::En);
    assert_eq!(config.assessment.max_steps, 5);
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "assessment: [not, a, map]\n");
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(Some(&path), &ConfigOverrides::default());

    assert_eq!(loaded_from, None);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn invalid_settings_are_reported() {
    let config = AppConfig::builder()
        .max_steps(0)
        .questions_file(Some(PathBuf::from("/nonexistent/questions.yaml")))
        .build();
    let errors = config.validate();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field.contains("max_steps")));
    assert!(errors.iter().any(|e| e.field.contains("questions_file")));
    assert!(config.ensure_valid().is_err());
}

#[test]
fn example_config_round_trips_to_defaults() {
    let config: AppConfig = serde_yaml_ng::from_str(&generate_full_example_config()).unwrap();
    assert!(config.is_valid());
    assert_eq!(config.assessment.max_steps, AppConfig::default().assessment.max_steps);
}

#[test]
fn custom_questions_file_is_used() {
    let tmp = TempDir::new().unwrap();
    let questions = tmp.path().join("questions.yaml");
    std::fs::write(
        &questions,
        r#"
questions:
  - id: trust
    prompt: { en: "Trust banks?", es: "¿Confías en los bancos?" }
    kind: slider
    dimensions: [inclusion]
"#,
    )
    .unwrap();
    let config = AppConfig::builder().questions_file(Some(questions)).build();
    let assessment = Assessment::from_config(&config).unwrap();

    assert_eq!(assessment.table().len(), 1);
    let report = assessment.assess(&AnswerSet::new().with("trust", 4), Locale::En);
    assert!(report.is_complete());
}
