//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    report: &'a AssessmentReport,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        let document = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
            },
            report,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Assessment;
    use crate::model::{AnswerSet, Locale};
    use serde_json::Value;

    #[test]
    fn test_json_report_shape() {
        let report = Assessment::builtin()
            .unwrap()
            .assess(&AnswerSet::new().with("q1", 3), Locale::Es);
        let json = JsonReporter::new().generate(&report).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "finwell");
        assert_eq!(value["locale"], "es");
        assert_eq!(value["answered_questions"], 1);
        assert_eq!(value["score"]["dimensions"]["habits"]["raw"], -2);
        assert_eq!(value["score"]["dimensions"]["habits"]["bucket"], "needs-focus");
        assert_eq!(value["steps"][0]["source"], "focus");
        assert!(value["persona"]["key"].is_string());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let report = Assessment::builtin()
            .unwrap()
            .assess(&AnswerSet::new(), Locale::En);
        let json = JsonReporter::new().pretty(false).generate(&report).unwrap();
        assert!(!json.contains('\n'));
    }
}
