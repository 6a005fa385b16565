//! Summary report generator for shell output.
//!
//! Headings and copy follow the report's locale.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use crate::model::{Dimension, LocalizedText};
use crate::scoring::Bucket;

const HEADING: LocalizedText =
    LocalizedText::new("Financial Wellness Summary", "Resumen de bienestar financiero");
const ANSWERED: LocalizedText = LocalizedText::new("Answered:", "Respondidas:");
const PROFILE: LocalizedText = LocalizedText::new("Profile:", "Perfil:");
const DIMENSIONS: LocalizedText = LocalizedText::new("Dimensions:", "Dimensiones:");
const NOT_ANSWERED: LocalizedText = LocalizedText::new("not answered", "sin respuesta");
const NEXT_STEPS: LocalizedText = LocalizedText::new("Next steps:", "Próximos pasos:");
const FEATURED: LocalizedText = LocalizedText::new("Start here:", "Empieza aquí:");

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn bucket_color(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::NeedsFocus => "red",
        Bucket::Building => "yellow",
        Bucket::Solid | Bucket::Strong => "green",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        let locale = report.locale;
        let mut lines = Vec::new();

        lines.push(self.color(HEADING.get(locale), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}/{}",
            self.color(ANSWERED.get(locale), "cyan"),
            report.answered_questions,
            report.total_questions
        ));
        lines.push(format!(
            "{}  {}",
            self.color(PROFILE.get(locale), "cyan"),
            self.color(&report.persona.title, "bold")
        ));
        lines.push(format!("  {}", report.persona.blurb));

        lines.push(String::new());
        lines.push(self.color(DIMENSIONS.get(locale), "bold"));
        let width = Dimension::ALL
            .iter()
            .map(|d| d.label().get(locale).chars().count())
            .max()
            .unwrap_or(0);
        for (dimension, score) in &report.score.dimensions {
            let label = dimension.label();
            let label = label.get(locale);
            let value = if score.is_scored() {
                self.color(
                    &format!("{:>3}%  {}", score.pct, score.bucket.display(locale)),
                    bucket_color(score.bucket),
                )
            } else {
                self.color(NOT_ANSWERED.get(locale), "dim")
            };
            lines.push(format!("  {label:<width$}  {value}"));
        }

        if !report.steps.is_empty() {
            lines.push(String::new());
            lines.push(self.color(NEXT_STEPS.get(locale), "bold"));
            for (position, step) in report.steps.iter().enumerate() {
                lines.push(format!("  {}. {}", position + 1, self.color(&step.title, "bold")));
                lines.push(format!("     {}", step.detail));
                lines.push(format!("     {}", self.color(&step.href, "dim")));
            }
        }

        if let Some(ref featured) = report.persona.featured_step {
            lines.push(String::new());
            lines.push(format!(
                "{}  {} {}",
                self.color(FEATURED.get(locale), "cyan"),
                featured.title,
                self.color(&format!("({})", featured.href), "dim")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
