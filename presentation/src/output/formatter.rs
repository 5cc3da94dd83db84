//! Output formatter trait

use crate::cli::commands::OutputFormat;
use crate::output::report::Report;

/// Trait for formatting command reports
pub trait OutputFormatter {
    /// Format as plain text (just the result)
    fn format(&self, report: &Report) -> String;

    /// Format as JSON
    fn format_json(&self, report: &Report) -> String;

    /// Format according to the selected output format
    fn render(&self, report: &Report, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
