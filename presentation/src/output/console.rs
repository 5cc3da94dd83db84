//! Console output formatter for command reports

use crate::output::formatter::OutputFormatter;
use crate::output::report::{Outcome, Report};

/// Formats reports for stdout
pub struct ConsoleFormatter;

impl OutputFormatter for ConsoleFormatter {
    /// Absent text becomes an empty line
    fn format(&self, report: &Report) -> String {
        match &report.outcome {
            Outcome::Text(Some(text)) => text.clone(),
            Outcome::Text(None) => String::new(),
            Outcome::Flag(flag) => flag.to_string(),
        }
    }

    fn format_json(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}
