//! Runs a parsed [`Command`] against the domain helpers

use crate::cli::commands::Command;
use crate::output::report::{Outcome, Report};
use textkit_domain::{
    TextError, TruncationMode, is_numeric, is_valid_email, is_valid_url,
    remove_special_characters, to_title_case,
};
use tracing::debug;

/// Execute `command` and collect its result into a [`Report`].
///
/// The only failure is an out-of-range truncation bound.
pub fn execute(command: &Command) -> Result<Report, TextError> {
    let text = command.text();
    debug!(operation = command.name(), present = text.is_some(), "Executing");

    let mut report = Report::new(command.name(), text);
    let outcome = match command {
        Command::Truncate {
            max_length,
            ellipsis,
            ..
        } => {
            let mode = if *ellipsis {
                TruncationMode::Ellipsis
            } else {
                TruncationMode::Plain
            };
            report = report.with_truncation(mode, *max_length);
            let result = mode.policy().apply(text, *max_length)?;
            Outcome::Text(result.map(|c| c.into_owned()))
        }
        Command::TitleCase { .. } => Outcome::Text(to_title_case(text)),
        Command::Strip { .. } => Outcome::Text(remove_special_characters(text)),
        Command::Email { .. } => Outcome::Flag(is_valid_email(text)),
        Command::Url { .. } => Outcome::Flag(is_valid_url(text)),
        Command::Numeric { .. } => Outcome::Flag(is_numeric(text)),
    };
    report.outcome = outcome;

    debug!(operation = command.name(), "Done");
    Ok(report)
}
