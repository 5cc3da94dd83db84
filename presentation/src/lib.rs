//! Presentation layer for textkit
//!
//! This crate contains CLI definitions, command dispatch and output
//! formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use cli::dispatch::execute;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::report::{Outcome, Report};
