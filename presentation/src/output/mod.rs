//! Output types and formatters

pub mod console;
pub mod formatter;
pub mod report;
