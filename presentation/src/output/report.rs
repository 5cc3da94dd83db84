//! Serializable result of a single command

use serde::Serialize;
use textkit_domain::TruncationMode;

/// What an operation produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Transformed text; `None` when the input was absent
    Text(Option<String>),
    /// Answer of a predicate
    Flag(bool),
}

/// One command's input and outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TruncationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(rename = "result")]
    pub outcome: Outcome,
}

impl Report {
    pub fn new(operation: &'static str, input: Option<&str>) -> Self {
        Self {
            operation,
            input: input.map(str::to_string),
            mode: None,
            max_length: None,
            outcome: Outcome::Text(None),
        }
    }

    pub fn with_truncation(mut self, mode: TruncationMode, max_length: i64) -> Self {
        self.mode = Some(mode);
        self.max_length = Some(max_length);
        self
    }
}
