//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Just the result, one line
    Text,
    /// JSON object with operation, input and result
    Json,
}

/// CLI arguments for textkit
#[derive(Parser, Debug)]
#[command(name = "textkit")]
#[command(author, version, about = "Truncate, validate and clean up text")]
#[command(long_about = r#"
textkit exposes a handful of text helpers on the command line.

Leaving out TEXT means "no text", which is different from an empty
string (""). Truncation of absent text prints nothing in text mode and
null in JSON. Text that starts with "-" goes after "--", as in
  textkit truncate -m 5 -- "-hello"

Example:
  textkit truncate --max-length 20 "This is a very long string"
  textkit truncate --max-length 20 --ellipsis "This is a very long string"
  textkit -o json email user@example.com
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cut text down to a maximum number of characters
    Truncate {
        /// Text to truncate
        text: Option<String>,

        /// Maximum length of the result, ellipsis included
        #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
        max_length: i64,

        /// Reserve the last three characters for "..."
        #[arg(short, long)]
        ellipsis: bool,
    },

    /// Lower-case the text and capitalize each word
    TitleCase { text: Option<String> },

    /// Remove everything but ASCII letters, digits and spaces
    Strip { text: Option<String> },

    /// Check whether the text is a single email address
    Email { text: Option<String> },

    /// Check whether the text is an absolute http(s) URL
    Url { text: Option<String> },

    /// Check whether the text is a finite number
    Numeric { text: Option<String> },
}

impl Command {
    /// Operation name as it appears in output
    pub fn name(&self) -> &'static str {
        match self {
            Command::Truncate { .. } => "truncate",
            Command::TitleCase { .. } => "title_case",
            Command::Strip { .. } => "strip",
            Command::Email { .. } => "email",
            Command::Url { .. } => "url",
            Command::Numeric { .. } => "numeric",
        }
    }

    /// The text argument, if one was given
    pub fn text(&self) -> Option<&str> {
        match self {
            Command::Truncate { text, .. }
            | Command::TitleCase { text }
            | Command::Strip { text }
            | Command::Email { text }
            | Command::Url { text }
            | Command::Numeric { text } => text.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_truncate() {
        let cli = Cli::try_parse_from(["textkit", "truncate", "-m", "5", "hello world"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Truncate {
                text: Some("hello world".to_string()),
                max_length: 5,
                ellipsis: false,
            }
        );
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse_negative_max_length() {
        let cli = Cli::try_parse_from(["textkit", "truncate", "--max-length", "-1", "x"]).unwrap();
        assert!(matches!(cli.command, Command::Truncate { max_length: -1, .. }));
    }

    #[test]
    fn test_parse_absent_text() {
        let cli = Cli::try_parse_from(["textkit", "truncate", "-m", "3", "--ellipsis"]).unwrap();
        assert_eq!(cli.command.text(), None);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["textkit", "email", "a@b.c", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command.name(), "email");
        assert_eq!(cli.command.text(), Some("a@b.c"));
    }

    #[test]
    fn test_parse_dash_text_after_separator() {
        let cli = Cli::try_parse_from(["textkit", "truncate", "-m", "5", "--", "-hello"]).unwrap();
        assert_eq!(cli.command.text(), Some("-hello"));
        assert!(Cli::try_parse_from(["textkit", "truncate", "-m", "5", "-hello"]).is_err());
    }

    #[test]
    fn test_truncate_requires_max_length() {
        assert!(Cli::try_parse_from(["textkit", "truncate", "hello"]).is_err());
    }
}
