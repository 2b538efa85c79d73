//! Error types for the parade resolver.

use std::fmt;
use thiserror::Error;

/// Result type alias for parade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the parade resolver.
#[derive(Error, Debug)]
pub enum Error {
    /// A statement did not match either ordering template.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The statements contradict each other.
    #[error("Cycle detected among: {members}", members = format_members(members))]
    Cycle { members: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Nodes involved in a cycle, if this is a cycle error.
    pub fn cycle_members(&self) -> Option<&[String]> {
        match self {
            Error::Cycle { members } => Some(members),
            _ => None,
        }
    }
}

/// Why a statement failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MalformedStatement,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MalformedStatement => write!(f, "malformed statement"),
        }
    }
}

/// A line that could not be parsed, with its text kept for diagnosis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}{at}: {line:?}", at = format_line_no(*line_no))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: String,
    /// 1-based position in the batch, once known.
    pub line_no: Option<usize>,
}

impl ParseError {
    pub fn malformed(line: &str) -> Self {
        Self {
            kind: ParseErrorKind::MalformedStatement,
            line: line.to_string(),
            line_no: None,
        }
    }

    pub fn at_line(mut self, line_no: usize) -> Self {
        self.line_no = Some(line_no);
        self
    }
}

fn format_line_no(line_no: Option<usize>) -> String {
    line_no.map(|n| format!(" on line {n}")).unwrap_or_default()
}

/// Members are listed sorted so the message is stable regardless of where
/// the traversal entered the cycle.
fn format_members(members: &[String]) -> String {
    let mut sorted: Vec<&str> = members.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(", ")
}
