//! Resolve a whole batch of statement lines at once.

use crate::error::{Error, Result};
use crate::graph::{resolve, RelationGraph};
use crate::statement::parse_statement;
use serde::Serialize;
use tracing::{debug, warn};

/// Sample statements, including a multi-word name.
pub const DEMO_STATEMENTS: [&str; 4] = [
    "Francos comes before Anglos",
    "Francos comes after Canadio",
    "Canadio comes after Barbadonia",
    "Ethiopaea comes before Shrill Lanka",
];

/// What to do with a line that matches neither template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Fail the whole batch on the first malformed line.
    #[default]
    Abort,
    /// Drop malformed lines and resolve the rest.
    Skip,
}

/// A malformed line dropped under [`MalformedPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line_no: usize,
    pub text: String,
}

/// Outcome of a successful batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub order: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

/// Build a graph from `lines` and resolve it.
///
/// Blank lines are ignored; every other line must parse. Line numbers in
/// errors and [`SkippedLine`] are 1-based positions in `lines`.
pub fn resolve_statements<I, S>(lines: I, policy: MalformedPolicy) -> Result<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = RelationGraph::new();
    let mut skipped = Vec::new();
    let mut parsed = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_statement(line) {
            Ok(statement) => {
                graph.add_statement(&statement);
                parsed += 1;
            }
            Err(Error::Parse(err)) => match policy {
                MalformedPolicy::Abort => return Err(err.at_line(line_no).into()),
                MalformedPolicy::Skip => {
                    warn!(line_no, line, "skipping malformed statement");
                    skipped.push(SkippedLine {
                        line_no,
                        text: line.to_string(),
                    });
                }
            },
            Err(other) => return Err(other),
        }
    }

    debug!(
        statements = parsed,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped = skipped.len(),
        "built relation graph"
    );

    let order = resolve(&graph)?;
    Ok(Resolution { order, skipped })
}
