//! # parade - ordering from "comes before" statements
//!
//! Parses statements such as `"Francos comes before Anglos"` into a directed
//! relation graph, rejects contradictory input with the offending cycle, and
//! produces a deterministic topological order.

pub mod batch;
pub mod cli;
pub mod error;
pub mod graph;
pub mod statement;

// Re-export commonly used types
pub use batch::{resolve_statements, MalformedPolicy, Resolution, SkippedLine};
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use graph::{resolve, RelationGraph};
pub use statement::{parse_statement, Edge, Relation, Statement};
