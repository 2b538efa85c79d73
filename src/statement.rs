//! Parsing of "X comes before Y" / "X comes after Y" statements.

use crate::error::{ParseError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const SEPARATOR: &str = " comes ";
const KEYWORDS: [&str; 3] = ["comes", "before", "after"];

/// Which template a statement used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Before,
    After,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::After => "after",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A precedence constraint: `from` must appear before `to`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// One parsed line: `<subject> comes <relation> <object>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub subject: String,
    pub object: String,
    pub relation: Relation,
}

impl Statement {
    /// The normalized edge this statement contributes.
    ///
    /// "A comes before B" yields A -> B; "A comes after B" yields B -> A.
    pub fn edge(&self) -> Edge {
        match self.relation {
            Relation::Before => Edge::new(&self.subject, &self.object),
            Relation::After => Edge::new(&self.object, &self.subject),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} comes {} {}", self.subject, self.relation, self.object)
    }
}

impl FromStr for Statement {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_statement(s)
    }
}

/// Parse a single statement line.
///
/// Keywords are matched case-sensitively. Names keep their inner words but
/// collapse runs of whitespace to a single space.
pub fn parse_statement(line: &str) -> Result<Statement> {
    let malformed = || ParseError::malformed(line);

    let (subject, rest) = line.split_once(SEPARATOR).ok_or_else(malformed)?;

    let (relation, object) = if let Some(object) = rest.strip_prefix("before") {
        (Relation::Before, object)
    } else if let Some(object) = rest.strip_prefix("after") {
        (Relation::After, object)
    } else {
        return Err(malformed().into());
    };

    // "beforehand X" is not the keyword followed by a name.
    if !object.starts_with(char::is_whitespace) {
        return Err(malformed().into());
    }

    let subject = normalize_name(subject).ok_or_else(malformed)?;
    let object = normalize_name(object).ok_or_else(malformed)?;

    Ok(Statement {
        subject,
        object,
        relation,
    })
}

/// Trim and collapse whitespace; reject empty names and names that embed a
/// keyword as a whole word.
fn normalize_name(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.is_empty() || words.iter().any(|w| KEYWORDS.contains(w)) {
        return None;
    }
    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParseErrorKind};

    fn assert_malformed(line: &str) {
        match parse_statement(line) {
            Err(Error::Parse(err)) => {
                assert_eq!(err.kind, ParseErrorKind::MalformedStatement);
                assert_eq!(err.line, line);
            }
            other => panic!("expected malformed statement for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_before() {
        let stmt = parse_statement("Francos comes before Anglos").unwrap();
        assert_eq!(stmt.subject, "Francos");
        assert_eq!(stmt.object, "Anglos");
        assert_eq!(stmt.relation, Relation::Before);
        assert_eq!(stmt.edge(), Edge::new("Francos", "Anglos"));
    }

    #[test]
    fn test_parse_after_reverses_edge() {
        let stmt = parse_statement("Canadio comes after Barbadonia").unwrap();
        assert_eq!(stmt.relation, Relation::After);
        assert_eq!(stmt.edge(), Edge::new("Barbadonia", "Canadio"));
    }

    #[test]
    fn test_multi_word_names() {
        let stmt = parse_statement("  Ethiopaea comes before   Shrill   Lanka  ").unwrap();
        assert_eq!(stmt.subject, "Ethiopaea");
        assert_eq!(stmt.object, "Shrill Lanka");
    }

    #[test]
    fn test_self_reference_parses() {
        let stmt = parse_statement("A comes before A").unwrap();
        assert!(stmt.edge().is_self_loop());
    }

    #[test]
    fn test_missing_comes() {
        assert_malformed("Francos Anglos");
        assert_malformed("Francos before Anglos");
    }

    #[test]
    fn test_bad_relation() {
        assert_malformed("A comes during B");
        assert_malformed("A comes Before B");
        assert_malformed("A comes beforeB");
        assert_malformed("A comes before");
        assert_malformed("A comes before   ");
        assert_malformed("A comes  before B");
        assert_malformed("A comes \tafter B");
    }

    #[test]
    fn test_empty_subject() {
        assert_malformed(" comes before B");
        assert_malformed("   comes after B");
    }

    #[test]
    fn test_keyword_inside_name() {
        assert_malformed("A comes before B comes after C");
        assert_malformed("A after comes before B");
        assert_malformed("A comes after before B");
    }

    #[test]
    fn test_keyword_substring_is_fine() {
        let stmt = parse_statement("Afterland comes before Beforeshire").unwrap();
        assert_eq!(stmt.edge(), Edge::new("Afterland", "Beforeshire"));
    }

    #[test]
    fn test_from_str_and_display() {
        let stmt: Statement = "X comes after Y".parse().unwrap();
        assert_eq!(stmt.to_string(), "X comes after Y");
    }
}
