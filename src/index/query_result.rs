use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use super::{Document, LineSet, LineSetAlgebra};

/// A QueryResult is the outcome of evaluating a query against an index: the set of matching
/// line numbers, the textual rendering of the query that produced it, and the document those
/// line numbers point into.
///
/// Every line number in the set is a valid line of the document. Results are never mutated
/// after construction; cloning one is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    description: String,
    lines: Arc<LineSet>,
    document: Document,
}

impl QueryResult {
    pub(crate) fn new<S>(description: S, lines: Arc<LineSet>, document: Document) -> QueryResult
        where S: Into<String>
    {
        debug_assert!(lines.iter().next_back().map_or(true, |&last| last < document.len()));
        QueryResult { description: description.into(), lines: lines, document: document }
    }

    // Same lines and document, described differently.
    pub(crate) fn with_description(self, description: String) -> QueryResult {
        QueryResult { description: description, ..self }
    }

    /// Returns the rendering of the query that produced this result
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the matching line numbers (0-based), in ascending order
    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().cloned()
    }

    /// Returns the matching line numbers as a set
    pub fn line_set(&self) -> &LineSet {
        &self.lines
    }

    /// Returns the number of matching lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line matched
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if the given line (0-based) matched
    pub fn contains(&self, line_no: usize) -> bool {
        self.lines.contains(&line_no)
    }

    /// Returns the document the line numbers index into
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns each matching line number (0-based) paired with the line's text, in ascending
    /// order.
    pub fn matches(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines.iter().map(move |&line_no| (line_no, &self.document[line_no]))
    }

    /// Computes the result matching the lines of either self or other.
    ///
    /// Fails if the two results were produced from different documents.
    pub fn union(&self, other: &QueryResult) -> Result<QueryResult> {
        self.check_same_document(other)?;
        Ok(self.union_unchecked(other))
    }

    /// Computes the result matching the lines of both self and other.
    ///
    /// Fails if the two results were produced from different documents.
    pub fn intersection(&self, other: &QueryResult) -> Result<QueryResult> {
        self.check_same_document(other)?;
        Ok(self.intersection_unchecked(other))
    }

    /// Computes the result matching every line of the document not matched by self.
    pub fn complement(&self) -> QueryResult {
        let lines = self.lines.complement_lines(self.document.len());
        QueryResult::new(format!("~({})", self.description),
                         Arc::new(lines),
                         self.document.clone())
    }

    // Callers guarantee both sides were evaluated against the same index.
    pub(crate) fn union_unchecked(&self, other: &QueryResult) -> QueryResult {
        let lines = self.lines.union_lines(&other.lines);
        QueryResult::new(format!("({} | {})", self.description, other.description),
                         Arc::new(lines),
                         self.document.clone())
    }

    pub(crate) fn intersection_unchecked(&self, other: &QueryResult) -> QueryResult {
        let lines = self.lines.intersect_lines(&other.lines);
        QueryResult::new(format!("({} & {})", self.description, other.description),
                         Arc::new(lines),
                         self.document.clone())
    }

    fn check_same_document(&self, other: &QueryResult) -> Result<()> {
        if self.document.same_as(&other.document) {
            Ok(())
        } else {
            Err(Error::DocumentMismatch {
                left: self.description.clone(),
                right: other.description.clone(),
            })
        }
    }
}

/// Renders the result as a summary line followed by one row per matching line, numbered from 1:
///
/// ```text
/// hair occurs 2 times:
///  (line 1) Alice has long hair
///  (line 3) wind blows through hair
/// ```
impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let unit = if self.len() > 1 { "times" } else { "time" };
        writeln!(f, "{} occurs {} {}:", self.description, self.len(), unit)?;
        for (line_no, text) in self.matches() {
            writeln!(f, " (line {}) {}", line_no + 1, text)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Match<'a> {
    line: usize,
    text: &'a str,
}

impl Serialize for QueryResult {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
        where S: Serializer
    {
        let matches: Vec<_> = self.matches()
                                  .map(|(line_no, text)| Match { line: line_no + 1, text: text })
                                  .collect();
        let mut state = serializer.serialize_struct("QueryResult", 3)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("lines", &*self.lines)?;
        state.serialize_field("matches", &matches)?;
        state.end()
    }
}
