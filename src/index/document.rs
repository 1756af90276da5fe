use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A Document is the ordered, 0-indexed sequence of lines being searched.
///
/// The lines are fixed at construction and shared by every index and result derived from them.
/// Cloning a Document is cheap and yields a handle to the same lines.
#[derive(Clone, Debug, Default)]
pub struct Document {
    lines: Arc<Vec<String>>,
}

impl Document {
    /// Construct a new Document from its lines.
    /// Lines can be anything that can be turned into a String.
    pub fn new<I>(lines: I) -> Document
        where I: IntoIterator,
              I::Item: Into<String>
    {
        Document { lines: Arc::new(lines.into_iter().map(Into::into).collect()) }
    }

    /// Returns the number of lines in the document
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the text of the given line, if it exists
    pub fn line(&self, line_no: usize) -> Option<&str> {
        self.lines.get(line_no).map(String::as_str)
    }

    /// Returns an iterator over the document's lines, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Returns true if `other` is a handle to the very same lines as self.
    ///
    /// Two documents with equal text that were built separately are not the same document:
    /// line numbers from one must never be mixed with the other.
    pub fn same_as(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }
}

impl Index<usize> for Document {
    type Output = str;

    fn index(&self, line_no: usize) -> &str {
        &self.lines[line_no]
    }
}

// Documents are equal only when they share their lines
impl PartialEq for Document {
    fn eq(&self, other: &Document) -> bool {
        self.same_as(other)
    }
}

impl Eq for Document {}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        (*self.lines).serialize(serializer)
    }
}
