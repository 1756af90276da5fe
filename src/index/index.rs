use std::collections::BTreeMap;
use std::io::BufRead;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::Result;
use super::*;

/// An inverted index over the lines of a single document: maps each whitespace-separated word to
/// the set of lines it occurs on.
///
/// Words are case-sensitive and are not normalized in any way. The index is built once and never
/// changes afterwards, so it can be shared freely between threads evaluating different queries.
#[derive(Clone, Debug)]
pub struct TextIndex {
    // Maps words to the lines they occur on
    index: BTreeMap<String, Arc<LineSet>>,
    document: Document,
}

impl TextIndex {
    /// Builds an index over the given lines. The first line is line 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_query::TextIndex;
    ///
    /// let index = TextIndex::new(vec!["Alice has long hair", "wind blows through hair"]);
    /// let hair: Vec<_> = index.lookup("hair").lines().collect();
    /// assert_eq!(hair, [0, 1]);
    /// assert!(index.lookup("bird").is_empty());
    /// ```
    pub fn new<I>(lines: I) -> TextIndex
        where I: IntoIterator,
              I::Item: Into<String>
    {
        TextIndex::from_document(Document::new(lines))
    }

    /// Builds an index over the lines read from `reader`.
    ///
    /// Fails without producing an index if any line cannot be read.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<TextIndex> {
        let lines = reader.lines().collect::<::std::io::Result<Vec<_>>>()?;
        Ok(TextIndex::new(lines))
    }

    /// Builds an index over an existing document.
    pub fn from_document(document: Document) -> TextIndex {
        let mut index: BTreeMap<String, LineSet> = BTreeMap::new();
        for (line_no, line) in document.lines().enumerate() {
            for word in line.split_whitespace() {
                if let Some(lines) = index.get_mut(word) {
                    lines.insert(line_no);
                } else {
                    index.insert(word.into(), Some(line_no).into_iter().collect());
                }
            }
        }
        debug!("indexed {} lines, {} distinct words", document.len(), index.len());

        TextIndex {
            index: index.into_iter().map(|(word, lines)| (word, Arc::new(lines))).collect(),
            document: document,
        }
    }

    /// Returns the result for a single word: the lines it occurs on, described by the word
    /// itself. A word that occurs nowhere yields an empty result.
    pub fn lookup(&self, word: &str) -> QueryResult {
        let lines = match self.index.get(word) {
            Some(lines) => lines.clone(),
            None => Arc::new(LineSet::new()),
        };
        trace!("lookup {:?}: {} lines", word, lines.len());
        QueryResult::new(word, lines, self.document.clone())
    }

    /// Returns the indexed document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the number of lines in the indexed document
    pub fn len(&self) -> usize {
        self.document.len()
    }

    /// Returns true if the indexed document has no lines
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Returns the number of distinct words in the index
    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    /// Returns every distinct word in the index, in sorted order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Returns true if the word occurs on at least one line
    pub fn contains_term(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Cursor, Read};

    use crate::error::Error;
    use super::super::*;

    fn index() -> TextIndex {
        TextIndex::new(vec!["Alice has long hair",
                            "Daddy likes his Alice",
                            "wind blows through hair"])
    }

    fn lines(result: &QueryResult) -> Vec<usize> {
        result.lines().collect()
    }

    #[test]
    fn test_lookup() {
        let index = index();
        let hair = index.lookup("hair");
        assert_eq!(hair.description(), "hair");
        assert_eq!(lines(&hair), [0, 2]);
        assert_eq!(lines(&index.lookup("Daddy")), [1]);
        assert!(hair.document().same_as(index.document()));
    }

    #[test]
    fn test_case_sensitive() {
        let index = index();
        assert!(index.lookup("alice").is_empty());
        assert_eq!(lines(&index.lookup("Alice")), [0, 1]);
    }

    #[test]
    fn test_lookup_unknown_does_not_insert() {
        let index = index();
        let terms_before: Vec<String> = index.terms().map(String::from).collect();
        let bird = index.lookup("bird");
        assert!(bird.is_empty());
        assert_eq!(bird.description(), "bird");
        assert!(!index.contains_term("bird"));
        assert_eq!(index.terms().collect::<Vec<_>>(), terms_before);
    }

    #[test]
    fn test_lookup_repeatable() {
        let index = index();
        assert_eq!(index.lookup("hair"), index.lookup("hair"));
        assert_eq!(index.lookup("fiery"), index.lookup("fiery"));
    }

    #[test]
    fn test_repeated_word_on_line() {
        let index = TextIndex::new(vec!["to be or not to be", "be quick"]);
        assert_eq!(lines(&index.lookup("be")), [0, 1]);
        assert_eq!(lines(&index.lookup("to")), [0]);
        assert_eq!(index.term_count(), 5);
    }

    #[test]
    fn test_whitespace_tokens() {
        let index = TextIndex::new(vec!["  hair,\tcut  ", "", "hair"]);
        assert_eq!(lines(&index.lookup("hair,")), [0]);
        assert_eq!(lines(&index.lookup("hair")), [2]);
        assert_eq!(lines(&index.lookup("cut")), [0]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_empty() {
        let index = TextIndex::new(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.term_count(), 0);
        assert!(index.lookup("anything").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = index();
        let b = index();
        assert_eq!(a.terms().collect::<Vec<_>>(), b.terms().collect::<Vec<_>>());
        for term in a.terms() {
            assert_eq!(a.lookup(term).line_set(), b.lookup(term).line_set());
        }
    }

    #[test]
    fn test_from_reader() {
        let text = "Alice has long hair\nDaddy likes his Alice\nwind blows through hair\n";
        let index = TextIndex::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(lines(&index.lookup("Alice")), [0, 1]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_from_reader_error() {
        let reader = io::BufReader::new(FailingReader);
        match TextIndex::from_reader(reader) {
            Err(Error::Io(err)) => assert_eq!(err.to_string(), "disk on fire"),
            other => panic!("expected an io error, got {:?}", other.map(|index| index.len())),
        }
    }
}
