use std::fmt;
use std::ops;
use std::sync::Arc;

use log::debug;

use crate::parser::needs_quotes;
use super::{QueryResult, TextIndex};
use self::Query::*;

/// A Query is an expression over word lookups, evaluated against a `TextIndex`.
/// It is recursively hierarchical: NOT, AND and OR are built from smaller queries.
///
/// Queries are immutable. Subtrees are reference counted, so one query can be reused inside
/// any number of larger ones, and the same tree can be evaluated from several threads at once.
///
/// # Examples
///
/// ```
/// use text_query::{Query, TextIndex};
///
/// let index = TextIndex::new(vec!["Alice has long hair",
///                                 "Daddy likes his Alice",
///                                 "wind blows through hair"]);
/// let query = Query::word("fiery") & Query::word("bird") | Query::word("wind");
/// assert_eq!(query.rep(), "((fiery & bird) | wind)");
///
/// let result = query.eval(&index);
/// assert_eq!(result.description(), query.rep());
/// assert_eq!(result.lines().collect::<Vec<_>>(), [2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// The simplest query, matches the lines containing the given word
    Word(Arc<str>),

    /// Matches the lines not matched by the sub-query
    Not(Arc<Query>),

    /// Matches the lines matched by both sub-queries
    And(Arc<Query>, Arc<Query>),

    /// Matches the lines matched by either sub-query
    Or(Arc<Query>, Arc<Query>),
}

impl Query {
    /// Constructs a query matching the lines that contain `term`.
    pub fn word<S: AsRef<str>>(term: S) -> Query {
        Word(term.as_ref().into())
    }

    /// Constructs the negation of `query`.
    pub fn not(query: Query) -> Query {
        Not(Arc::new(query))
    }

    /// Constructs the conjunction of `left` and `right`.
    pub fn and(left: Query, right: Query) -> Query {
        And(Arc::new(left), Arc::new(right))
    }

    /// Constructs the disjunction of `left` and `right`.
    pub fn or(left: Query, right: Query) -> Query {
        Or(Arc::new(left), Arc::new(right))
    }

    /// Returns the textual rendering of the query. This never consults an index, and it is
    /// exactly the description of any result this query evaluates to.
    ///
    /// Words that are empty or contain whitespace, `"` or one of `~ & | ( )` are rendered in
    /// double quotes, so the rendering always parses back into an equal query.
    pub fn rep(&self) -> String {
        self.to_string()
    }

    /// Evaluates the query against `index`.
    ///
    /// A word that occurs nowhere matches no lines; it is not an error.
    pub fn eval(&self, index: &TextIndex) -> QueryResult {
        let result = self.eval_rec(index);
        debug!("evaluated {}: {} lines", result.description(), result.len());
        result
    }

    // Every subtree is evaluated against the same index, so results always share a document.
    fn eval_rec(&self, index: &TextIndex) -> QueryResult {
        match *self {
            Word(ref term) if needs_quotes(term) => {
                index.lookup(term).with_description(self.to_string())
            }
            Word(ref term) => index.lookup(term),
            Not(ref query) => query.eval_rec(index).complement(),
            And(ref left, ref right) => {
                left.eval_rec(index).intersection_unchecked(&right.eval_rec(index))
            }
            Or(ref left, ref right) => left.eval_rec(index).union_unchecked(&right.eval_rec(index)),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Word(ref term) if needs_quotes(term) => {
                f.write_str("\"")?;
                for c in term.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str("\"")
            }
            Word(ref term) => write!(f, "{}", term),
            Not(ref query) => write!(f, "~({})", query),
            And(ref left, ref right) => write!(f, "({} & {})", left, right),
            Or(ref left, ref right) => write!(f, "({} | {})", left, right),
        }
    }
}

impl<'a> From<&'a str> for Query {
    fn from(term: &'a str) -> Query {
        Query::word(term)
    }
}

impl ops::Not for Query {
    type Output = Query;

    fn not(self) -> Query {
        Query::not(self)
    }
}

impl<'a> ops::Not for &'a Query {
    type Output = Query;

    fn not(self) -> Query {
        Query::not(self.clone())
    }
}

impl ops::BitAnd for Query {
    type Output = Query;

    fn bitand(self, rhs: Query) -> Query {
        Query::and(self, rhs)
    }
}

impl<'a, 'b> ops::BitAnd<&'b Query> for &'a Query {
    type Output = Query;

    fn bitand(self, rhs: &'b Query) -> Query {
        Query::and(self.clone(), rhs.clone())
    }
}

impl ops::BitOr for Query {
    type Output = Query;

    fn bitor(self, rhs: Query) -> Query {
        Query::or(self, rhs)
    }
}

impl<'a, 'b> ops::BitOr<&'b Query> for &'a Query {
    type Output = Query;

    fn bitor(self, rhs: &'b Query) -> Query {
        Query::or(self.clone(), rhs.clone())
    }
}
