//! Boolean queries over the lines of a text document.
//!
//! A `TextIndex` maps every whitespace-separated word of a document to the lines it occurs on.
//! A `Query` combines word lookups with NOT, AND and OR, and evaluates against an index to a
//! `QueryResult`: the matching line numbers, a description of the query, and the document.
//!
//! ```
//! use text_query::{Query, TextIndex};
//!
//! let index = TextIndex::new(vec!["Alice has long hair",
//!                                 "Daddy likes his Alice",
//!                                 "wind blows through hair"]);
//!
//! let query = Query::word("hair") & !Query::word("wind");
//! let result = query.eval(&index);
//! assert_eq!(result.description(), "(hair & ~(wind))");
//! assert_eq!(result.lines().collect::<Vec<_>>(), [0]);
//! ```

mod error;
mod index;
mod parser;

pub use error::{Error, Result};
pub use index::{Document, LineSet, LineSetAlgebra, Query, QueryResult, TextIndex};
pub use parser::parse_query;
