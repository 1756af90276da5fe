use std::io;

use thiserror::Error;

/// Errors raised while building an index, combining results or parsing a query.
///
/// Looking up a word that never occurs is not an error; it yields an empty result.
#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),

    /// Two results built against different documents were combined.
    #[error("cannot combine results from different documents: {left:?} and {right:?}")]
    DocumentMismatch { left: String, right: String },

    /// The query text contained a token that is not valid at this position.
    #[error("unexpected token {token:?} at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// The query text ended before the expression was complete.
    #[error("unexpected end of query")]
    UnexpectedEof,

    /// The query text contained nothing but whitespace.
    #[error("empty query")]
    EmptyQuery,

    /// An opening parenthesis was never closed.
    #[error("missing closing parenthesis for the one opened at position {position}")]
    MissingClosingParen { position: usize },

    /// A quoted word was never closed.
    #[error("unclosed quote opened at position {position}")]
    UnclosedQuote { position: usize },

    /// A result could not be rendered as JSON.
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
