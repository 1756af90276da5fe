//! Parsing of query text into a `Query` tree.
//!
//! The accepted syntax is the one `Query::rep` renders, so any rendered query parses back into an
//! equal tree.
//!
//! # Grammar
//!
//! ```text
//! query    := or_expr
//! or_expr  := and_expr ('|' and_expr)*
//! and_expr := not_expr ('&' not_expr)*
//! not_expr := '~' not_expr | primary
//! primary  := WORD | QUOTED | '(' or_expr ')'
//! ```
//!
//! A WORD is any run of characters other than whitespace, `"` and `~ & | ( )`. A QUOTED word is
//! written between double quotes and may contain anything; inside it `\"` stands for `"` and
//! `\\` for `\`. `Query::rep` quotes exactly the words that cannot be written bare, including
//! the empty word.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::index::Query;

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Word(String),
    Not,
    And,
    Or,
    LeftParen,
    RightParen,
    Eof,
}

impl Token {
    fn text(&self) -> String {
        match *self {
            Token::Word(ref word) => word.clone(),
            Token::Not => "~".into(),
            Token::And => "&".into(),
            Token::Or => "|".into(),
            Token::LeftParen => "(".into(),
            Token::RightParen => ")".into(),
            Token::Eof => String::new(),
        }
    }
}

/// Returns true for the characters that end a bare word.
pub(crate) fn is_reserved(c: char) -> bool {
    c.is_whitespace() || matches!(c, '~' | '&' | '|' | '(' | ')' | '"')
}

/// Returns true if `word` has to be quoted to be read back as a single word.
pub(crate) fn needs_quotes(word: &str) -> bool {
    word.is_empty() || word.chars().any(is_reserved)
}

struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    fn new(input: &str) -> Lexer {
        Lexer { input: input.chars().collect(), position: 0 }
    }

    /// Returns the next token and the char offset it starts at.
    fn next_token(&mut self) -> Result<(Token, usize)> {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
        let start = self.position;
        let c = match self.input.get(start) {
            Some(&c) => c,
            None => return Ok((Token::Eof, start)),
        };
        self.position += 1;
        let token = match c {
            '~' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '"' => Token::Word(self.read_quoted(start)?),
            _ => {
                while self.position < self.input.len() && !is_reserved(self.input[self.position]) {
                    self.position += 1;
                }
                Token::Word(self.input[start..self.position].iter().collect())
            }
        };
        Ok((token, start))
    }

    // Reads the rest of a quoted word; the opening quote is already consumed.
    fn read_quoted(&mut self, start: usize) -> Result<String> {
        let mut word = String::new();
        loop {
            let c = match self.input.get(self.position) {
                Some(&c) => c,
                None => return Err(Error::UnclosedQuote { position: start }),
            };
            self.position += 1;
            match c {
                '"' => return Ok(word),
                '\\' => {
                    match self.input.get(self.position) {
                        Some(&escaped) => word.push(escaped),
                        None => return Err(Error::UnclosedQuote { position: start }),
                    }
                    self.position += 1;
                }
                _ => word.push(c),
            }
        }
    }
}

/// A recursive descent parser over the token stream of a single query.
struct Parser {
    lexer: Lexer,
    current: Token,
    position: usize,
}

impl Parser {
    fn new(input: &str) -> Result<Parser> {
        let mut lexer = Lexer::new(input);
        let (current, position) = lexer.next_token()?;
        Ok(Parser { lexer: lexer, current: current, position: position })
    }

    fn advance(&mut self) -> Result<()> {
        let (current, position) = self.lexer.next_token()?;
        self.current = current;
        self.position = position;
        Ok(())
    }

    fn parse(&mut self) -> Result<Query> {
        if self.current == Token::Eof {
            return Err(Error::EmptyQuery);
        }
        let query = self.parse_or()?;
        if self.current != Token::Eof {
            return Err(self.unexpected());
        }
        Ok(query)
    }

    fn parse_or(&mut self) -> Result<Query> {
        let mut query = self.parse_and()?;
        while self.current == Token::Or {
            self.advance()?;
            query = Query::or(query, self.parse_and()?);
        }
        Ok(query)
    }

    fn parse_and(&mut self) -> Result<Query> {
        let mut query = self.parse_not()?;
        while self.current == Token::And {
            self.advance()?;
            query = Query::and(query, self.parse_not()?);
        }
        Ok(query)
    }

    fn parse_not(&mut self) -> Result<Query> {
        if self.current == Token::Not {
            self.advance()?;
            Ok(Query::not(self.parse_not()?))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Query> {
        match self.current.clone() {
            Token::Word(word) => {
                self.advance()?;
                Ok(Query::word(word))
            }
            Token::LeftParen => {
                let open = self.position;
                self.advance()?;
                let query = self.parse_or()?;
                match self.current {
                    Token::RightParen => {
                        self.advance()?;
                        Ok(query)
                    }
                    Token::Eof => Err(Error::MissingClosingParen { position: open }),
                    _ => Err(self.unexpected()),
                }
            }
            Token::Eof => Err(Error::UnexpectedEof),
            _ => Err(self.unexpected()),
        }
    }

    fn unexpected(&self) -> Error {
        Error::UnexpectedToken { token: self.current.text(), position: self.position }
    }
}

/// Parses query text such as `(hair | Alice) & ~(Daddy)` into a `Query`.
///
/// `~` binds tighter than `&`, which binds tighter than `|`; both binary operators are
/// left-associative.
///
/// # Examples
///
/// ```
/// use text_query::{parse_query, Query};
///
/// let query = parse_query("fiery & bird | wind").unwrap();
/// assert_eq!(query, Query::word("fiery") & Query::word("bird") | Query::word("wind"));
/// assert_eq!(parse_query(&query.rep()).unwrap(), query);
/// ```
pub fn parse_query(input: &str) -> Result<Query> {
    Parser::new(input)?.parse()
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Query> {
        parse_query(s)
    }
}
