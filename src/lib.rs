//! Lexical analysis for Lox source text.
//!
//! ```
//! use loxlex::{tokenize, TokenKind};
//!
//! let (tokens, errors) = tokenize("var answer = 42;");
//! assert!(errors.is_empty());
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
//! ```

pub mod error;
pub mod options;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::options::{EmptyStrings, KeywordCase, Options};
pub use crate::scanner::Scanner;
pub use crate::token::{Keyword, NumberLiteral, Token, TokenKind};

/// Tokenizes `source` with the default options.
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, Vec<Error>) {
    Scanner::new(source).tokenize()
}
