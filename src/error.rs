use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    UnexpectedCharacter(char),
    UnterminatedString,
    InvalidNumber,
}

/// A lexical error. Collected by the scanner rather than returned early, so
/// one bad character never hides the tokens after it.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("[line {line}] Error: {message}")]
pub struct Error {
    kind: ErrorKind,
    line: usize,
    message: String,
}

impl Error {
    pub fn unexpected_character(line: usize, c: char) -> Error {
        let kind = ErrorKind::UnexpectedCharacter(c);
        Error { kind, line, message: format!("Unexpected character '{}'.", c) }
    }

    pub fn unterminated_string(line: usize) -> Error {
        let kind = ErrorKind::UnterminatedString;
        Error { kind, line, message: "Unterminated string.".into() }
    }

    pub fn invalid_number<S: AsRef<str>>(line: usize, lexeme: S) -> Error {
        let kind = ErrorKind::InvalidNumber;
        let message = format!("Integer literal '{}' is out of range.", lexeme.as_ref());
        Error { kind, line, message }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(InvalidData, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_line_and_message() {
        let e = Error::unexpected_character(3, '@');
        assert_eq!(e.to_string(), "[line 3] Error: Unexpected character '@'.");
        assert_eq!(e.kind(), &ErrorKind::UnexpectedCharacter('@'));
        assert_eq!(e.line(), 3);
    }

    #[test]
    fn unterminated_string_message() {
        let e = Error::unterminated_string(7);
        assert_eq!(e.message(), "Unterminated string.");
        assert_eq!(e.to_string(), "[line 7] Error: Unterminated string.");
    }

    #[test]
    fn invalid_number_names_the_lexeme() {
        let e = Error::invalid_number(1, "99999999999999999999");
        assert_eq!(e.kind(), &ErrorKind::InvalidNumber);
        assert!(e.message().contains("99999999999999999999"));
    }

    #[test]
    fn converts_into_io_error() {
        let io: std::io::Error = Error::unterminated_string(1).into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
