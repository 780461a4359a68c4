use crate::{
    error::{Error, Result},
    options::{EmptyStrings, Options},
    token::{Keyword, NumberLiteral, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use std::str::CharIndices;
use tracing::{debug, trace};

/// Single-pass scanner over a borrowed source buffer.
///
/// `start` and `current` are byte offsets into `source`; every lexeme is a
/// slice between them. Iterating yields tokens and errors in source order
/// and always ends with one `EndOfFile` token.
pub struct Scanner<'src> {
    source: &'src str,
    src: PeekMoreIterator<CharIndices<'src>>,
    options: Options,
    start: usize,
    current: usize,
    start_line: usize,
    line: usize,
    finished: bool,
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>>;

    fn next(&mut self) -> Option<Result<Token<'src>>> {
        loop {
            self.start = self.current;
            self.start_line = self.line;

            let next_char = match self.advance() {
                Some(c) => c,
                None if self.finished => return None,
                None => {
                    self.finished = true;
                    return Some(Ok(Token::new(TokenKind::EndOfFile, "", self.line)));
                }
            };

            if let Some(kind) = self.next_token_kind(next_char) {
                let result = kind.map(|kind| self.make_token(kind));
                match &result {
                    Ok(token) => trace!(%token, "scanned token"),
                    Err(e) => debug!(error = %e, "lexical error"),
                }
                return Some(result);
            }
        }
    }
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, Options::default())
    }

    pub fn with_options(source: &'src str, options: Options) -> Self {
        Self {
            source,
            src: source.char_indices().peekmore(),
            options,
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
            finished: false,
        }
    }

    /// Scans the whole buffer, collecting every token and every error.
    pub fn tokenize(self) -> (Vec<Token<'src>>, Vec<Error>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(e) => errors.push(e),
            }
        }
        debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");
        (tokens, errors)
    }

    /// Returns `None` when the character produced no token (whitespace,
    /// comments, suppressed empty strings).
    fn next_token_kind(&mut self, next_char: char) -> Option<Result<TokenKind<'src>>> {
        use TokenKind::*;
        match next_char {
            '(' => Some(Ok(LeftParen)),
            ')' => Some(Ok(RightParen)),
            '{' => Some(Ok(LeftBrace)),
            '}' => Some(Ok(RightBrace)),
            ',' => Some(Ok(Comma)),
            '.' => Some(Ok(Dot)),
            '-' => Some(Ok(Minus)),
            '+' => Some(Ok(Plus)),
            ';' => Some(Ok(Semicolon)),
            '*' => Some(Ok(Star)),
            '!' => Some(Ok(if self.does_next_match('=') { BangEqual } else { Bang })),
            '=' => Some(Ok(if self.does_next_match('=') { EqualEqual } else { Equal })),
            '<' => Some(Ok(if self.does_next_match('=') { LessEqual } else { Less })),
            '>' => Some(Ok(if self.does_next_match('=') { GreaterEqual } else { Greater })),
            '/' => {
                if self.does_next_match('/') {
                    self.advance_until(|c| c == '\n');
                    None
                } else {
                    Some(Ok(Slash))
                }
            },
            ' ' | '\r' | '\t' | '\n' => None,
            '"' => self.extract_string(),
            c if c.is_ascii_digit() => Some(self.extract_number()),
            c if can_start_identifier(c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::unexpected_character(self.line, c))),
        }
    }

    fn extract_string(&mut self) -> Option<Result<TokenKind<'src>>> {
        self.advance_until(|c| c == '"');
        if self.advance().is_none() {
            return Some(Err(Error::unterminated_string(self.line)));
        }

        // The quotes are single bytes, so the body sits one byte in from
        // either end of the lexeme.
        let source = self.source;
        let text = &source[self.start + 1..self.current - 1];
        if text.is_empty() && self.options.empty_strings == EmptyStrings::Suppress {
            return None;
        }
        Some(Ok(TokenKind::String(text)))
    }

    fn extract_number(&mut self) -> Result<TokenKind<'src>> {
        self.advance_until(|c| !c.is_ascii_digit());

        let has_fraction = self.peek() == Some('.')
            && self.peek_second().map_or(false, |c| c.is_ascii_digit());
        if has_fraction {
            self.advance();
            self.advance_until(|c| !c.is_ascii_digit());
        }

        let lexeme = self.lexeme();
        let number = if has_fraction {
            lexeme.parse().map(NumberLiteral::FloatingPoint).ok()
        } else {
            lexeme.parse().map(NumberLiteral::Integer).ok()
        };

        match number {
            Some(number) => Ok(TokenKind::Number(number)),
            None => Err(Error::invalid_number(self.line, lexeme)),
        }
    }

    fn extract_identifier(&mut self) -> TokenKind<'src> {
        self.advance_until(|c| !is_part_of_valid_identifier(c));

        match Keyword::from_lexeme(self.lexeme(), self.options.keyword_case) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        }
    }

    fn make_token(&self, kind: TokenKind<'src>) -> Token<'src> {
        let lexeme = match kind {
            TokenKind::String(text) => text,
            _ => self.lexeme(),
        };
        Token::new(kind, lexeme, self.start_line)
    }

    fn lexeme(&self) -> &'src str {
        let source = self.source;
        &source[self.start..self.current]
    }

    fn advance(&mut self) -> Option<char> {
        let (offset, c) = self.src.next()?;
        self.current = offset + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.src.peek().map(|&(_, c)| c)
    }

    fn peek_second(&mut self) -> Option<char> {
        self.src.peek_nth(1).map(|&(_, c)| c)
    }

    fn does_next_match(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_until(&mut self, should_stop: impl Fn(char) -> bool) {
        while let Some(next) = self.peek() {
            if should_stop(next) {
                break;
            }
            self.advance();
        }
    }
}

fn can_start_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_part_of_valid_identifier(c: char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}
