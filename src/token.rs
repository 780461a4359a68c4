use std::fmt::{self, Display};

use phf::phf_map;

use crate::options::KeywordCase;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub lexeme: &'src str,
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, lexeme: &'src str, line: usize) -> Self {
        Token { kind, lexeme, line }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) line {}", self.kind, self.lexeme, self.line)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind<'src> {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String(&'src str), Number(NumberLiteral),

    Keyword(Keyword),

    EndOfFile,
}

impl TokenKind<'_> {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Identifier => "IDENTIFIER",
            String(_) => "STRING",
            Number(_) => "NUMBER",
            Keyword(_) => "KEYWORD",
            EndOfFile => "EOF",
        }
    }
}

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String(text) => write!(f, "{}({:?})", self.name(), text),
            TokenKind::Number(n) => write!(f, "{}({})", self.name(), n),
            TokenKind::Keyword(k) => write!(f, "{}({})", self.name(), k),
            _ => f.write_str(self.name()),
        }
    }
}

/// A numeric literal. Whether it is an integer or a float depends only on
/// the presence of a fractional part in the lexeme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberLiteral {
    Integer(i64),
    FloatingPoint(f64),
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLiteral::Integer(i) => write!(f, "INTEGER({})", i),
            NumberLiteral::FloatingPoint(x) => write!(f, "FLOATING_POINT({:?})", x),
        }
    }
}

static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "and" => Keyword::And,
    "class" => Keyword::Class,
    "else" => Keyword::Else,
    "false" => Keyword::False,
    "for" => Keyword::For,
    "fun" => Keyword::Fun,
    "if" => Keyword::If,
    "or" => Keyword::Or,
    "print" => Keyword::Print,
    "return" => Keyword::Return,
    "super" => Keyword::Super,
    "this" => Keyword::This,
    "true" => Keyword::True,
    "var" => Keyword::Var,
    "while" => Keyword::While,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    And, Class, Else, False, For, Fun, If, Or,
    Print, Return, Super, This, True, Var, While,
}

impl Keyword {
    /// Looks up a reserved word. Under `KeywordCase::Insensitive` the
    /// lexeme is case-folded first, so `AND` and `And` both match.
    pub fn from_lexeme(lexeme: &str, case: KeywordCase) -> Option<Keyword> {
        match case {
            KeywordCase::Exact => KEYWORDS.get(lexeme).copied(),
            KeywordCase::Insensitive => KEYWORDS.get(lexeme.to_ascii_lowercase().as_str()).copied(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        use Keyword::*;
        match self {
            And => "and",
            Class => "class",
            Else => "else",
            False => "false",
            For => "for",
            Fun => "fun",
            If => "if",
            Or => "or",
            Print => "print",
            Return => "return",
            Super => "super",
            This => "this",
            True => "true",
            Var => "var",
            While => "while",
        }
    }

    pub fn as_upper_str(&self) -> &'static str {
        use Keyword::*;
        match self {
            And => "AND",
            Class => "CLASS",
            Else => "ELSE",
            False => "FALSE",
            For => "FOR",
            Fun => "FUN",
            If => "IF",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_keeps_kind_lexeme_and_line() {
        let token = Token::new(TokenKind::LeftParen, "(", 1);
        assert_eq!(token.kind, TokenKind::LeftParen);
        assert_eq!(token.lexeme, "(");
        assert_eq!(token.line, 1);
        assert!(!token.is_eof());
    }

    #[test]
    fn integer_and_float_literals_are_distinct() {
        let int = TokenKind::Number(NumberLiteral::Integer(42));
        let float = TokenKind::Number(NumberLiteral::FloatingPoint(42.0));
        assert_ne!(int, float);
    }

    #[test]
    fn renders_payload_kinds() {
        let token = Token::new(TokenKind::Number(NumberLiteral::Integer(42)), "42", 1);
        assert_eq!(token.to_string(), "NUMBER(INTEGER(42))(42) line 1");

        let float = TokenKind::Number(NumberLiteral::FloatingPoint(2.5));
        assert_eq!(float.to_string(), "NUMBER(FLOATING_POINT(2.5))");

        assert_eq!(TokenKind::Keyword(Keyword::And).to_string(), "KEYWORD(AND)");
        assert_eq!(TokenKind::String("hi").to_string(), "STRING(\"hi\")");
    }

    #[test]
    fn less_equal_renders_its_own_name() {
        assert_eq!(TokenKind::LessEqual.to_string(), "LESS_EQUAL");
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::EndOfFile.to_string(), "EOF");
    }

    #[test]
    fn keyword_lookup_respects_case_policy() {
        assert_eq!(Keyword::from_lexeme("while", KeywordCase::Exact), Some(Keyword::While));
        assert_eq!(Keyword::from_lexeme("While", KeywordCase::Exact), None);
        assert_eq!(Keyword::from_lexeme("While", KeywordCase::Insensitive), Some(Keyword::While));
        assert_eq!(Keyword::from_lexeme("nil", KeywordCase::Insensitive), None);
    }

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for (word, keyword) in KEYWORDS.entries() {
            assert_eq!(keyword.as_str(), *word);
            assert_eq!(keyword.as_upper_str(), word.to_ascii_uppercase());
            assert_eq!(keyword.to_string(), keyword.as_upper_str());
        }
        assert_eq!(KEYWORDS.len(), 15);
    }
}
