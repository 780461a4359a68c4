/// What the scanner does with a `""` literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmptyStrings {
    /// Emit a `String("")` token.
    Emit,
    /// Drop the literal without emitting a token. Older scanners did this.
    Suppress,
}

/// How identifiers are matched against the reserved words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeywordCase {
    Exact,
    Insensitive,
}

/// Scanner configuration. The default follows the usual Lox rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options {
    pub empty_strings: EmptyStrings,
    pub keyword_case: KeywordCase,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            empty_strings: EmptyStrings::Emit,
            keyword_case: KeywordCase::Exact,
        }
    }
}

impl Options {
    pub fn empty_strings(mut self, empty_strings: EmptyStrings) -> Self {
        self.empty_strings = empty_strings;
        self
    }

    pub fn keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }
}
