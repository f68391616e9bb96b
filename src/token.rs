use miette::{LabeledSpan, SourceSpan};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn labeled(&self, label: impl Into<String>) -> LabeledSpan {
        LabeledSpan::at(self.start..self.end, label.into())
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    pub kind: TokenKind,
    /// The exact slice of the line this token was scanned from. Empty for
    /// [`TokenKind::EndOfInput`].
    pub lexeme: &'source str,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Number,

    // Punctuation
    Plus,
    Minus,
    Star,
    Slash,

    EndOfInput,
}

impl TokenKind {
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Number,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::EndOfInput,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl<'source> Token<'source> {
    /// How the token is named in diagnostics.
    pub fn describe(&self) -> &'source str {
        match self.kind {
            TokenKind::EndOfInput => "end of input",
            _ => self.lexeme,
        }
    }
}
