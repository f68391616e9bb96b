use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Raised on the first character the scanner does not recognise. Scanning of
/// the line stops there.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Error)]
#[error("unexpected character '{character}' at column {column}")]
#[diagnostic(
    code = "unexpected_character",
    help("only numbers, whitespace and the operators + - * / are allowed")
)]
pub struct LexError {
    pub character: char,
    /// Zero-based character offset into the line.
    pub column: usize,
    #[label("unexpected character")]
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Error)]
pub enum ParseError {
    #[error("expected expression, found `{lexeme}`")]
    #[diagnostic(code = "expected_expression")]
    ExpectedExpression {
        lexeme: String,
        #[label("expected an expression here")]
        span: SourceSpan,
    },

    #[error("unexpected `{lexeme}` after expression")]
    #[diagnostic(
        code = "trailing_input",
        help("a line holds exactly one expression")
    )]
    TrailingInput {
        lexeme: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    #[error("expression nests more than {limit} levels deep")]
    #[diagnostic(code = "too_deep", help("split the calculation over several lines"))]
    TooDeep {
        lexeme: String,
        limit: usize,
        #[label("limit reached here")]
        span: SourceSpan,
    },
}

impl ParseError {
    pub fn lexeme(&self) -> &str {
        match self {
            Self::ExpectedExpression { lexeme, .. }
            | Self::TrailingInput { lexeme, .. }
            | Self::TooDeep { lexeme, .. } => lexeme,
        }
    }
}

/// Anything that can go wrong while turning one line into a value.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Error)]
pub enum CalcError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}
