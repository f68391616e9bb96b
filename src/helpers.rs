use crate::{
    ast::{BinaryOperator, UnaryOperator},
    token::TokenKind,
};

// Only reachable through the rule table, which never hands these an
// operator it has no rule for.

impl BinaryOperator {
    pub(crate) fn from(op: TokenKind) -> Self {
        match op {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,

            _ => unreachable!("no binary operator for {op:?}"),
        }
    }
}

impl UnaryOperator {
    pub(crate) fn from(op: TokenKind) -> Self {
        match op {
            TokenKind::Plus => Self::Plus,
            TokenKind::Minus => Self::Neg,

            _ => unreachable!("no unary operator for {op:?}"),
        }
    }
}

/// Converts a number lexeme the way C's `strtod` would: the longest prefix
/// that forms a valid float is used. The scanner accepts dangling exponents
/// such as `1e` or `1e+`, which fall back to their mantissa.
pub(crate) fn parse_number_lexeme(lexeme: &str) -> f64 {
    if let Ok(value) = lexeme.parse::<f64>() {
        return value;
    }

    let mantissa = lexeme.find('e').map_or(lexeme, |e| &lexeme[..e]);
    mantissa.parse().unwrap_or(0.0)
}
