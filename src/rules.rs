use crate::token::TokenKind;

/// Binding strength of a token when it continues an expression. Ordered from
/// loosest to tightest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None,
    Term,
    Factor,
    Unary,
    Primary,
}

impl Precedence {
    /// The next tighter level. Saturates at [`Precedence::Primary`].
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Unary,
            Self::Unary | Self::Primary => Self::Primary,
        }
    }
}

/// How a token may begin an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixAction {
    Literal,
    Unary,
}

/// How a token may continue an expression that is already built.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixAction {
    Binary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseRule {
    pub precedence: Precedence,
    pub prefix: Option<PrefixAction>,
    pub infix: Option<InfixAction>,
}

impl ParseRule {
    const fn new(
        precedence: Precedence,
        prefix: Option<PrefixAction>,
        infix: Option<InfixAction>,
    ) -> Self {
        Self {
            precedence,
            prefix,
            infix,
        }
    }
}

/// Per-token-kind parse rules, indexed by [`TokenKind`].
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: [ParseRule; 6],
}

impl RuleTable {
    pub fn new() -> Self {
        let rules = TokenKind::ALL.map(|kind| {
            use InfixAction::*;
            use PrefixAction::*;

            match kind {
                TokenKind::Plus | TokenKind::Minus => {
                    ParseRule::new(Precedence::Term, Some(Unary), Some(Binary))
                }
                TokenKind::Star | TokenKind::Slash => {
                    ParseRule::new(Precedence::Factor, None, Some(Binary))
                }
                TokenKind::Number => ParseRule::new(Precedence::Primary, Some(Literal), None),
                TokenKind::EndOfInput => ParseRule::new(Precedence::None, None, None),
            }
        });

        Self { rules }
    }

    pub fn rule_for(&self, kind: TokenKind) -> &ParseRule {
        &self.rules[kind.index()]
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}
