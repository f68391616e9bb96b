use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::error::ParseError;
use crate::helpers::parse_number_lexeme;
use crate::rules::{InfixAction, Precedence, PrefixAction, RuleTable};
use crate::token::{Span, Token, TokenKind};

/// Deepest expression tree the parser will build. Evaluating, printing and
/// dropping a tree all recurse once per level.
pub const MAX_DEPTH: usize = 512;

/// An expression together with the height of its tree.
type Subtree = (Expression, usize);

/// Precedence-climbing parser over the tokens of one line.
pub struct Parser<'source> {
    tokens: Vec<Token<'source>>,
    rules: RuleTable,
    current: usize,
    depth: usize,
}

impl<'source> Parser<'source> {
    pub fn new(tokens: Vec<Token<'source>>) -> Self {
        Self {
            tokens,
            rules: RuleTable::default(),
            current: 0,
            depth: 0,
        }
    }

    /// Parses one expression from the start of the token stream.
    ///
    /// Tokens left over after a complete expression are not consumed and not
    /// reported; see [`Parser::parse_complete`] for the strict variant.
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let expression = self.expression()?;
        log::debug!("parsed {expression}");
        Ok(expression)
    }

    /// Like [`Parser::parse`], but fails unless the expression is followed
    /// directly by the end of input.
    pub fn parse_complete(&mut self) -> Result<Expression, ParseError> {
        let expression = self.parse()?;

        let next = self.peek();
        if next.kind != TokenKind::EndOfInput {
            return Err(ParseError::TrailingInput {
                lexeme: next.lexeme.to_string(),
                span: next.span.into(),
            });
        }

        Ok(expression)
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_precedence(Precedence::Term)
            .map(|(expression, _)| expression)
    }

    fn parse_precedence(&mut self, min_precedence: Precedence) -> Result<Subtree, ParseError> {
        let token = self.advance();
        if self.depth >= MAX_DEPTH {
            return Err(too_deep(token));
        }

        self.depth += 1;
        let subtree = self.parse_precedence_from(token, min_precedence);
        self.depth -= 1;
        subtree
    }

    fn parse_precedence_from(
        &mut self,
        token: Token<'source>,
        min_precedence: Precedence,
    ) -> Result<Subtree, ParseError> {
        let Some(prefix) = self.rules.rule_for(token.kind).prefix else {
            return Err(ParseError::ExpectedExpression {
                lexeme: token.describe().to_string(),
                span: token.span.into(),
            });
        };

        let mut lhs = match prefix {
            PrefixAction::Literal => (self.literal(token), 1),
            PrefixAction::Unary => self.unary(token)?,
        };

        loop {
            let next = self.peek();
            let rule = *self.rules.rule_for(next.kind);

            // A token that cannot continue an expression (a second number,
            // or the end of input) ends it.
            let Some(infix) = rule.infix else {
                break;
            };
            if rule.precedence < min_precedence {
                break;
            }

            log::trace!(
                "{:?} `{}` continues expression at {min_precedence:?}",
                next.kind,
                next.lexeme
            );
            self.advance();

            lhs = match infix {
                InfixAction::Binary => self.binary(lhs, next)?,
            };
        }

        Ok(lhs)
    }

    fn literal(&self, token: Token<'source>) -> Expression {
        Expression::Literal(parse_number_lexeme(token.lexeme))
    }

    fn unary(&mut self, op: Token<'source>) -> Result<Subtree, ParseError> {
        let (operand, height) = self.parse_precedence(Precedence::Unary)?;
        let height = grow(height, op)?;
        Ok((Expression::unary(UnaryOperator::from(op.kind), operand), height))
    }

    fn binary(&mut self, lhs: Subtree, op: Token<'source>) -> Result<Subtree, ParseError> {
        let (lhs, lhs_height) = lhs;

        // One level tighter on the right makes equal-precedence operators
        // associate to the left.
        let precedence = self.rules.rule_for(op.kind).precedence;
        let (rhs, rhs_height) = self.parse_precedence(precedence.next())?;

        // Chains like `1 + 1 + ...` grow the tree without nesting calls, so
        // the height is checked here as well as on entry.
        let height = grow(lhs_height.max(rhs_height), op)?;
        Ok((
            Expression::binary(BinaryOperator::from(op.kind), lhs, rhs),
            height,
        ))
    }

    fn peek(&self) -> Token<'source> {
        self.tokens
            .get(self.current)
            .copied()
            .unwrap_or_else(|| self.end_of_input())
    }

    /// Returns the current token and moves past it. The end of input is never
    /// moved past.
    fn advance(&mut self) -> Token<'source> {
        let token = self.peek();
        if token.kind != TokenKind::EndOfInput {
            self.current += 1;
        }
        token
    }

    // Stands in for a missing end-of-input token when the stream was built
    // without one.
    fn end_of_input(&self) -> Token<'source> {
        let end = self.tokens.last().map_or(0, |t| t.span.end);
        Token {
            kind: TokenKind::EndOfInput,
            lexeme: "",
            span: Span::new(end, end),
        }
    }
}

/// Height of a node whose tallest child has height `child`.
fn grow(child: usize, op: Token<'_>) -> Result<usize, ParseError> {
    let height = child + 1;
    if height > MAX_DEPTH {
        return Err(too_deep(op));
    }
    Ok(height)
}

fn too_deep(token: Token<'_>) -> ParseError {
    ParseError::TooDeep {
        lexeme: token.describe().to_string(),
        limit: MAX_DEPTH,
        span: token.span.into(),
    }
}

/// Parses a token stream produced by [`crate::lexer::lex`].
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Expression, ParseError> {
    Parser::new(tokens).parse()
}
