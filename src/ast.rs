use std::fmt;

/// An arithmetic expression tree. Every node owns its children.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(f64),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
}

#[derive(Debug, PartialEq, Clone)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BinaryOp {
    pub op: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Neg,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Expression {
    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Self::UnaryOp(UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn binary(op: BinaryOperator, lhs: Expression, rhs: Expression) -> Self {
        Self::BinaryOp(BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}

impl UnaryOperator {
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Neg => '-',
        }
    }
}

impl BinaryOperator {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

// Prefix notation makes grouping explicit: `1 - 2 * 3` prints as `(- 1 (* 2 3))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{value}"),
            Expression::UnaryOp(UnaryOp { op, operand }) => {
                write!(f, "({} {operand})", op.symbol())
            }
            Expression::BinaryOp(BinaryOp { op, lhs, rhs }) => {
                write!(f, "({} {lhs} {rhs})", op.symbol())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefix_notation() {
        let expr = Expression::binary(
            BinaryOperator::Sub,
            Expression::Literal(1.0),
            Expression::binary(
                BinaryOperator::Mul,
                Expression::unary(UnaryOperator::Neg, Expression::Literal(2.5)),
                Expression::Literal(3.0),
            ),
        );

        assert_eq!(expr.to_string(), "(- 1 (* (- 2.5) 3))");
    }
}
