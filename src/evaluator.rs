use crate::ast::{BinaryOp, BinaryOperator, Expression, UnaryOp, UnaryOperator};

/// Computes the value of an expression tree.
///
/// Follows IEEE-754 throughout: dividing by zero yields an infinity or NaN
/// rather than an error.
pub fn evaluate(expression: &Expression) -> f64 {
    match expression {
        Expression::Literal(value) => *value,
        Expression::UnaryOp(UnaryOp { op, operand }) => {
            let operand = evaluate(operand);
            match op {
                UnaryOperator::Plus => operand,
                UnaryOperator::Neg => -operand,
            }
        }
        Expression::BinaryOp(BinaryOp { op, lhs, rhs }) => {
            let lhs = evaluate(lhs);
            let rhs = evaluate(rhs);
            match op {
                BinaryOperator::Add => lhs + rhs,
                BinaryOperator::Sub => lhs - rhs,
                BinaryOperator::Mul => lhs * rhs,
                BinaryOperator::Div => lhs / rhs,
            }
        }
    }
}

impl Expression {
    pub fn evaluate(&self) -> f64 {
        evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: f64) -> Expression {
        Expression::Literal(value)
    }

    #[test]
    fn literal() {
        assert_eq!(evaluate(&lit(2.5)), 2.5);
    }

    #[test]
    fn unary() {
        let neg = Expression::unary(UnaryOperator::Neg, lit(4.0));
        assert_eq!(evaluate(&neg), -4.0);

        let plus = Expression::unary(UnaryOperator::Plus, neg);
        assert_eq!(plus.evaluate(), -4.0);
    }

    #[test]
    fn binary() {
        for (op, expected) in [
            (BinaryOperator::Add, 8.0),
            (BinaryOperator::Sub, 4.0),
            (BinaryOperator::Mul, 12.0),
            (BinaryOperator::Div, 3.0),
        ] {
            let expr = Expression::binary(op, lit(6.0), lit(2.0));
            assert_eq!(evaluate(&expr), expected, "when evaluating {expr}");
        }
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let div = |lhs, rhs| {
            evaluate(&Expression::binary(
                BinaryOperator::Div,
                lit(lhs),
                lit(rhs),
            ))
        };

        assert_eq!(div(1.0, 0.0), f64::INFINITY);
        assert_eq!(div(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(div(0.0, 0.0).is_nan());
    }

    #[test]
    fn negating_zero() {
        let value = evaluate(&Expression::unary(UnaryOperator::Neg, lit(0.0)));
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }
}
