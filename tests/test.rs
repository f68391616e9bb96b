use pratt_calc::{
    evaluate_line, evaluator::evaluate, lexer::lex, parser::parse, token::TokenKind, CalcError,
    ParseError,
};
use proptest::prelude::*;
use rstest::*;

#[rstest]
#[case("42", 42.0)]
#[case("2 + 3 * 4", 14.0)]
#[case("2 * 3 + 4", 10.0)]
#[case("8 - 3 - 2", 3.0)]
#[case("100 / 10 / 5", 2.0)]
#[case("-2 + 3", 1.0)]
#[case("- -5", 5.0)]
#[case("+5", 5.0)]
#[case("2 * -3", -6.0)]
#[case("1e3", 1000.0)]
#[case("2.5e-1 * 4", 1.0)]
#[case("1.5+2.5", 4.0)]
#[case("  7\t", 7.0)]
#[case("1.", 1.0)]
#[case("1e + 1", 2.0)]
#[case("1e- - 2", -1.0)]
fn evaluates(#[case] line: &str, #[case] expected: f64) {
    assert_eq!(evaluate_line(line).expect("line should evaluate"), expected);
}

#[rstest]
#[case("1 / 0", f64::INFINITY)]
#[case("-1 / 0", f64::NEG_INFINITY)]
#[case("1e999", f64::INFINITY)]
#[case("-1e999 * 2", f64::NEG_INFINITY)]
fn infinities(#[case] line: &str, #[case] expected: f64) {
    assert_eq!(evaluate_line(line).unwrap(), expected);
}

#[test]
fn zero_by_zero_is_nan() {
    assert!(evaluate_line("0 / 0").unwrap().is_nan());
}

#[test]
fn lexical_error() {
    let err = lex("3 & 4").unwrap_err();
    assert_eq!(err.character, '&');
    assert_eq!(err.column, 2);

    match evaluate_line("3 & 4") {
        Err(CalcError::Lex(e)) => assert_eq!(e, err),
        other => panic!("expected a lexical error, got {other:?}"),
    }
}

#[test]
fn parse_error() {
    let err = parse(lex("* 2").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::ExpectedExpression { .. }));
    assert_eq!(err.lexeme(), "*");
}

#[test]
fn exponent_literal_is_one_token() {
    let tokens = lex("1e3").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "1e3");
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    assert_eq!(evaluate(&parse(tokens).unwrap()), 1000.0);
}

#[test]
fn lenient_and_strict_parsing() {
    assert_eq!(evaluate_line("1 2").unwrap(), 1.0);

    let err = pratt_calc::parse_line("1 2", true).unwrap_err();
    assert!(matches!(
        err,
        CalcError::Parse(ParseError::TrailingInput { .. })
    ));
}

#[rstest]
#[case(format!("{}5", "-".repeat(200_000)))]
#[case(format!("1{}", "+1".repeat(500_000)))]
fn overly_nested_lines_are_rejected(#[case] line: String) {
    match evaluate_line(&line) {
        Err(CalcError::Parse(ParseError::TooDeep { limit, .. })) => {
            assert_eq!(limit, pratt_calc::parser::MAX_DEPTH)
        }
        other => panic!("expected the nesting limit to be hit, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn digit_sequences_evaluate_to_their_value(digits in "[0-9]{1,30}") {
        let expected: f64 = digits.parse().unwrap();
        prop_assert_eq!(evaluate(&parse(lex(&digits).unwrap()).unwrap()), expected);
    }

    #[test]
    fn pipeline_is_idempotent(line in "[0-9 +*/.e-]{0,40}") {
        let first = evaluate_line(&line);
        let second = evaluate_line(&line);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert!(a == b || (a.is_nan() && b.is_nan())),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "results differ: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn subtraction_chains_associate_left(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let line = format!("{a} - {b} - {c}");
        let expected = (f64::from(a) - f64::from(b)) - f64::from(c);
        prop_assert_eq!(evaluate_line(&line).unwrap(), expected);
    }
}
