pub mod ast;
pub mod error;
pub mod evaluator;
mod helpers;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod rules;
pub mod token;

pub use error::{CalcError, LexError, ParseError};

pub type Result<T, E = CalcError> = std::result::Result<T, E>;

/// Scans and parses one line. With `strict`, tokens left after the
/// expression are an error instead of being ignored.
pub fn parse_line(line: &str, strict: bool) -> Result<ast::Expression> {
    let tokens = lexer::lex(line)?;
    let mut parser = parser::Parser::new(tokens);
    let expression = if strict {
        parser.parse_complete()?
    } else {
        parser.parse()?
    };

    Ok(expression)
}

/// Runs the whole pipeline on one line: scan, parse, evaluate.
pub fn evaluate_line(line: &str) -> Result<f64> {
    parse_line(line, false).map(|expression| evaluator::evaluate(&expression))
}
