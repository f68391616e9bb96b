use std::io::{self, BufRead, Write};

use miette::Report;

use crate::{evaluator, lexer::Lexer, parse_line};

pub const DEFAULT_PROMPT: &str = "evaluator -> ";
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub strict: bool,
    pub debug_lexer: bool,
    pub debug_parser: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            strict: false,
            debug_lexer: false,
            debug_parser: false,
        }
    }
}

/// Reads lines from `input` until `exit` or end of stream, printing each
/// line's value to `output` and diagnostics to `errors`.
///
/// A bad line never ends the loop; only I/O failures do.
pub fn run<R, W, E>(
    mut input: R,
    output: &mut W,
    errors: &mut E,
    options: &ReplOptions,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut bytes = Vec::new();

    loop {
        write!(output, "{}", options.prompt)?;
        output.flush()?;

        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            log::debug!("end of input");
            break;
        }

        // Invalid UTF-8 becomes U+FFFD, which the lexer then rejects for
        // this line only.
        let buffer = String::from_utf8_lossy(&bytes);
        let line = strip_line_ending(&buffer);
        if line == EXIT_COMMAND {
            break;
        }

        if options.debug_lexer {
            debug_lexer(line, errors)?;
            continue;
        }

        match parse_line(line, options.strict) {
            Ok(expression) => {
                if options.debug_parser {
                    writeln!(output, "{expression}")?;
                }
                writeln!(output, "{}", evaluator::evaluate(&expression))?;
            }
            Err(e) => {
                log::debug!("rejected line: {e}");
                let report = Report::new(e).with_source_code(line.to_string());
                writeln!(errors, "{report:?}")?;
            }
        }
    }

    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn debug_lexer<E: Write>(line: &str, errors: &mut E) -> io::Result<()> {
    for token in Lexer::new(line) {
        let report = match token {
            Ok(t) => miette::miette!(
                labels = vec![t.span.labeled(format!("{:?}", t.kind))],
                severity = miette::Severity::Advice,
                "found a token",
            ),
            Err(e) => Report::new(e),
        };
        writeln!(errors, "{:?}", report.with_source_code(line.to_string()))?;
    }

    Ok(())
}
