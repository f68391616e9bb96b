use std::io;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use pratt_calc::repl::{self, ReplOptions, DEFAULT_PROMPT};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Input {
    /// Text printed before reading each line
    #[clap(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Reject lines that have tokens left over after the expression.
    #[clap(long, default_value = "false")]
    strict: bool,

    /// Debug the lexer, printing out each token. Does not parse or evaluate the line.
    #[clap(long, default_value = "false")]
    debug_lexer: bool,

    /// Debug the parser, printing out the expression tree before its value.
    #[clap(long, default_value = "false")]
    debug_parser: bool,
}

fn main() -> miette::Result<()> {
    env_logger::init();

    let Input {
        prompt,
        strict,
        debug_lexer,
        debug_parser,
    } = Input::parse();

    let options = ReplOptions {
        prompt,
        strict,
        debug_lexer,
        debug_parser,
    };

    repl::run(
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        &options,
    )
    .into_diagnostic()
    .wrap_err("failed to read from stdin or write to stdout")
}
