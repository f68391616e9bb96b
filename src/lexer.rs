use crate::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// Single-pass scanner over one line of input.
///
/// Yields every token of the line followed by exactly one
/// [`TokenKind::EndOfInput`]. The first unrecognised character produces a
/// [`LexError`] and ends the iteration; nothing after it is scanned.
pub struct Lexer<'source> {
    source: &'source str,
    rest: &'source str,
    position: usize,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            finished: false,
        }
    }
}

macro_rules! token {
    ($kind:ident, $start:ident, $self:ident) => {{
        let token = Token {
            kind: TokenKind::$kind,
            lexeme: &$self.source[$start..$self.position],
            span: Span::new($start, $self.position),
        };
        log::trace!("scanned {:?} `{}`", token.kind, token.lexeme);
        return Some(Ok(token));
    }};
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token<'source>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let mut chars = self.rest.chars();
            let Some(c) = chars.next() else {
                self.finished = true;
                return Some(Ok(Token {
                    kind: TokenKind::EndOfInput,
                    lexeme: "",
                    span: Span::new(self.position, self.position),
                }));
            };
            let c_start = self.position;

            self.rest = chars.as_str();
            self.position += c.len_utf8();

            match c {
                '+' => token!(Plus, c_start, self),
                '-' => token!(Minus, c_start, self),
                '*' => token!(Star, c_start, self),
                '/' => token!(Slash, c_start, self),

                '0'..='9' => {
                    self.eat_number();
                    token!(Number, c_start, self)
                }

                c if c.is_whitespace() => continue,

                _ => {
                    self.finished = true;
                    let column = self.source[..c_start].chars().count();
                    log::trace!("unexpected character {c:?} at column {column}");
                    return Some(Err(LexError {
                        character: c,
                        column,
                        span: (c_start..self.position).into(),
                    }));
                }
            }
        }
    }
}

impl<'source> Lexer<'source> {
    /// Consumes the remainder of a number literal whose first digit has
    /// already been taken: `digit* ('.' digit*)? ('e' ('+'|'-')? digit*)?`.
    ///
    /// Digits after `.` and `e` are optional, so `1.` and `1e` scan as
    /// numbers; converting such lexemes is left to the parser.
    fn eat_number(&mut self) {
        self.eat_digits();

        if self.rest.starts_with('.') {
            self.advance(1);
            self.eat_digits();
        }

        if self.rest.starts_with('e') {
            self.advance(1);
            if self.rest.starts_with(|c: char| c == '+' || c == '-') {
                self.advance(1);
            }
            self.eat_digits();
        }
    }

    fn eat_digits(&mut self) {
        let digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        self.advance(digits);
    }

    // Only ever called with ASCII lengths, so this stays on a char boundary.
    fn advance(&mut self, bytes: usize) {
        self.position += bytes;
        self.rest = &self.rest[bytes..];
    }
}

/// Tokenizes a whole line. On error the tokens scanned so far are dropped.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    log::debug!("scanned {} tokens", tokens.len());
    Ok(tokens)
}
