use logos::{Lexer, Logos};
use tracing::{debug, trace};

use crate::{
    error::{Reporter, ScanError, ScanErrorKind},
    frontend::{
        lexer::TokenKind,
        token::{Literal, Token},
    },
};

/// Scans `source` into tokens, reporting lexical errors to `reporter`.
///
/// Shorthand for `Scanner::new(source).scan_tokens(reporter)`.
///
/// # Example
/// ```
/// use loxide::{
///     error::Diagnostics,
///     frontend::{lexer::TokenKind, scanner::scan},
/// };
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = scan("var answer = 42;", &mut diagnostics);
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}

/// Turns one source string into a sequence of tokens.
///
/// The scanner walks the source once, left to right. Recognition of each
/// lexeme is delegated to the [`TokenKind`] lexer; the scanner attaches line
/// numbers and literal values, reports errors and appends the final
/// [`TokenKind::Eof`] token.
///
/// A scanner is consumed by [`Scanner::scan_tokens`], so every input gets a
/// fresh one.
pub struct Scanner<'src> {
    source:  &'src str,
    lexer:   Lexer<'src, TokenKind>,
    /// Line number at byte offset `counted`.
    line:    usize,
    counted: usize,
    tokens:  Vec<Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: TokenKind::lexer(source),
               line: 1,
               counted: 0,
               tokens: Vec::new() }
    }

    /// Scans the whole source.
    ///
    /// Lexical errors are passed to `reporter` with an empty location and
    /// scanning resumes right after the offending text, so a single pass
    /// finds every error. The returned sequence always ends with an
    /// [`TokenKind::Eof`] token carrying the last line number.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = self.source.len()))]
    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> Vec<Token> {
        let mut errors = 0_usize;

        while let Some(next) = self.lexer.next() {
            let span = self.lexer.span();
            let lexeme = self.lexer.slice();

            match next {
                Ok(kind) => {
                    let line = self.line_at(span.start);
                    trace!(%kind, lexeme, line, "token");
                    self.tokens.push(Token::new(kind, lexeme, literal(kind, lexeme), line));
                },
                Err(kind) => {
                    // An unterminated string swallows the rest of the input and
                    // is reported where the input ends.
                    let offset = match kind {
                        ScanErrorKind::UnexpectedCharacter => span.start,
                        ScanErrorKind::UnterminatedString => span.end,
                    };
                    let error = ScanError::new(kind, self.line_at(offset), lexeme);
                    debug!(%error, line = error.line, lexeme = %error.lexeme, "lexical error");
                    reporter.error(error.line, &error.to_string());
                    errors += 1;
                },
            }
        }

        let line = self.line_at(self.source.len());
        self.tokens.push(Token::eof(line));
        debug!(tokens = self.tokens.len(), errors, "scan finished");

        self.tokens
    }

    /// Returns the line number at byte `offset`.
    ///
    /// Offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.source[self.counted..offset].bytes()
                                                      .filter(|&b| b == b'\n')
                                                      .count();
        self.counted = offset;
        self.line
    }
}

/// Extracts the literal value carried by number and string lexemes.
fn literal(kind: TokenKind, lexeme: &str) -> Option<Literal> {
    match kind {
        TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
        TokenKind::String => lexeme.strip_prefix('"')
                                   .and_then(|rest| rest.strip_suffix('"'))
                                   .map(|contents| Literal::String(contents.to_string())),
        _ => None,
    }
}
