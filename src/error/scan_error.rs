use thiserror::Error;

/// The lexical faults the scanner can recover from.
///
/// This is also the error type of the generated lexer: any input that matches
/// no token rule produces the [`Default`] variant, `UnexpectedCharacter`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanErrorKind {
    /// An input character matches no token rule.
    #[default]
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// End of input was reached inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error together with the place it was found.
///
/// The scanner never stops on one of these; it hands the error to a
/// [`Reporter`](crate::error::Reporter) and carries on with the rest of the
/// input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ScanError {
    /// What went wrong.
    pub kind:   ScanErrorKind,
    /// The source line the error is reported on.
    pub line:   usize,
    /// The offending source text.
    pub lexeme: String,
}

impl ScanError {
    /// Creates a new error of the given kind.
    #[must_use]
    pub fn new(kind: ScanErrorKind, line: usize, lexeme: impl Into<String>) -> Self {
        Self { kind,
               line,
               lexeme: lexeme.into() }
    }
}
