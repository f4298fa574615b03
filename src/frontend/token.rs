use std::fmt;

use crate::frontend::lexer::TokenKind;

/// The value a literal token stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The value of a [`TokenKind::Number`] token.
    Number(f64),
    /// The contents of a [`TokenKind::String`] token, without the quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A classified, positioned piece of source text.
///
/// Tokens are created by the scanner once a lexeme has been fully recognised
/// and are not changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the lexeme was classified as.
    pub kind:    TokenKind,
    /// The exact source text of the token. Empty for [`TokenKind::Eof`].
    pub lexeme:  String,
    /// The literal value for number and string tokens.
    pub literal: Option<Literal>,
    /// The 1-based line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: Option<Literal>,
               line: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line }
    }

    /// Creates a token that carries no literal value, such as an operator.
    ///
    /// # Example
    /// ```
    /// use loxide::frontend::{lexer::TokenKind, token::Token};
    ///
    /// let minus = Token::symbol(TokenKind::Minus, "-", 1);
    /// assert_eq!(minus.to_string(), "MINUS - ");
    /// ```
    #[must_use]
    pub fn symbol(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self::new(kind, lexeme, None, line)
    }

    /// Creates the end-of-input marker for `line`.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }
}

/// Renders `<KIND> <lexeme> <literal>`, with an empty literal part when the
/// token has none.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}
