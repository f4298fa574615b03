use std::fmt;

use logos::Logos;

use crate::error::ScanErrorKind;

/// The kind of a lexical token.
///
/// The enum doubles as the token table of the generated lexer: every variant
/// that carries a `#[token]` or `#[regex]` attribute is recognised directly
/// from source text, always preferring the longest possible match. Keywords
/// are exact, case-sensitive matches that win over [`TokenKind::Identifier`]
/// only when the whole word matches, so `forest` stays an identifier.
///
/// Whitespace, newlines, `//` line comments and `/* */` block comments are
/// skipped. Block comments end at the first `*/` (they do not nest) or at the
/// end of input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = ScanErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    ///
    /// `/*` opens a block comment, which is skipped, so it never yields this
    /// kind.
    #[token("/")]
    #[token("/*", block_comment)]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Names such as `x` or `_count1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literals. They may span several lines and have no escapes.
    #[regex(r#""[^"]*""#)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    String,
    /// Number literals such as `42` or `3.14`. A trailing `.` is not part of
    /// the number.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// End of input. Never produced by the lexer itself; the scanner appends
    /// it once the source is exhausted.
    Eof,
}

impl TokenKind {
    /// The upper snake case name used when rendering tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }

    /// Whether this kind is one of the reserved words.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::And
                 | Self::Class
                 | Self::Else
                 | Self::False
                 | Self::Fun
                 | Self::For
                 | Self::If
                 | Self::Nil
                 | Self::Or
                 | Self::Print
                 | Self::Return
                 | Self::Super
                 | Self::This
                 | Self::True
                 | Self::Var
                 | Self::While)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skips a block comment up to and including the first `*/`, or to the end
/// of input when the comment is never closed.
fn block_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let remainder = lex.remainder();
    let end = remainder.find("*/").map_or(remainder.len(), |i| i + 2);
    lex.bump(end);
    logos::Skip
}

/// Rejects a string literal that runs into the end of input.
///
/// The unterminated pattern only ever matches when no closing quote follows,
/// because the terminated pattern is longer whenever one exists.
fn unterminated_string(_: &mut logos::Lexer<TokenKind>) -> Result<(), ScanErrorKind> {
    Err(ScanErrorKind::UnterminatedString)
}
