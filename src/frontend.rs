/// The token table and generated lexer.
///
/// Declares [`TokenKind`](lexer::TokenKind), the closed set of token kinds,
/// and the patterns that recognise each of them in source text: punctuation,
/// one- and two-character operators, literals, identifiers and keywords, plus
/// the whitespace and comments that are skipped.
///
/// # Responsibilities
/// - Recognises the longest lexeme at the current position.
/// - Skips whitespace, line comments and non-nesting block comments.
/// - Flags unexpected characters and unterminated strings.
pub mod lexer;
/// Drives the lexer over a whole source string.
///
/// The scanner is the public entry point of the front end. It attaches line
/// numbers and literal values to what the lexer recognises, reports lexical
/// errors without stopping, and always terminates the sequence with an end of
/// input token.
///
/// # Responsibilities
/// - Produces the ordered token sequence for one source string.
/// - Tracks 1-based line numbers, including newlines inside strings and
///   comments.
/// - Routes lexical errors to a [`Reporter`](crate::error::Reporter).
pub mod scanner;
/// Tokens and their literal values.
///
/// A token is the immutable record of one lexical unit: its kind, its exact
/// source text, its literal value if it has one, and the line it starts on.
pub mod token;
