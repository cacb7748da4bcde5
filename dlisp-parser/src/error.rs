// dlisp-parser - Reader errors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Errors produced while tokenising or parsing source text.

use thiserror::Error;

/// What went wrong while reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A string literal has no closing quote
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Input ended while a form was still required (missing `)`, `]`, `}`
    /// or a reader macro with nothing after it)
    #[error("unbalanced input: unexpected end of input")]
    UnbalancedInput,
    /// A closing delimiter with no matching opener
    #[error("unexpected '{0}'")]
    UnexpectedDelimiter(char),
    /// Unsupported backslash escape inside a string literal
    #[error("unknown escape sequence: \\{0}")]
    InvalidEscape(char),
    /// Integer literal that does not fit in 64 bits
    #[error("integer literal out of range: {0}")]
    IntegerOutOfRange(String),
}

/// A reader error with the position where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error at {line}:{column}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        ParseError { kind, line, column }
    }
}
