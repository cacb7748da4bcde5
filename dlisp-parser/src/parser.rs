// dlisp-parser - Parser for dlisp
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent parser for dlisp source code.
//!
//! Converts tokens into `DlispVal` trees. Reader macros are desugared here,
//! so `'x` reads as `(quote x)` and `@a` as `(deref a)`.

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token};
use crate::stack::ensure_sufficient_stack;
use crate::value::DlispVal;

/// The parser converts tokens into `DlispVal` AST nodes.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Parser {
            line: lexer.line(),
            column: lexer.column(),
            lexer,
            current,
        })
    }

    /// Parse a single form from the source.
    /// Returns None if at end of input.
    pub fn parse(&mut self) -> Result<Option<DlispVal>, ParseError> {
        if matches!(self.current, Token::Eof) {
            return Ok(None);
        }
        let val = self.parse_form()?;
        Ok(Some(val))
    }

    /// Parse all forms from the source.
    pub fn parse_all(&mut self) -> Result<Vec<DlispVal>, ParseError> {
        let mut forms = Vec::new();
        while let Some(form) = self.parse()? {
            forms.push(form);
        }
        Ok(forms)
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn advance(&mut self) -> Result<Token, ParseError> {
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line, self.column)
    }

    fn parse_form(&mut self) -> Result<DlispVal, ParseError> {
        ensure_sufficient_stack(|| self.parse_form_inner())
    }

    fn parse_form_inner(&mut self) -> Result<DlispVal, ParseError> {
        match self.advance()? {
            Token::LParen => self.parse_seq(&Token::RParen).map(DlispVal::list),
            Token::LBracket => self.parse_seq(&Token::RBracket).map(DlispVal::vector),
            // A map reads exactly like a list and is then tagged.
            Token::LBrace => self.parse_seq(&Token::RBrace).map(DlispVal::hash_map),

            Token::Quote => self.parse_reader_macro("quote"),
            Token::Quasiquote => self.parse_reader_macro("quasiquote"),
            Token::Unquote => self.parse_reader_macro("unquote"),
            Token::SpliceUnquote => self.parse_reader_macro("splice-unquote"),
            Token::Deref => self.parse_reader_macro("deref"),

            Token::String(s) => Ok(DlispVal::string(s)),
            Token::Bare(text) => self.classify_atom(&text),

            Token::RParen => Err(self.error(ParseErrorKind::UnexpectedDelimiter(')'))),
            Token::RBracket => Err(self.error(ParseErrorKind::UnexpectedDelimiter(']'))),
            Token::RBrace => Err(self.error(ParseErrorKind::UnexpectedDelimiter('}'))),
            Token::Eof => Err(self.error(ParseErrorKind::UnbalancedInput)),
        }
    }

    /// Read forms up to `close`; the opener has already been consumed.
    fn parse_seq(&mut self, close: &Token) -> Result<Vec<DlispVal>, ParseError> {
        let mut elements = Vec::new();

        while &self.current != close {
            if matches!(self.current, Token::Eof) {
                return Err(self.error(ParseErrorKind::UnbalancedInput));
            }
            elements.push(self.parse_form()?);
        }

        self.advance()?; // consume the closer
        Ok(elements)
    }

    /// `'x` and friends; the prefix has already been consumed.
    fn parse_reader_macro(&mut self, name: &str) -> Result<DlispVal, ParseError> {
        let form = self.parse_form()?;
        Ok(DlispVal::list(vec![DlispVal::symbol(name), form]))
    }

    /// Classify a bare token: integer, boolean, nil, keyword, then symbol.
    fn classify_atom(&self, text: &str) -> Result<DlispVal, ParseError> {
        if is_integer_literal(text) {
            return text
                .parse::<i64>()
                .map(DlispVal::int)
                .map_err(|_| self.error(ParseErrorKind::IntegerOutOfRange(text.to_string())));
        }
        Ok(match text {
            "true" => DlispVal::bool(true),
            "false" => DlispVal::bool(false),
            "nil" => DlispVal::nil(),
            _ => match text.strip_prefix(':') {
                Some(name) => DlispVal::keyword(name),
                None => DlispVal::symbol(text),
            },
        })
    }
}

/// Matches `-?[0-9]+`.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Read the first form of `source`; empty (or comment-only) input reads as nil.
pub fn read_str(source: &str) -> Result<DlispVal, ParseError> {
    let mut parser = Parser::new(source)?;
    Ok(parser.parse()?.unwrap_or(DlispVal::Nil))
}

/// Read every form in `source`.
pub fn read_all(source: &str) -> Result<Vec<DlispVal>, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_all()
}
