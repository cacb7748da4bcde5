// dlisp-parser - Reader, value model and printer for dlisp
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # dlisp-parser
//!
//! The data half of dlisp: the tagged value model, the reader that turns
//! source text into values, and the printer that turns values back into text.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod stack;
pub mod symbol;
pub mod value;

pub use error::{ParseError, ParseErrorKind};
pub use im::Vector;
pub use lexer::{Lexer, Token};
pub use parser::{Parser, read_all, read_str};
pub use printer::{pr_seq, pr_str};
pub use stack::ensure_sufficient_stack;
pub use symbol::Symbol;
pub use value::{DlispAtom, DlispFn, DlispNativeFn, DlispVal};
