// dlisp-core - Error types for the dlisp evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for dlisp evaluation.

use std::fmt;

use dlisp_parser::{DlispVal, ParseError, Symbol};
use thiserror::Error;

/// Result type for dlisp evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Reader failure (from `read-string` or a host `read`)
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// No frame in the environment chain binds the name
    #[error("'{name}' not found")]
    NotFound { name: Symbol },
    /// Wrong number of arguments to a function
    #[error("{}", format_arity(.name, .expected, .got))]
    Arity {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// Sequence access outside its bounds
    #[error("index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: i64, length: usize },
    /// Wrong type for an operation
    #[error("{context}: expected {expected}, got {got}")]
    Type {
        expected: &'static str,
        got: &'static str,
        context: String,
    },
    /// Attempted to call something that isn't callable
    #[error("cannot call value: {0}")]
    NotCallable(String),
    /// Malformed special form
    #[error("invalid '{form}' form: {message}")]
    InvalidForm { form: &'static str, message: String },
    /// Division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Checked integer arithmetic overflowed
    #[error("integer overflow in '{0}'")]
    Overflow(&'static str),
    /// File access failure
    #[error("cannot read '{path}': {message}")]
    Io { path: String, message: String },
    /// Value raised by `throw`
    #[error("{}", dlisp_parser::pr_str(.0, true))]
    Thrown(DlispVal),
    /// Non-tail recursion went past the configured depth limit
    #[error("maximum evaluation depth ({0}) exceeded")]
    StackDepthExceeded(usize),
    /// Broken interpreter invariant (a mis-typed erased payload)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Specification for expected arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

fn format_arity(name: &Option<String>, expected: &AritySpec, got: &usize) -> String {
    match name {
        Some(name) => format!(
            "wrong number of arguments to '{}': expected {}, got {}",
            name, expected, got
        ),
        None => format!(
            "wrong number of arguments: expected {}, got {}",
            expected, got
        ),
    }
}

impl Error {
    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::Arity {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::Arity {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::Type {
            expected,
            got,
            context: context.into(),
        }
    }

    /// Create an invalid special form error.
    pub fn form(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidForm {
            form,
            message: message.into(),
        }
    }

    /// The value a `catch*` handler sees for this error: the thrown value
    /// itself, or the error message as a string.
    pub fn to_value(&self) -> DlispVal {
        match self {
            Error::Thrown(val) => val.clone(),
            other => DlispVal::string(other.to_string()),
        }
    }
}

/// Check that a native function received exactly `expected` arguments.
pub fn check_arity(name: &'static str, args: &[DlispVal], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::arity_named(name, expected, args.len()))
    }
}
