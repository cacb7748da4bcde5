// dlisp-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for dlisp integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate code in a fresh interpreter
//! - [`eval_all`] - Evaluate code in an existing interpreter
//! - [`eval_err`] - Evaluate code that must fail, returning the error
//! - [`print_str`] - Evaluate code and render the result readably
//! - [`new_interp`] - Create a new interpreter (primitives and prelude)
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err!`] - Assert that code produces an error
//! - [`assert_prints!`] - Assert the readable rendering of a result

#[allow(unused_imports)]
pub use dlisp_core::{Error, Interpreter};
#[allow(unused_imports)]
pub use dlisp_parser::{DlispVal, ParseErrorKind};

/// Create a new interpreter with primitives and the prelude.
///
/// # Panics
///
/// Panics if the prelude fails to load (should never happen).
#[must_use]
pub fn new_interp() -> Interpreter {
    Interpreter::new().expect("Failed to load prelude")
}

/// Evaluate every form of `s` in a fresh interpreter, returning the last.
#[allow(dead_code)]
pub fn eval_str(s: &str) -> Result<DlispVal, Error> {
    new_interp().eval_str(s)
}

/// Evaluate every form of `s` in `interp`, returning the last.
#[allow(dead_code)]
pub fn eval_all(s: &str, interp: &Interpreter) -> Result<DlispVal, Error> {
    interp.eval_str(s)
}

/// Evaluate `s`, which must fail, and return the error.
///
/// # Panics
///
/// Panics if evaluation succeeds.
#[allow(dead_code)]
pub fn eval_err(s: &str) -> Error {
    match eval_str(s) {
        Ok(val) => panic!("Expected error for '{}' but got {}", s, val),
        Err(e) => e,
    }
}

/// Evaluate `s` and print the result readably.
///
/// # Panics
///
/// Panics if evaluation fails.
#[allow(dead_code)]
pub fn print_str(s: &str) -> String {
    match new_interp().rep(s) {
        Ok(out) => out,
        Err(e) => panic!("Failed to evaluate '{}': {}", s, e),
    }
}

/// Assert that evaluating `input` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", DlispVal::int(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error, optionally matching a
/// pattern.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(+ 1 :k)");
/// assert_eval_err!("(nth (list) 0)", Error::IndexOutOfRange { .. });
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
    ($input:expr, $pat:pat) => {
        let err = $crate::common::eval_err($input);
        assert!(
            matches!(err, $pat),
            "Error for '{}' did not match: {:?}",
            $input,
            err
        );
    };
}

/// Assert the readable rendering of evaluating `input`.
///
/// # Example
///
/// ```ignore
/// assert_prints!("(list 1 \"a\")", "(1 \"a\")");
/// ```
#[macro_export]
macro_rules! assert_prints {
    ($input:expr, $expected:expr) => {
        assert_eq!(
            $crate::common::print_str($input),
            $expected,
            "Printed result of '{}' did not match expected",
            $input
        );
    };
}
