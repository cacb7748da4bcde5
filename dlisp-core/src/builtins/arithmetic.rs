// dlisp-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /
//!
//! ## Integer Overflow Behaviour
//!
//! Integers are 64-bit and never promote. Every operation is checked and
//! returns an error on overflow, including `(- i64::MIN)` and
//! `(/ i64::MIN -1)`. Division truncates toward zero.

use dlisp_parser::DlispVal;

use crate::error::{Error, Result};

use super::expect_int;

/// Fold `args` left to right with a checked operation.
fn fold_checked(
    name: &'static str,
    init: i64,
    args: &[DlispVal],
    op: fn(i64, i64) -> Option<i64>,
) -> Result<DlispVal> {
    let mut acc = init;
    for arg in args {
        acc = op(acc, expect_int(name, arg)?).ok_or(Error::Overflow(name))?;
    }
    Ok(DlispVal::int(acc))
}

/// (+ x...) - sum; `(+)` is 0
pub(crate) fn builtin_add(args: &[DlispVal]) -> Result<DlispVal> {
    fold_checked("+", 0, args, i64::checked_add)
}

/// (* x...) - product; `(*)` is 1
pub(crate) fn builtin_mul(args: &[DlispVal]) -> Result<DlispVal> {
    fold_checked("*", 1, args, i64::checked_mul)
}

/// (- x) negates; (- x y...) subtracts left to right
pub(crate) fn builtin_sub(args: &[DlispVal]) -> Result<DlispVal> {
    match args {
        [] => Err(Error::arity_at_least("-", 1, 0)),
        [x] => fold_checked("-", 0, std::slice::from_ref(x), i64::checked_sub),
        [first, rest @ ..] => fold_checked("-", expect_int("-", first)?, rest, i64::checked_sub),
    }
}

/// (/ x) is 1/x; (/ x y...) divides left to right
pub(crate) fn builtin_div(args: &[DlispVal]) -> Result<DlispVal> {
    let (mut acc, divisors) = match args {
        [] => return Err(Error::arity_at_least("/", 1, 0)),
        [x] => (1, std::slice::from_ref(x)),
        [first, rest @ ..] => (expect_int("/", first)?, rest),
    };
    for arg in divisors {
        let d = expect_int("/", arg)?;
        if d == 0 {
            return Err(Error::DivisionByZero);
        }
        acc = acc.checked_div(d).ok_or(Error::Overflow("/"))?;
    }
    Ok(DlispVal::int(acc))
}
