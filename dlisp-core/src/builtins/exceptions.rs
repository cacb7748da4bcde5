// dlisp-core - Exception built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use dlisp_parser::DlispVal;

use crate::error::{Error, Result, check_arity};

/// (throw value) - raise `value` as an error, catchable by `try*`
pub(crate) fn builtin_throw(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("throw", args, 1)?;
    Err(Error::Thrown(args[0].clone()))
}
