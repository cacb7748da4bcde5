// dlisp-core - String and I/O built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! String and I/O operations: str, pr-str, prn, println, read-string,
//! slurp, symbol, keyword
//!
//! `pr-str` and `prn` render readably (strings quoted and escaped);
//! `str` and `println` render for display (strings raw).

use dlisp_parser::{DlispVal, pr_seq, read_str};

use crate::error::{Error, Result, check_arity};

use super::expect_str;

// ============================================================================
// Printing
// ============================================================================

/// (pr-str x...) - readable forms joined by spaces
pub(crate) fn builtin_pr_str(args: &[DlispVal]) -> Result<DlispVal> {
    Ok(DlispVal::string(pr_seq(args.iter(), true, " ")))
}

/// (str x...) - display forms concatenated
pub(crate) fn builtin_str(args: &[DlispVal]) -> Result<DlispVal> {
    Ok(DlispVal::string(pr_seq(args.iter(), false, "")))
}

/// (prn x...) - print readable forms and a newline, return nil
pub(crate) fn builtin_prn(args: &[DlispVal]) -> Result<DlispVal> {
    println!("{}", pr_seq(args.iter(), true, " "));
    Ok(DlispVal::Nil)
}

/// (println x...) - print display forms and a newline, return nil
pub(crate) fn builtin_println(args: &[DlispVal]) -> Result<DlispVal> {
    println!("{}", pr_seq(args.iter(), false, " "));
    Ok(DlispVal::Nil)
}

// ============================================================================
// Reading
// ============================================================================

/// (read-string s) - the first form in `s`, unevaluated
pub(crate) fn builtin_read_string(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("read-string", args, 1)?;
    let source = expect_str("read-string", &args[0])?;
    Ok(read_str(source)?)
}

/// (slurp path) - file contents as a string
pub(crate) fn builtin_slurp(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("slurp", args, 1)?;
    let path = expect_str("slurp", &args[0])?;
    std::fs::read_to_string(path)
        .map(DlispVal::string)
        .map_err(|e| Error::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
}

// ============================================================================
// Names
// ============================================================================

/// (symbol name)
pub(crate) fn builtin_symbol(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("symbol", args, 1)?;
    match &args[0] {
        DlispVal::Symbol(_) => Ok(args[0].clone()),
        other => Ok(DlispVal::symbol(expect_str("symbol", other)?)),
    }
}

/// (keyword name) - `name` is given without the leading colon
pub(crate) fn builtin_keyword(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("keyword", args, 1)?;
    match &args[0] {
        DlispVal::Keyword(_) => Ok(args[0].clone()),
        other => Ok(DlispVal::keyword(expect_str("keyword", other)?)),
    }
}
