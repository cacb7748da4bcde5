// dlisp-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: =, <, >, <=, >=

use std::cmp::Ordering;

use dlisp_parser::DlispVal;

use crate::error::{Error, Result};

use super::expect_int;

/// (= x y...) - true if every adjacent pair is structurally equal
pub(crate) fn builtin_eq(args: &[DlispVal]) -> Result<DlispVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least("=", 1, 0));
    }
    Ok(DlispVal::bool(args.windows(2).all(|w| w[0] == w[1])))
}

/// True if `holds` accepts the ordering of every adjacent pair.
fn compare_chain(
    name: &'static str,
    args: &[DlispVal],
    holds: fn(Ordering) -> bool,
) -> Result<DlispVal> {
    if args.is_empty() {
        return Err(Error::arity_at_least(name, 1, 0));
    }
    let nums = args
        .iter()
        .map(|a| expect_int(name, a))
        .collect::<Result<Vec<_>>>()?;
    Ok(DlispVal::bool(
        nums.windows(2).all(|w| holds(w[0].cmp(&w[1]))),
    ))
}

pub(crate) fn builtin_lt(args: &[DlispVal]) -> Result<DlispVal> {
    compare_chain("<", args, Ordering::is_lt)
}

pub(crate) fn builtin_gt(args: &[DlispVal]) -> Result<DlispVal> {
    compare_chain(">", args, Ordering::is_gt)
}

pub(crate) fn builtin_le(args: &[DlispVal]) -> Result<DlispVal> {
    compare_chain("<=", args, Ordering::is_le)
}

pub(crate) fn builtin_ge(args: &[DlispVal]) -> Result<DlispVal> {
    compare_chain(">=", args, Ordering::is_ge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(ns: &[i64]) -> Vec<DlispVal> {
        ns.iter().copied().map(DlispVal::int).collect()
    }

    #[test]
    fn test_ordering_chains() {
        assert_eq!(builtin_lt(&ints(&[1, 2, 3])).unwrap(), DlispVal::bool(true));
        assert_eq!(builtin_lt(&ints(&[1, 3, 2])).unwrap(), DlispVal::bool(false));
        assert_eq!(builtin_le(&ints(&[1, 1, 2])).unwrap(), DlispVal::bool(true));
        assert_eq!(builtin_gt(&ints(&[3, 2])).unwrap(), DlispVal::bool(true));
        assert_eq!(builtin_ge(&ints(&[2, 3])).unwrap(), DlispVal::bool(false));
        assert_eq!(builtin_lt(&ints(&[5])).unwrap(), DlispVal::bool(true));
    }

    #[test]
    fn test_ordering_rejects_non_integers() {
        assert!(builtin_lt(&[DlispVal::int(1), DlispVal::string("a")]).is_err());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = DlispVal::list(ints(&[1, 2]));
        let b = DlispVal::vector(ints(&[1, 2]));
        assert_eq!(builtin_eq(&[a, b]).unwrap(), DlispVal::bool(true));
        assert_eq!(
            builtin_eq(&[DlispVal::int(1), DlispVal::string("1")]).unwrap(),
            DlispVal::bool(false)
        );
        assert_eq!(
            builtin_eq(&[DlispVal::Nil, DlispVal::Nil]).unwrap(),
            DlispVal::bool(true)
        );
    }
}
