// dlisp-core - Sequence built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence operations: list, vector, hash-map, count, empty?, cons, concat,
//! vec, nth, first, rest
//!
//! Sequence functions accept lists, vectors and nil (as the empty sequence).
//! `cons`, `concat` and `rest` always return lists.

use dlisp_parser::{DlispVal, Vector};

use crate::error::{Error, Result, check_arity};

use super::{expect_int, seq_items};

// ============================================================================
// Constructors
// ============================================================================

pub(crate) fn builtin_list(args: &[DlispVal]) -> Result<DlispVal> {
    Ok(DlispVal::list(args.to_vec()))
}

pub(crate) fn builtin_vector(args: &[DlispVal]) -> Result<DlispVal> {
    Ok(DlispVal::vector(args.to_vec()))
}

/// (hash-map k v ...) - keys and values alternate
pub(crate) fn builtin_hash_map(args: &[DlispVal]) -> Result<DlispVal> {
    if args.len() % 2 != 0 {
        return Err(Error::form(
            "hash-map",
            "requires an even number of arguments",
        ));
    }
    Ok(DlispVal::hash_map(args.to_vec()))
}

/// (vec coll) - a vector with the elements of `coll`
pub(crate) fn builtin_vec(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("vec", args, 1)?;
    Ok(DlispVal::Vector(seq_items("vec", &args[0])?))
}

// ============================================================================
// Inspection
// ============================================================================

/// (count coll) - elements in a sequence, entries in a map, chars in a string
pub(crate) fn builtin_count(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("count", args, 1)?;
    let n = match &args[0] {
        DlispVal::Nil => 0,
        DlispVal::List(items) | DlispVal::Vector(items) => items.len(),
        DlispVal::HashMap(items) => items.len() / 2,
        DlispVal::String(s) => s.chars().count(),
        other => {
            return Err(Error::type_error_in(
                "count",
                "collection",
                other.type_name(),
            ));
        }
    };
    Ok(DlispVal::int(n as i64))
}

pub(crate) fn builtin_empty_p(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("empty?", args, 1)?;
    let empty = match &args[0] {
        DlispVal::Nil => true,
        DlispVal::List(items) | DlispVal::Vector(items) | DlispVal::HashMap(items) => {
            items.is_empty()
        }
        DlispVal::String(s) => s.is_empty(),
        other => {
            return Err(Error::type_error_in(
                "empty?",
                "collection",
                other.type_name(),
            ));
        }
    };
    Ok(DlispVal::bool(empty))
}

/// (nth coll index)
pub(crate) fn builtin_nth(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("nth", args, 2)?;
    let items = seq_items("nth", &args[0])?;
    let index = expect_int("nth", &args[1])?;
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i).cloned())
        .ok_or(Error::IndexOutOfRange {
            index,
            length: items.len(),
        })
}

/// (first coll) - nil for an empty sequence
pub(crate) fn builtin_first(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("first", args, 1)?;
    Ok(seq_items("first", &args[0])?
        .front()
        .cloned()
        .unwrap_or(DlispVal::Nil))
}

/// (rest coll) - everything after the first element, as a list
pub(crate) fn builtin_rest(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("rest", args, 1)?;
    let items = seq_items("rest", &args[0])?;
    if items.is_empty() {
        return Ok(DlispVal::empty_list());
    }
    Ok(DlispVal::List(items.skip(1)))
}

// ============================================================================
// Building
// ============================================================================

/// (cons x coll) - a list with `x` in front of the elements of `coll`
pub(crate) fn builtin_cons(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("cons", args, 2)?;
    let mut items = seq_items("cons", &args[1])?;
    items.push_front(args[0].clone());
    Ok(DlispVal::List(items))
}

/// (concat coll...) - one list holding every element of every argument
pub(crate) fn builtin_concat(args: &[DlispVal]) -> Result<DlispVal> {
    let mut items = Vector::new();
    for arg in args {
        items.append(seq_items("concat", arg)?);
    }
    Ok(DlispVal::List(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(ns: &[i64]) -> Vec<DlispVal> {
        ns.iter().copied().map(DlispVal::int).collect()
    }

    #[test]
    fn test_count() {
        assert_eq!(builtin_count(&[DlispVal::Nil]).unwrap(), DlispVal::int(0));
        assert_eq!(
            builtin_count(&[DlispVal::list(ints(&[1, 2, 3]))]).unwrap(),
            DlispVal::int(3)
        );
        assert_eq!(
            builtin_count(&[DlispVal::hash_map(ints(&[1, 2]))]).unwrap(),
            DlispVal::int(1)
        );
        assert!(builtin_count(&[DlispVal::int(1)]).is_err());
    }

    #[test]
    fn test_empty_p() {
        assert_eq!(
            builtin_empty_p(&[DlispVal::empty_list()]).unwrap(),
            DlispVal::bool(true)
        );
        assert_eq!(
            builtin_empty_p(&[DlispVal::vector(ints(&[1]))]).unwrap(),
            DlispVal::bool(false)
        );
    }

    #[test]
    fn test_cons_onto_vector_gives_list() {
        let result = builtin_cons(&[DlispVal::int(0), DlispVal::vector(ints(&[1, 2]))]).unwrap();
        assert!(matches!(result, DlispVal::List(_)));
        assert_eq!(result, DlispVal::list(ints(&[0, 1, 2])));
        assert_eq!(
            builtin_cons(&[DlispVal::int(0), DlispVal::Nil]).unwrap(),
            DlispVal::list(ints(&[0]))
        );
    }

    #[test]
    fn test_concat() {
        let result = builtin_concat(&[
            DlispVal::list(ints(&[1, 2])),
            DlispVal::Nil,
            DlispVal::vector(ints(&[3])),
        ])
        .unwrap();
        assert_eq!(result, DlispVal::list(ints(&[1, 2, 3])));
        assert_eq!(builtin_concat(&[]).unwrap(), DlispVal::empty_list());
    }

    #[test]
    fn test_nth() {
        let seq = DlispVal::list(ints(&[10, 20]));
        assert_eq!(
            builtin_nth(&[seq.clone(), DlispVal::int(1)]).unwrap(),
            DlispVal::int(20)
        );
        assert!(matches!(
            builtin_nth(&[seq.clone(), DlispVal::int(2)]),
            Err(Error::IndexOutOfRange {
                index: 2,
                length: 2
            })
        ));
        assert!(matches!(
            builtin_nth(&[seq, DlispVal::int(-1)]),
            Err(Error::IndexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn test_first_and_rest() {
        let seq = DlispVal::vector(ints(&[1, 2, 3]));
        assert_eq!(builtin_first(&[seq.clone()]).unwrap(), DlispVal::int(1));
        let rest = builtin_rest(&[seq]).unwrap();
        assert!(matches!(rest, DlispVal::List(_)));
        assert_eq!(rest, DlispVal::list(ints(&[2, 3])));
        assert_eq!(builtin_first(&[DlispVal::Nil]).unwrap(), DlispVal::Nil);
        assert_eq!(builtin_rest(&[DlispVal::Nil]).unwrap(), DlispVal::empty_list());
    }

    #[test]
    fn test_vec_and_hash_map() {
        let v = builtin_vec(&[DlispVal::list(ints(&[1]))]).unwrap();
        assert!(matches!(v, DlispVal::Vector(_)));
        assert!(builtin_hash_map(&ints(&[1])).is_err());
    }
}
