// dlisp-core - Higher-order built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Higher-order functions: apply, map

use dlisp_parser::DlispVal;

use crate::error::{Error, Result, check_arity};
use crate::eval::apply;

use super::seq_items;

/// (apply f args... coll) - call `f` with `args` followed by the elements
/// of `coll`
pub(crate) fn builtin_apply(args: &[DlispVal]) -> Result<DlispVal> {
    let [func, middle @ .., last] = args else {
        return Err(Error::arity_at_least("apply", 2, args.len()));
    };
    let mut call_args = middle.to_vec();
    call_args.extend(seq_items("apply", last)?);
    apply(func, &call_args)
}

/// (map f coll) - a list of `f` applied to each element
pub(crate) fn builtin_map(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("map", args, 2)?;
    let mapped = seq_items("map", &args[1])?
        .iter()
        .map(|item| apply(&args[0], std::slice::from_ref(item)))
        .collect::<Result<Vec<_>>>()?;
    Ok(DlispVal::list(mapped))
}
