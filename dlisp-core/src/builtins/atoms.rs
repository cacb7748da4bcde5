// dlisp-core - Atom built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Atom operations: atom, deref, reset!, swap!

use dlisp_parser::{DlispAtom, DlispVal};

use crate::error::{Error, Result, check_arity};
use crate::eval::apply;

fn expect_atom<'a>(context: &'static str, val: &'a DlispVal) -> Result<&'a DlispAtom> {
    match val {
        DlispVal::Atom(a) => Ok(a),
        other => Err(Error::type_error_in(context, "atom", other.type_name())),
    }
}

/// (atom x) - Create an atom with initial value x
pub(crate) fn builtin_atom(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("atom", args, 1)?;
    Ok(DlispVal::atom(args[0].clone()))
}

/// (deref atom) - also written `@atom`
pub(crate) fn builtin_deref(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("deref", args, 1)?;
    Ok(expect_atom("deref", &args[0])?.deref())
}

/// (reset! atom newval) - Set atom value, returns newval
pub(crate) fn builtin_reset(args: &[DlispVal]) -> Result<DlispVal> {
    check_arity("reset!", args, 2)?;
    Ok(expect_atom("reset!", &args[0])?.reset(args[1].clone()))
}

/// (swap! atom f args...) - store and return (f current args...)
///
/// The atom is left unchanged if `f` fails.
pub(crate) fn builtin_swap(args: &[DlispVal]) -> Result<DlispVal> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("swap!", 2, args.len()));
    }
    let atom = expect_atom("swap!", &args[0])?;

    let mut call_args = Vec::with_capacity(args.len() - 1);
    call_args.push(atom.deref());
    call_args.extend(args[2..].iter().cloned());

    let new_val = apply(&args[1], &call_args)?;
    Ok(atom.reset(new_val))
}
