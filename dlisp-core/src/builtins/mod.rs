// dlisp-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for dlisp.
//!
//! Every primitive has the signature `fn(&[DlispVal]) -> Result<DlispVal>`
//! and receives already-evaluated arguments.

mod arithmetic;
mod atoms;
mod comparison;
mod exceptions;
mod higher_order;
mod predicates;
mod sequences;
mod strings;

use dlisp_parser::{DlispVal, Symbol, Vector};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::make_native_fn;

use arithmetic::{builtin_add, builtin_div, builtin_mul, builtin_sub};
use atoms::{builtin_atom, builtin_deref, builtin_reset, builtin_swap};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt};
use exceptions::builtin_throw;
use higher_order::{builtin_apply, builtin_map};
use predicates::{
    builtin_atom_p, builtin_false_p, builtin_fn_p, builtin_keyword_p, builtin_list_p,
    builtin_macro_p, builtin_map_p, builtin_nil_p, builtin_number_p, builtin_string_p,
    builtin_symbol_p, builtin_true_p, builtin_vector_p,
};
use sequences::{
    builtin_concat, builtin_cons, builtin_count, builtin_empty_p, builtin_first,
    builtin_hash_map, builtin_list, builtin_nth, builtin_rest, builtin_vec, builtin_vector,
};
use strings::{
    builtin_keyword, builtin_pr_str, builtin_println, builtin_prn, builtin_read_string,
    builtin_slurp, builtin_str, builtin_symbol,
};

/// Register all built-in functions in the given environment.
pub fn register_builtins(env: &Env) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native("<", builtin_lt);
    env.define_native(">", builtin_gt);
    env.define_native("<=", builtin_le);
    env.define_native(">=", builtin_ge);

    // Sequences
    env.define_native("list", builtin_list);
    env.define_native("vector", builtin_vector);
    env.define_native("hash-map", builtin_hash_map);
    env.define_native("empty?", builtin_empty_p);
    env.define_native("count", builtin_count);
    env.define_native("cons", builtin_cons);
    env.define_native("concat", builtin_concat);
    env.define_native("vec", builtin_vec);
    env.define_native("nth", builtin_nth);
    env.define_native("first", builtin_first);
    env.define_native("rest", builtin_rest);

    // Predicates
    env.define_native("nil?", builtin_nil_p);
    env.define_native("true?", builtin_true_p);
    env.define_native("false?", builtin_false_p);
    env.define_native("symbol?", builtin_symbol_p);
    env.define_native("keyword?", builtin_keyword_p);
    env.define_native("string?", builtin_string_p);
    env.define_native("number?", builtin_number_p);
    env.define_native("fn?", builtin_fn_p);
    env.define_native("macro?", builtin_macro_p);
    env.define_native("atom?", builtin_atom_p);
    env.define_native("list?", builtin_list_p);
    env.define_native("vector?", builtin_vector_p);
    env.define_native("map?", builtin_map_p);

    // Strings and I/O
    env.define_native("symbol", builtin_symbol);
    env.define_native("keyword", builtin_keyword);
    env.define_native("pr-str", builtin_pr_str);
    env.define_native("str", builtin_str);
    env.define_native("prn", builtin_prn);
    env.define_native("println", builtin_println);
    env.define_native("read-string", builtin_read_string);
    env.define_native("slurp", builtin_slurp);

    // Atoms
    env.define_native("atom", builtin_atom);
    env.define_native("deref", builtin_deref);
    env.define_native("reset!", builtin_reset);
    env.define_native("swap!", builtin_swap);

    // Control
    env.define_native("throw", builtin_throw);
    env.define_native("apply", builtin_apply);
    env.define_native("map", builtin_map);
}

/// Helper trait to define native functions more easily.
pub trait EnvExt {
    fn define_native(&self, name: &'static str, func: fn(&[DlispVal]) -> Result<DlispVal>);
}

impl EnvExt for Env {
    fn define_native(&self, name: &'static str, func: fn(&[DlispVal]) -> Result<DlispVal>) {
        let native = make_native_fn(name, func);
        self.define(Symbol::new(name), DlispVal::NativeFn(native));
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Elements of a list or vector; nil reads as the empty sequence.
pub(crate) fn seq_items(context: &'static str, val: &DlispVal) -> Result<Vector<DlispVal>> {
    match val {
        DlispVal::List(items) | DlispVal::Vector(items) => Ok(items.clone()),
        DlispVal::Nil => Ok(Vector::new()),
        other => Err(Error::type_error_in(context, "list or vector", other.type_name())),
    }
}

pub(crate) fn expect_int(context: &'static str, val: &DlispVal) -> Result<i64> {
    match val {
        DlispVal::Int(n) => Ok(*n),
        other => Err(Error::type_error_in(context, "int", other.type_name())),
    }
}

pub(crate) fn expect_str<'a>(context: &'static str, val: &'a DlispVal) -> Result<&'a str> {
    match val {
        DlispVal::String(s) => Ok(s),
        other => Err(Error::type_error_in(context, "string", other.type_name())),
    }
}
