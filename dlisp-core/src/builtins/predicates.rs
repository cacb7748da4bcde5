// dlisp-core - Type predicate built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Type predicates: nil?, true?, false?, symbol?, keyword?, string?,
//! number?, fn?, macro?, atom?, list?, vector?, map?

use dlisp_parser::DlispVal;

use crate::error::{Result, check_arity};

/// Define a one-argument predicate over the argument's shape.
macro_rules! predicate {
    ($fn_name:ident, $name:literal, $pat:pat) => {
        pub(crate) fn $fn_name(args: &[DlispVal]) -> Result<DlispVal> {
            check_arity($name, args, 1)?;
            Ok(DlispVal::bool(matches!(args[0], $pat)))
        }
    };
}

predicate!(builtin_nil_p, "nil?", DlispVal::Nil);
predicate!(builtin_true_p, "true?", DlispVal::Bool(true));
predicate!(builtin_false_p, "false?", DlispVal::Bool(false));
predicate!(builtin_symbol_p, "symbol?", DlispVal::Symbol(_));
predicate!(builtin_keyword_p, "keyword?", DlispVal::Keyword(_));
predicate!(builtin_string_p, "string?", DlispVal::String(_));
predicate!(builtin_number_p, "number?", DlispVal::Int(_));
predicate!(builtin_fn_p, "fn?", DlispVal::Fn(_) | DlispVal::NativeFn(_));
predicate!(builtin_macro_p, "macro?", DlispVal::Macro(_));
predicate!(builtin_atom_p, "atom?", DlispVal::Atom(_));
predicate!(builtin_list_p, "list?", DlispVal::List(_));
predicate!(builtin_vector_p, "vector?", DlispVal::Vector(_));
predicate!(builtin_map_p, "map?", DlispVal::HashMap(_));
