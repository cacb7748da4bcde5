// dlisp-core - Atom integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for dlisp atoms.
//!
//! Tests for: atom, deref, @, reset!, swap!, atom?

mod common;

use common::{DlispVal, Error, eval_all, eval_str, new_interp};

#[test]
fn test_atom_creation() {
    let result = eval_str("(atom 42)").unwrap();
    assert!(matches!(result, DlispVal::Atom(_)));
    assert_eq!(result.to_string(), "(atom 42)");
}

#[test]
fn test_deref_reader_macro() {
    assert_eval!("@(atom 42)", DlispVal::int(42));
    assert_eval!("(deref (atom 42))", DlispVal::int(42));
}

#[test]
fn test_swap_with_extra_argument() {
    let interp = new_interp();
    eval_all("(def! a (atom 5))", &interp).unwrap();
    assert_eq!(eval_all("(swap! a + 3)", &interp).unwrap(), DlispVal::int(8));
    assert_eq!(eval_all("@a", &interp).unwrap(), DlispVal::int(8));
}

#[test]
fn test_swap_with_closure() {
    assert_eval!(
        "(def! a (atom 1)) (swap! a (fn* (x y z) (+ x y z)) 2 3) @a",
        DlispVal::int(6)
    );
}

#[test]
fn test_reset() {
    assert_eval!("(def! a (atom 1)) (reset! a :new)", DlispVal::keyword("new"));
    assert_eval!("(def! a (atom 1)) (reset! a :new) @a", DlispVal::keyword("new"));
}

#[test]
fn test_atoms_are_shared_through_closures() {
    assert_eval!(
        "(def! counter (atom 0)) \
         (def! inc! (fn* () (swap! counter + 1))) \
         (inc!) (inc!) (inc!) \
         @counter",
        DlispVal::int(3)
    );
}

#[test]
fn test_atom_identity_equality() {
    assert_eval!("(= (atom 1) (atom 1))", DlispVal::bool(false));
    assert_eval!("(def! a (atom 1)) (= a a)", DlispVal::bool(true));
}

#[test]
fn test_atom_predicate() {
    assert_eval!("(atom? (atom nil))", DlispVal::bool(true));
    assert_eval!("(atom? 1)", DlispVal::bool(false));
}

#[test]
fn test_deref_non_atom() {
    assert_eval_err!("(deref 1)", Error::Type { .. });
}
