// dlisp-core - Tail call and recursion depth tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tail positions (if, do, let*, closure bodies) run in constant stack;
//! non-tail recursion is bounded by the configurable depth limit.

mod common;

use common::{DlispVal, Error, eval_all, eval_str, new_interp};
use dlisp_core::{get_max_eval_depth, set_max_eval_depth};

#[test]
fn test_self_recursion_in_tail_position() {
    assert_eval!(
        "(def! count-down (fn* (n) (if (= n 0) :done (count-down (- n 1))))) \
         (count-down 100000)",
        DlispVal::keyword("done")
    );
}

#[test]
fn test_accumulator_recursion() {
    assert_eval!(
        "(def! sum-to (fn* (n acc) (if (= n 0) acc (sum-to (- n 1) (+ n acc))))) \
         (sum-to 100000 0)",
        DlispVal::int(5_000_050_000)
    );
}

#[test]
fn test_mutual_recursion_in_tail_position() {
    assert_eval!(
        "(def! even? (fn* (n) (if (= n 0) true (odd? (- n 1))))) \
         (def! odd? (fn* (n) (if (= n 0) false (even? (- n 1))))) \
         (even? 100001)",
        DlispVal::bool(false)
    );
}

#[test]
fn test_tail_calls_through_let_and_do() {
    assert_eval!(
        "(def! loop (fn* (n) (let* (m (- n 1)) (do 1 (if (> m 0) (loop m) :end))))) \
         (loop 100000)",
        DlispVal::keyword("end")
    );
}

#[test]
fn test_tail_calls_through_cond() {
    assert_eval!(
        "(def! walk (fn* (n) (cond (= n 0) :bottom :else (walk (- n 1))))) \
         (walk 50000)",
        DlispVal::keyword("bottom")
    );
}

#[test]
fn test_non_tail_recursion_within_limit() {
    assert_eval!(
        "(def! sum (fn* (n) (if (= n 0) 0 (+ n (sum (- n 1)))))) (sum 1000)",
        DlispVal::int(500_500)
    );
}

#[test]
fn test_non_tail_recursion_past_limit_is_an_error() {
    let prev = set_max_eval_depth(200);
    let result = eval_str("(def! sum (fn* (n) (if (= n 0) 0 (+ n (sum (- n 1)))))) (sum 1000)");
    let _ = set_max_eval_depth(prev);
    assert!(matches!(result, Err(Error::StackDepthExceeded(200))));
}

#[test]
fn test_interpreter_usable_after_depth_error() {
    let prev = set_max_eval_depth(100);
    let interp = new_interp();
    eval_all("(def! deep (fn* (n) (if (= n 0) 0 (+ 1 (deep (- n 1))))))", &interp).unwrap();
    let err = eval_all("(deep 500)", &interp);
    let ok = eval_all("(deep 10)", &interp);
    let _ = set_max_eval_depth(prev);
    assert!(err.is_err());
    assert_eq!(ok.unwrap(), DlispVal::int(10));
}

#[test]
fn test_default_limit() {
    assert_eq!(get_max_eval_depth(), dlisp_core::DEFAULT_MAX_EVAL_DEPTH);
}
