// dlisp-core - Property-based evaluator tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

mod common;

use common::{DlispVal, new_interp};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_addition_matches_host(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let interp = new_interp();
        let result = interp.eval_str(&format!("(+ {} {})", a, b)).unwrap();
        prop_assert_eq!(result, DlispVal::int(a + b));
    }

    #[test]
    fn prop_let_sequential_bindings(values in prop::collection::vec(-1000i64..1000, 1..12)) {
        // (let* (v0 a v1 (+ v0 b) v2 (+ v1 c) ...) vN) is the running sum.
        let mut bindings = String::new();
        for (i, v) in values.iter().enumerate() {
            if i == 0 {
                bindings.push_str(&format!("v0 {} ", v));
            } else {
                bindings.push_str(&format!("v{} (+ v{} {}) ", i, i - 1, v));
            }
        }
        let src = format!("(let* ({}) v{})", bindings, values.len() - 1);
        let result = new_interp().eval_str(&src).unwrap();
        prop_assert_eq!(result, DlispVal::int(values.iter().sum()));
    }

    #[test]
    fn prop_quasiquote_splice_matches_concat(
        xs in prop::collection::vec(-100i64..100, 0..8),
        ys in prop::collection::vec(-100i64..100, 0..8),
    ) {
        let list = |ns: &[i64]| {
            ns.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
        };
        let src = format!(
            "(= `(~@(list {}) ~@(list {})) (concat (list {}) (list {})))",
            list(&xs), list(&ys), list(&xs), list(&ys)
        );
        prop_assert_eq!(new_interp().eval_str(&src).unwrap(), DlispVal::bool(true));
    }

    #[test]
    fn prop_tail_recursive_count(n in 0i64..5000) {
        let interp = new_interp();
        interp
            .eval_str("(def! cnt (fn* (n acc) (if (= n 0) acc (cnt (- n 1) (+ acc 1)))))")
            .unwrap();
        let result = interp.eval_str(&format!("(cnt {} 0)", n)).unwrap();
        prop_assert_eq!(result, DlispVal::int(n));
    }
}
