// dlisp-parser - Property-based reader/printer tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing a value readably and reading it back yields an equal value.

use dlisp_parser::{DlispVal, pr_str, read_str};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating values
// =============================================================================

fn arb_symbol_name() -> impl Strategy<Value = String> {
    "[a-z*+!?<>=_][a-z0-9*+!?<>=_-]{0,8}"
        .prop_filter("reserved words read as constants", |s| {
            !matches!(s.as_str(), "nil" | "true" | "false")
        })
}

fn arb_leaf() -> impl Strategy<Value = DlispVal> {
    prop_oneof![
        Just(DlispVal::Nil),
        any::<bool>().prop_map(DlispVal::bool),
        any::<i64>().prop_map(DlispVal::int),
        arb_symbol_name().prop_map(|s| DlispVal::symbol(&s)),
        "[a-z][a-z0-9-]{0,8}".prop_map(|s| DlispVal::keyword(&s)),
        "[ -~\n]{0,12}".prop_map(DlispVal::string),
    ]
}

fn arb_value() -> impl Strategy<Value = DlispVal> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(DlispVal::list),
            prop::collection::vec(inner.clone(), 0..6).prop_map(DlispVal::vector),
            prop::collection::vec(inner, 0..6).prop_map(DlispVal::hash_map),
        ]
    })
}

/// Equality that also distinguishes lists from vectors, which `==` does not.
fn same_shape(a: &DlispVal, b: &DlispVal) -> bool {
    match (a, b) {
        (DlispVal::List(x), DlispVal::List(y))
        | (DlispVal::Vector(x), DlispVal::Vector(y))
        | (DlispVal::HashMap(x), DlispVal::HashMap(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| same_shape(p, q))
        }
        _ => a == b,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn readable_print_round_trips(v in arb_value()) {
        let text = pr_str(&v, true);
        let back = read_str(&text).unwrap();
        prop_assert!(same_shape(&v, &back), "{} read back as {}", text, back);
    }

    #[test]
    fn integers_round_trip(n in any::<i64>()) {
        let text = pr_str(&DlispVal::int(n), true);
        prop_assert_eq!(read_str(&text).unwrap(), DlispVal::int(n));
    }

    #[test]
    fn display_mode_writes_raw_strings(s in "[ -~]{0,16}") {
        prop_assert_eq!(pr_str(&DlispVal::string(s.as_str()), false), s);
    }
}
