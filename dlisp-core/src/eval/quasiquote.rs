// dlisp-core - Quasiquote expansion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Rewrites a quasiquoted template into ordinary `cons`/`concat` calls.
//!
//! `` `(a ~b ~@c) `` becomes `(cons (quote a) (cons b (concat c ())))`.
//! The rewritten form is evaluated in place of the template.

use dlisp_parser::{DlispVal, Vector, ensure_sufficient_stack};

use crate::error::{Error, Result};

/// Rewrite a quasiquote template into an expression that builds it.
pub fn quasiquote(ast: &DlispVal) -> Result<DlispVal> {
    match ast {
        DlispVal::List(items) if ast.is_call_to("unquote") => single_operand("unquote", items),
        DlispVal::List(items) => ensure_sufficient_stack(|| quasiquote_seq(items)),
        DlispVal::Vector(items) => Ok(DlispVal::list(vec![
            DlispVal::symbol("vec"),
            ensure_sufficient_stack(|| quasiquote_seq(items))?,
        ])),
        DlispVal::Symbol(_) => Ok(DlispVal::list(vec![DlispVal::symbol("quote"), ast.clone()])),
        other => Ok(other.clone()),
    }
}

/// Build a sequence right to left, splicing `splice-unquote` elements.
fn quasiquote_seq(items: &Vector<DlispVal>) -> Result<DlispVal> {
    let mut acc = DlispVal::empty_list();
    for elt in items.iter().rev() {
        acc = match elt {
            DlispVal::List(inner) if elt.is_call_to("splice-unquote") => DlispVal::list(vec![
                DlispVal::symbol("concat"),
                single_operand("splice-unquote", inner)?,
                acc,
            ]),
            _ => DlispVal::list(vec![DlispVal::symbol("cons"), quasiquote(elt)?, acc]),
        };
    }
    Ok(acc)
}

fn single_operand(form: &'static str, items: &Vector<DlispVal>) -> Result<DlispVal> {
    if items.len() != 2 {
        return Err(Error::form(form, "requires exactly 1 argument"));
    }
    Ok(items[1].clone())
}
