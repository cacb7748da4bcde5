// dlisp-core - Exception handling
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `try*` special form.
//!
//! `(try* expr (catch* name handler...))` evaluates `expr`; if it fails, the
//! handler runs with `name` bound to the error's value. A `throw`n value is
//! bound as-is; any other error is bound as its message string.

use dlisp_parser::{DlispVal, Symbol};
use tracing::debug;

use super::special_forms::body_form;
use super::{Step, eval};
use crate::env::Env;
use crate::error::{Error, Result};

/// (try* expr (catch* name handler...)?)
pub(crate) fn eval_try(args: &[DlispVal], env: &Env) -> Result<Step> {
    let (body, catch) = match args {
        [body] => (body, None),
        [body, clause] => (body, Some(parse_catch(clause)?)),
        _ => {
            return Err(Error::form(
                "try*",
                "requires a body and at most one catch* clause",
            ));
        }
    };

    let Some((binding, handler)) = catch else {
        return Ok(Step::Tail(body.clone(), env.clone()));
    };

    match eval(body, env) {
        Ok(val) => Ok(Step::Done(val)),
        Err(err) => {
            debug!(error = %err, "caught by try*");
            let handler_env = env.child();
            handler_env.define(binding, err.to_value());
            Ok(Step::Tail(handler, handler_env))
        }
    }
}

fn parse_catch(clause: &DlispVal) -> Result<(Symbol, DlispVal)> {
    let DlispVal::List(items) = clause else {
        return Err(Error::form("try*", "expected a (catch* name handler) clause"));
    };
    if !clause.is_call_to("catch*") {
        return Err(Error::form("try*", "expected a (catch* name handler) clause"));
    }
    let items: Vec<DlispVal> = items.iter().cloned().collect();
    match items.get(1) {
        Some(DlispVal::Symbol(sym)) => Ok((sym.clone(), body_form(&items[2..]))),
        _ => Err(Error::form("try*", "catch* binding must be a symbol")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlisp_parser::read_str;

    #[test]
    fn test_parse_catch() {
        let clause = read_str("(catch* e (str e) e)").unwrap();
        let (sym, handler) = parse_catch(&clause).unwrap();
        assert_eq!(sym, Symbol::new("e"));
        assert_eq!(handler.to_string(), "(do (str e) e)");
    }

    #[test]
    fn test_parse_catch_rejects_other_heads() {
        let clause = read_str("(catch e e)").unwrap();
        assert!(parse_catch(&clause).is_err());
        let clause = read_str("(catch* 1 e)").unwrap();
        assert!(parse_catch(&clause).is_err());
    }
}
