// dlisp-core - Special forms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Special forms: def!, defmacro!, let*, do, if, fn*, quote, quasiquote,
//! unquote, quasiquoteexpand, macroexpand and try*.
//!
//! Each handler receives the operands unevaluated. Forms whose result is
//! another form in tail position return [`Step::Tail`] so the evaluator
//! loops instead of recursing.

use dlisp_parser::{DlispFn, DlispVal, Symbol};
use tracing::debug;

use super::apply::erase_env;
use super::exceptions::eval_try;
use super::quasiquote::quasiquote;
use super::{Step, eval, macroexpand};
use crate::env::Env;
use crate::error::{Error, Result};

/// Run the special form `name`, or return `None` if `name` is not one.
pub(crate) fn dispatch(name: &str, args: &[DlispVal], env: &Env) -> Option<Result<Step>> {
    let step = match name {
        "def!" => eval_def(args, env),
        "defmacro!" => eval_defmacro(args, env),
        "let*" => eval_let(args, env),
        "do" => eval_do(args, env),
        "if" => eval_if(args, env),
        "fn*" => eval_fn(args, env),
        "quote" => eval_quote(args),
        "quasiquote" => eval_quasiquote(args, env),
        "unquote" => eval_unquote(args, env),
        "quasiquoteexpand" => eval_quasiquoteexpand(args),
        "macroexpand" => eval_macroexpand(args, env),
        "try*" => eval_try(args, env),
        _ => return None,
    };
    Some(step)
}

fn expect_symbol(form: &'static str, val: &DlispVal) -> Result<Symbol> {
    match val {
        DlispVal::Symbol(sym) => Ok(sym.clone()),
        other => Err(Error::form(
            form,
            format!("expected a symbol, got {}", other.type_name()),
        )),
    }
}

/// Turn a body of zero or more forms into one form.
pub(crate) fn body_form(body: &[DlispVal]) -> DlispVal {
    match body {
        [] => DlispVal::Nil,
        [single] => single.clone(),
        forms => {
            let mut items = Vec::with_capacity(forms.len() + 1);
            items.push(DlispVal::symbol("do"));
            items.extend(forms.iter().cloned());
            DlispVal::list(items)
        }
    }
}

/// (def! name expr)
fn eval_def(args: &[DlispVal], env: &Env) -> Result<Step> {
    let [name, expr] = args else {
        return Err(Error::form("def!", "requires a name and a value"));
    };
    let sym = expect_symbol("def!", name)?;
    let val = eval(expr, env)?;
    debug!(name = %sym, "def!");
    env.define(sym, val.clone());
    Ok(Step::Done(val))
}

/// (defmacro! name fn-expr) - the value must be a closure; it is stored as
/// a macro rather than flagged after the fact.
fn eval_defmacro(args: &[DlispVal], env: &Env) -> Result<Step> {
    let [name, expr] = args else {
        return Err(Error::form("defmacro!", "requires a name and a function"));
    };
    let sym = expect_symbol("defmacro!", name)?;
    let mac = match &eval(expr, env)? {
        DlispVal::Fn(f) | DlispVal::Macro(f) => DlispVal::Macro(f.clone()),
        other => {
            return Err(Error::form(
                "defmacro!",
                format!("expected a function, got {}", other.type_name()),
            ));
        }
    };
    debug!(name = %sym, "defmacro!");
    env.define(sym, mac.clone());
    Ok(Step::Done(mac))
}

/// (let* (name expr ...) body...) - bindings are visible to later bindings.
fn eval_let(args: &[DlispVal], env: &Env) -> Result<Step> {
    let Some(bindings) = args.first().and_then(DlispVal::as_seq) else {
        return Err(Error::form("let*", "requires a binding list or vector"));
    };
    if bindings.len() % 2 != 0 {
        return Err(Error::form("let*", "bindings must come in name/value pairs"));
    }

    let let_env = env.child();
    let bindings: Vec<DlispVal> = bindings.iter().cloned().collect();
    for pair in bindings.chunks(2) {
        let sym = expect_symbol("let*", &pair[0])?;
        let val = eval(&pair[1], &let_env)?;
        let_env.define(sym, val);
    }
    Ok(Step::Tail(body_form(&args[1..]), let_env))
}

/// (do expr...) - the last form is in tail position.
fn eval_do(args: &[DlispVal], env: &Env) -> Result<Step> {
    let Some((last, init)) = args.split_last() else {
        return Ok(Step::Done(DlispVal::Nil));
    };
    for expr in init {
        eval(expr, env)?;
    }
    Ok(Step::Tail(last.clone(), env.clone()))
}

/// (if test then else?)
fn eval_if(args: &[DlispVal], env: &Env) -> Result<Step> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::form("if", "requires 2 or 3 arguments"));
    }
    let branch = if eval(&args[0], env)?.is_truthy() {
        args[1].clone()
    } else {
        args.get(2).cloned().unwrap_or(DlispVal::Nil)
    };
    Ok(Step::Tail(branch, env.clone()))
}

/// (fn* (params... & rest) body...)
fn eval_fn(args: &[DlispVal], env: &Env) -> Result<Step> {
    let Some(param_list) = args.first().and_then(DlispVal::as_seq) else {
        return Err(Error::form("fn*", "requires a parameter list or vector"));
    };

    let mut params = Vec::with_capacity(param_list.len());
    let mut rest_param = None;
    let mut iter = param_list.iter();
    while let Some(p) = iter.next() {
        let sym = expect_symbol("fn*", p)?;
        if sym.is_rest_marker() {
            let rest = iter
                .next()
                .ok_or_else(|| Error::form("fn*", "'&' must be followed by a name"))?;
            rest_param = Some(expect_symbol("fn*", rest)?);
            if iter.next().is_some() {
                return Err(Error::form("fn*", "only one name may follow '&'"));
            }
            break;
        }
        params.push(sym);
    }

    let closure = DlispFn::new(params, rest_param, body_form(&args[1..]), erase_env(env));
    Ok(Step::Done(DlispVal::Fn(closure)))
}

/// (quote form)
fn eval_quote(args: &[DlispVal]) -> Result<Step> {
    match args {
        [form] => Ok(Step::Done(form.clone())),
        _ => Err(Error::form("quote", "requires exactly 1 argument")),
    }
}

/// (quasiquote template) - the rewrite is evaluated in tail position.
fn eval_quasiquote(args: &[DlispVal], env: &Env) -> Result<Step> {
    match args {
        [template] => Ok(Step::Tail(quasiquote(template)?, env.clone())),
        _ => Err(Error::form("quasiquote", "requires exactly 1 argument")),
    }
}

/// (unquote expr) - reached when a template is not rewritten, as inside a
/// quasiquoted hash-map; evaluates `expr` in tail position.
fn eval_unquote(args: &[DlispVal], env: &Env) -> Result<Step> {
    match args {
        [expr] => Ok(Step::Tail(expr.clone(), env.clone())),
        _ => Err(Error::form("unquote", "requires exactly 1 argument")),
    }
}

/// (quasiquoteexpand template) - the rewrite without evaluating it.
fn eval_quasiquoteexpand(args: &[DlispVal]) -> Result<Step> {
    match args {
        [template] => Ok(Step::Done(quasiquote(template)?)),
        _ => Err(Error::form("quasiquoteexpand", "requires exactly 1 argument")),
    }
}

/// (macroexpand form)
fn eval_macroexpand(args: &[DlispVal], env: &Env) -> Result<Step> {
    match args {
        [form] => Ok(Step::Done(macroexpand(form.clone(), env)?)),
        _ => Err(Error::form("macroexpand", "requires exactly 1 argument")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_form() {
        assert_eq!(body_form(&[]), DlispVal::Nil);
        assert_eq!(body_form(&[DlispVal::int(1)]), DlispVal::int(1));
        assert_eq!(
            body_form(&[DlispVal::int(1), DlispVal::int(2)]).to_string(),
            "(do 1 2)"
        );
    }

    #[test]
    fn test_dispatch_ignores_ordinary_names() {
        let env = Env::new();
        assert!(dispatch("list", &[], &env).is_none());
        assert!(dispatch("def!", &[], &env).is_some());
    }

    #[test]
    fn test_fn_rest_marker_needs_name() {
        let env = Env::new();
        let params = DlispVal::list(vec![DlispVal::symbol("a"), DlispVal::symbol("&")]);
        let result = dispatch("fn*", &[params], &env).unwrap();
        assert!(matches!(result, Err(Error::InvalidForm { form: "fn*", .. })));
    }

    #[test]
    fn test_def_requires_symbol() {
        let env = Env::new();
        let result = dispatch("def!", &[DlispVal::int(1), DlispVal::int(2)], &env).unwrap();
        assert!(matches!(result, Err(Error::InvalidForm { form: "def!", .. })));
    }
}
