// dlisp-core - Tail-call evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! AST-walking evaluator for dlisp expressions.
//!
//! [`eval`] runs a loop over `(ast, env)` pairs. Special forms in tail
//! position and closure application hand back a new pair instead of
//! recursing, so self-recursive user functions run in constant stack.
//! Only genuinely nested evaluation (arguments, conditions, `let*` values)
//! re-enters [`eval`] and is counted against the depth limit.

pub mod apply;
pub mod exceptions;
pub mod quasiquote;
mod special_forms;

pub use apply::{NativeFnImpl, apply, make_native_fn};
pub use quasiquote::quasiquote;

use std::cell::Cell;

use dlisp_parser::{DlispFn, DlispVal};
use tracing::{trace, warn};

use crate::env::Env;
use crate::error::{Error, Result};

use apply::{apply_fn, apply_native, closure_env};

// ============================================================================
// Stack Overflow Protection
// ============================================================================

/// Maximum nesting depth for eval. Can be configured via `set_max_eval_depth`.
pub const DEFAULT_MAX_EVAL_DEPTH: usize = 10_000;

/// Remaining stack below which eval grows the stack before recursing.
const RED_ZONE: usize = 128 * 1024;
/// Size of each stack segment allocated when growing.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

thread_local! {
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_EVAL_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_EVAL_DEPTH) };
}

/// Set the maximum eval nesting depth. Returns the previous value.
#[inline]
#[must_use]
pub fn set_max_eval_depth(depth: usize) -> usize {
    MAX_EVAL_DEPTH.with(|d| d.replace(depth))
}

/// Get the current maximum eval nesting depth.
#[inline]
#[must_use]
pub fn get_max_eval_depth() -> usize {
    MAX_EVAL_DEPTH.with(|d| d.get())
}

/// Get the current eval nesting depth.
#[inline]
#[must_use]
pub fn get_eval_depth() -> usize {
    EVAL_DEPTH.with(|d| d.get())
}

struct EvalDepthGuard;

impl EvalDepthGuard {
    fn new() -> Result<Self> {
        let (current, max) = EVAL_DEPTH.with(|d| {
            let current = d.get() + 1;
            d.set(current);
            (current, MAX_EVAL_DEPTH.with(|m| m.get()))
        });
        if current > max {
            EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            warn!(max_depth = max, "evaluation depth limit reached");
            Err(Error::StackDepthExceeded(max))
        } else {
            Ok(EvalDepthGuard)
        }
    }
}

impl Drop for EvalDepthGuard {
    fn drop(&mut self) {
        EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// What a special form asks the evaluator loop to do next.
pub(crate) enum Step {
    /// The form produced its value.
    Done(DlispVal),
    /// Continue the loop with this form in this environment.
    Tail(DlispVal, Env),
}

/// Evaluate a dlisp expression in the given environment.
///
/// # Examples
///
/// ```
/// use dlisp_core::{Interpreter, eval};
/// use dlisp_parser::{DlispVal, read_str};
///
/// let interp = Interpreter::new().unwrap();
/// let expr = read_str("(let* (a 1 b (+ a 1)) b)").unwrap();
/// assert_eq!(eval(&expr, interp.env()).unwrap(), DlispVal::int(2));
/// ```
///
/// # Errors
///
/// Returns an error if a symbol is unbound, a function gets the wrong number
/// of arguments, a primitive rejects its arguments, user code `throw`s, or
/// the nesting depth exceeds [`get_max_eval_depth`].
#[must_use = "eval returns a value that should be used"]
pub fn eval(ast: &DlispVal, env: &Env) -> Result<DlispVal> {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || {
        let _guard = EvalDepthGuard::new()?;
        eval_loop(ast.clone(), env.clone())
    })
}

fn eval_loop(mut ast: DlispVal, mut env: Env) -> Result<DlispVal> {
    loop {
        ast = macroexpand(ast, &env)?;

        let items: Vec<DlispVal> = match &ast {
            DlispVal::List(items) if items.is_empty() => return Ok(ast),
            DlispVal::List(items) => items.iter().cloned().collect(),
            _ => return eval_ast(&ast, &env),
        };

        if let DlispVal::Symbol(sym) = &items[0]
            && let Some(step) = special_forms::dispatch(sym.name(), &items[1..], &env)
        {
            match step? {
                Step::Done(val) => return Ok(val),
                Step::Tail(next_ast, next_env) => {
                    ast = next_ast;
                    env = next_env;
                    continue;
                }
            }
        }

        // Function application: operator and operands left to right.
        let mut evaluated = Vec::with_capacity(items.len());
        for item in &items {
            evaluated.push(eval(item, &env)?);
        }
        let args = &evaluated[1..];

        match &evaluated[0] {
            DlispVal::Fn(f) | DlispVal::Macro(f) => {
                let frame = closure_env(f)?.bind_parameters(
                    &f.params,
                    f.rest_param.as_ref(),
                    args,
                )?;
                trace!(argc = args.len(), "tail call into closure");
                ast = (*f.body).clone();
                env = frame;
            }
            DlispVal::NativeFn(f) => return apply_native(f, args),
            other => return Err(Error::NotCallable(other.to_string())),
        }
    }
}

/// Evaluate a form that is not a non-empty list: symbols resolve, vectors
/// and maps evaluate their elements, everything else evaluates to itself.
fn eval_ast(ast: &DlispVal, env: &Env) -> Result<DlispVal> {
    match ast {
        DlispVal::Symbol(sym) => env.lookup(sym),
        DlispVal::Vector(items) => {
            let evaluated: Result<Vec<_>> = items.iter().map(|e| eval(e, env)).collect();
            Ok(DlispVal::vector(evaluated?))
        }
        DlispVal::HashMap(items) => {
            let evaluated: Result<Vec<_>> = items.iter().map(|e| eval(e, env)).collect();
            Ok(DlispVal::hash_map(evaluated?))
        }
        other => Ok(other.clone()),
    }
}

// ============================================================================
// Macro Expansion
// ============================================================================

/// The macro a form calls, if its head symbol resolves to one in `env`.
fn macro_call(ast: &DlispVal, env: &Env) -> Option<DlispFn> {
    let DlispVal::List(items) = ast else {
        return None;
    };
    let Some(DlispVal::Symbol(sym)) = items.front() else {
        return None;
    };
    match &env.get(sym) {
        Some(DlispVal::Macro(m)) => Some(m.clone()),
        _ => None,
    }
}

/// Expand `ast` until its head is no longer a macro call.
///
/// Macro arguments are passed unevaluated; the expansion is returned, not
/// evaluated.
pub fn macroexpand(mut ast: DlispVal, env: &Env) -> Result<DlispVal> {
    while let Some(mac) = macro_call(&ast, env) {
        let DlispVal::List(items) = &ast else {
            break;
        };
        trace!(form = %ast, "expanding macro call");
        let args: Vec<DlispVal> = items.iter().skip(1).cloned().collect();
        ast = apply_fn(&mac, &args)?;
    }
    Ok(ast)
}
