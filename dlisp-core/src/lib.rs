// dlisp-core - Runtime and evaluator for dlisp
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # dlisp-core
//!
//! Runtime for dlisp: lexical environments, the tail-call evaluator with
//! special forms and macro expansion, the primitive namespace, and the
//! [`Interpreter`] that ties them to one root environment.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod interpreter;

use tracing::debug;

pub use builtins::register_builtins;
pub use env::Env;
pub use error::{AritySpec, Error, Result};
pub use eval::{
    DEFAULT_MAX_EVAL_DEPTH, apply, eval, get_eval_depth, get_max_eval_depth, macroexpand,
    make_native_fn, quasiquote, set_max_eval_depth,
};
pub use interpreter::Interpreter;

// Re-export parser types for convenience
pub use dlisp_parser::{DlispVal, Symbol};

/// Embedded prelude source (`not`, `load-file`, `cond`).
const PRELUDE: &str = include_str!("../../dlisp-std/prelude.lisp");

/// Evaluate the prelude into `env`. Call this after `register_builtins`
/// and after `eval` is bound, since `load-file` uses it.
pub fn init_prelude(env: &Env) -> Result<()> {
    let forms = dlisp_parser::read_all(PRELUDE)?;
    for expr in &forms {
        eval::eval(expr, env)?;
    }
    debug!(forms = forms.len(), "prelude loaded");
    Ok(())
}
