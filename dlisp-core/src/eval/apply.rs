// dlisp-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function application for dlisp.
//!
//! The evaluator loop applies closures itself so it can loop on the body;
//! [`apply`] is the non-tail path used by primitives that call back into
//! user code (`swap!`, `apply`, `map`) and by macro expansion.

use std::any::Any;
use std::rc::Rc;

use dlisp_parser::{DlispFn, DlispNativeFn, DlispVal};

use super::eval;
use crate::env::Env;
use crate::error::{Error, Result};

/// Type alias for native function signature.
pub type NativeFnImpl = dyn Fn(&[DlispVal]) -> Result<DlispVal>;

/// Apply a function to already-evaluated arguments.
pub fn apply(func: &DlispVal, args: &[DlispVal]) -> Result<DlispVal> {
    match func {
        DlispVal::Fn(f) | DlispVal::Macro(f) => apply_fn(f, args),
        DlispVal::NativeFn(f) => apply_native(f, args),
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Apply a user-defined closure: bind its parameters in a child of the
/// captured environment and evaluate the body there.
pub(crate) fn apply_fn(func: &DlispFn, args: &[DlispVal]) -> Result<DlispVal> {
    let frame = closure_env(func)?.bind_parameters(&func.params, func.rest_param.as_ref(), args)?;
    eval(&func.body, &frame)
}

/// Recover the environment a closure captured.
pub(crate) fn closure_env(func: &DlispFn) -> Result<&Env> {
    func.env
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("closure environment has invalid type".into()))
}

/// Apply a native function.
pub(crate) fn apply_native(func: &DlispNativeFn, args: &[DlispVal]) -> Result<DlispVal> {
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal(format!("native '{}' has invalid type", func.name())))?;
    f(args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[DlispVal]) -> Result<DlispVal> + 'static,
) -> DlispNativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    DlispNativeFn::new(name, func_any)
}

/// Wrap `env` for storage inside a closure value.
pub(crate) fn erase_env(env: &Env) -> Rc<dyn Any> {
    Rc::new(env.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlisp_parser::Symbol;

    #[test]
    fn test_apply_native() {
        let double = make_native_fn("double", |args| match args {
            [DlispVal::Int(n)] => Ok(DlispVal::int(n * 2)),
            _ => Err(Error::arity_named("double", 1, args.len())),
        });
        let f = DlispVal::NativeFn(double);
        assert_eq!(apply(&f, &[DlispVal::int(21)]).unwrap(), DlispVal::int(42));
        assert!(apply(&f, &[]).is_err());
    }

    #[test]
    fn test_apply_closure() {
        let env = Env::new();
        env.define(Symbol::new("k"), DlispVal::int(7));
        let closure = DlispFn::new(
            vec![Symbol::new("x")],
            None,
            DlispVal::symbol("k"),
            erase_env(&env),
        );
        let result = apply(&DlispVal::Fn(closure), &[DlispVal::int(1)]).unwrap();
        assert_eq!(result, DlispVal::int(7));
    }

    #[test]
    fn test_apply_non_callable() {
        let err = apply(&DlispVal::string("f"), &[]).unwrap_err();
        assert!(matches!(err, Error::NotCallable(s) if s == "\"f\""));
    }

    #[test]
    fn test_closure_with_foreign_env_payload() {
        let closure = DlispFn::new(vec![], None, DlispVal::Nil, Rc::new(5_u8));
        assert!(matches!(
            apply(&DlispVal::Fn(closure), &[]),
            Err(Error::Internal(_))
        ));
    }
}
