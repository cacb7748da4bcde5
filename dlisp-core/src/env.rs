// dlisp-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.
//!
//! Frames are reference counted. A child holds a strong reference to its
//! parent and a parent never references its children, so environment chains
//! are acyclic by construction and plain `Rc` reclaims them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dlisp_parser::{DlispVal, Symbol};

use crate::error::{AritySpec, Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references. Cloning an `Env`
/// clones the handle, not the frame: every clone sees the same bindings.
///
/// # Examples
///
/// ```
/// use dlisp_core::Env;
/// use dlisp_parser::{DlispVal, Symbol};
///
/// let env = Env::new();
/// env.define(Symbol::new("x"), DlispVal::int(42));
///
/// let child = env.child();
/// child.define(Symbol::new("x"), DlispVal::int(100));
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), DlispVal::int(100));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), DlispVal::int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, DlispVal>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Define a binding in this environment (not parent).
    pub fn define(&self, sym: Symbol, val: DlispVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol in this environment or parent chain.
    pub fn lookup(&self, sym: &Symbol) -> Result<DlispVal> {
        self.get(sym)
            .ok_or_else(|| Error::NotFound { name: sym.clone() })
    }

    /// Like [`Env::lookup`], but absence is not an error.
    /// Walks the chain iteratively so deep environments cannot overflow.
    pub fn get(&self, sym: &Symbol) -> Option<DlispVal> {
        let mut current = self.clone();
        loop {
            let parent = {
                let inner = current.inner.borrow();
                if let Some(val) = inner.bindings.get(sym) {
                    return Some(val.clone());
                }
                inner.parent.clone()
            };
            current = parent?;
        }
    }

    /// Create a child frame binding `params` positionally to `args`.
    ///
    /// With a rest parameter, the arguments left over after the required ones
    /// are bound to it as a list (empty when there are none).
    pub fn bind_parameters(
        &self,
        params: &[Symbol],
        rest_param: Option<&Symbol>,
        args: &[DlispVal],
    ) -> Result<Env> {
        let arity_ok = match rest_param {
            Some(_) => args.len() >= params.len(),
            None => args.len() == params.len(),
        };
        if !arity_ok {
            return Err(Error::Arity {
                expected: match rest_param {
                    Some(_) => AritySpec::AtLeast(params.len()),
                    None => AritySpec::Exact(params.len()),
                },
                got: args.len(),
                name: None,
            });
        }

        let frame = self.child();
        for (param, arg) in params.iter().zip(args) {
            frame.define(param.clone(), arg.clone());
        }
        if let Some(rest) = rest_param {
            frame.define(rest.clone(), DlispVal::list(args[params.len()..].to_vec()));
        }
        Ok(frame)
    }

    /// True if both handles refer to the same frame.
    #[cfg(test)]
    fn same_frame(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> WeakEnv {
        WeakEnv(Rc::downgrade(&self.inner))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// A non-owning handle to a frame, used where a strong reference would
/// create a cycle (a primitive stored in the frame it refers to).
#[derive(Debug, Clone)]
pub(crate) struct WeakEnv(std::rc::Weak<RefCell<EnvInner>>);

impl WeakEnv {
    pub(crate) fn upgrade(&self) -> Option<Env> {
        self.0.upgrade().map(|inner| Env { inner })
    }
}
