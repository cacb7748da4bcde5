// dlisp-parser - Core value types
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The tagged value model shared by the reader, evaluator and printer.
//!
//! Lists, vectors and hash-maps are persistent `im::Vector`s, so "modifying"
//! one produces a new value that shares structure with the old one. Atoms
//! are the only values with interior mutability.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::stack::ensure_sufficient_stack;
use crate::symbol::Symbol;

/// A dlisp runtime value.
#[derive(Clone)]
pub enum DlispVal {
    /// The nil value
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Interned identifier
    Symbol(Symbol),
    /// Self-evaluating keyword, stored without its leading `:`
    Keyword(Rc<str>),
    /// Immutable string
    String(Rc<str>),
    /// Linked list
    List(Vector<DlispVal>),
    /// Indexed vector
    Vector(Vector<DlispVal>),
    /// Flat sequence of alternating keys and values
    HashMap(Vector<DlispVal>),
    /// User-defined closure
    Fn(DlispFn),
    /// Closure created by `defmacro!`; receives unevaluated forms
    Macro(DlispFn),
    /// Native (Rust) function
    NativeFn(DlispNativeFn),
    /// Mutable single-slot reference cell
    Atom(DlispAtom),
}

// ============================================================================
// Function Types
// ============================================================================

/// A user-defined function (closure).
///
/// The captured environment is type-erased; the environment type lives in
/// dlisp-core, which depends on this crate.
#[derive(Clone)]
pub struct DlispFn {
    /// Required parameter names, in order
    pub params: Vec<Symbol>,
    /// Name bound to the remaining arguments after `&`, if any
    pub rest_param: Option<Symbol>,
    /// Body form (several body forms are wrapped in a `do`)
    pub body: Rc<DlispVal>,
    /// Captured defining environment
    pub env: Rc<dyn Any>,
}

impl DlispFn {
    /// Create a new closure.
    pub fn new(
        params: Vec<Symbol>,
        rest_param: Option<Symbol>,
        body: DlispVal,
        env: Rc<dyn Any>,
    ) -> Self {
        DlispFn {
            params,
            rest_param,
            body: Rc::new(body),
            env,
        }
    }
}

impl fmt::Debug for DlispFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<function>")
    }
}

impl PartialEq for DlispFn {
    fn eq(&self, _other: &Self) -> bool {
        false // Functions are never equal
    }
}

/// A native (Rust) function.
#[derive(Clone)]
pub struct DlispNativeFn {
    /// Function name for display
    pub name: &'static str,
    /// The actual function (type-erased)
    func: Rc<dyn Any>,
}

impl DlispNativeFn {
    /// Create a new native function with a type-erased function.
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        DlispNativeFn { name, func }
    }

    /// Get the function name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the inner function reference.
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for DlispNativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<native-fn {}>", self.name)
    }
}

impl PartialEq for DlispNativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

// ============================================================================
// Atom Type
// ============================================================================

/// A mutable reference cell.
///
/// Clones share the same slot, so a `reset!` through one handle is visible
/// through every other handle. Equality is identity.
#[derive(Clone)]
pub struct DlispAtom {
    value: Rc<RefCell<DlispVal>>,
}

impl DlispAtom {
    /// Create a new atom holding `value`.
    pub fn new(value: DlispVal) -> Self {
        DlispAtom {
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// Get the current value.
    pub fn deref(&self) -> DlispVal {
        self.value.borrow().clone()
    }

    /// Overwrite the held value, returning the new value.
    pub fn reset(&self, new_val: DlispVal) -> DlispVal {
        *self.value.borrow_mut() = new_val.clone();
        new_val
    }
}

impl PartialEq for DlispAtom {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for DlispAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(atom {})", self.value.borrow())
    }
}

// ============================================================================
// Constructors and accessors
// ============================================================================

impl DlispVal {
    /// Create a nil value
    pub fn nil() -> Self {
        DlispVal::Nil
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        DlispVal::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        DlispVal::Int(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        DlispVal::String(s.into())
    }

    /// Create a symbol value
    pub fn symbol(name: &str) -> Self {
        DlispVal::Symbol(Symbol::new(name))
    }

    /// Create a keyword value from its name (without the leading `:`)
    pub fn keyword(name: &str) -> Self {
        DlispVal::Keyword(Rc::from(name))
    }

    /// Create an empty list
    pub fn empty_list() -> Self {
        DlispVal::List(Vector::new())
    }

    /// Create a list from elements
    pub fn list(elements: Vec<DlispVal>) -> Self {
        DlispVal::List(elements.into_iter().collect())
    }

    /// Create a vector from elements
    pub fn vector(elements: Vec<DlispVal>) -> Self {
        DlispVal::Vector(elements.into_iter().collect())
    }

    /// Create a hash-map from a flat key/value sequence
    pub fn hash_map(elements: Vec<DlispVal>) -> Self {
        DlispVal::HashMap(elements.into_iter().collect())
    }

    /// Create an atom holding `value`
    pub fn atom(value: DlispVal) -> Self {
        DlispVal::Atom(DlispAtom::new(value))
    }

    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, DlispVal::Nil)
    }

    /// Only nil and false are falsy; 0 and the empty list are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, DlispVal::Nil | DlispVal::Bool(false))
    }

    /// True if this is a list whose head is the symbol `name`.
    pub fn is_call_to(&self, name: &str) -> bool {
        match self {
            DlispVal::List(items) => {
                matches!(items.front(), Some(DlispVal::Symbol(sym)) if sym.name() == name)
            }
            _ => false,
        }
    }

    /// Elements of a list or vector.
    pub fn as_seq(&self) -> Option<&Vector<DlispVal>> {
        match self {
            DlispVal::List(items) | DlispVal::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            DlispVal::Nil => "nil",
            DlispVal::Bool(_) => "bool",
            DlispVal::Int(_) => "int",
            DlispVal::Symbol(_) => "symbol",
            DlispVal::Keyword(_) => "keyword",
            DlispVal::String(_) => "string",
            DlispVal::List(_) => "list",
            DlispVal::Vector(_) => "vector",
            DlispVal::HashMap(_) => "hash-map",
            DlispVal::Fn(_) => "fn",
            DlispVal::Macro(_) => "macro",
            DlispVal::NativeFn(_) => "fn",
            DlispVal::Atom(_) => "atom",
        }
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for DlispVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::printer::pr_str(self, true))
    }
}

impl fmt::Debug for DlispVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for DlispVal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DlispVal::Nil, DlispVal::Nil) => true,
            (DlispVal::Bool(a), DlispVal::Bool(b)) => a == b,
            (DlispVal::Int(a), DlispVal::Int(b)) => a == b,
            (DlispVal::Symbol(a), DlispVal::Symbol(b)) => a == b,
            (DlispVal::Keyword(a), DlispVal::Keyword(b)) => a == b,
            (DlispVal::String(a), DlispVal::String(b)) => a == b,
            // Sequential values compare element-wise, regardless of list/vector.
            (
                DlispVal::List(a) | DlispVal::Vector(a),
                DlispVal::List(b) | DlispVal::Vector(b),
            )
            | (DlispVal::HashMap(a), DlispVal::HashMap(b)) => {
                a.len() == b.len()
                    && ensure_sufficient_stack(|| a.iter().zip(b.iter()).all(|(x, y)| x == y))
            }
            (DlispVal::Fn(a), DlispVal::Fn(b)) => a == b,
            (DlispVal::Macro(a), DlispVal::Macro(b)) => a == b,
            (DlispVal::NativeFn(a), DlispVal::NativeFn(b)) => a == b,
            (DlispVal::Atom(a), DlispVal::Atom(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// Drop
// ============================================================================

// Releasing a list recurses once per nesting level; a deep list would
// overflow the native stack on release.
impl Drop for DlispVal {
    fn drop(&mut self) {
        if let DlispVal::List(items) | DlispVal::Vector(items) | DlispVal::HashMap(items) = self
            && !items.is_empty()
        {
            let items = std::mem::take(items);
            ensure_sufficient_stack(move || drop(items));
        }
    }
}
