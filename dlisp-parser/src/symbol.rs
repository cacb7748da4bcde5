// dlisp-parser - Symbol type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are the identifiers of dlisp source.
//!
//! # Interning
//!
//! Symbols are interned through a global table, so two symbols with the same
//! name share one allocation. Equality and hashing are pointer based, which
//! keeps environment lookups cheap on the evaluator's hot path.
//!
//! Interned symbols are never freed. Programs use a bounded set of names, so
//! the table stays small in practice.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// An interned identifier.
#[derive(Clone)]
pub struct Symbol {
    name: Arc<str>,
}

static SYMBOL_INTERNER: OnceLock<Mutex<HashSet<Arc<str>>>> = OnceLock::new();

fn intern(name: &str) -> Arc<str> {
    let table = SYMBOL_INTERNER.get_or_init(|| Mutex::new(HashSet::new()));
    // A poisoned table still holds valid entries; keep using it.
    let mut table = table.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = table.get(name) {
        return Arc::clone(existing);
    }
    let interned: Arc<str> = Arc::from(name);
    table.insert(Arc::clone(&interned));
    interned
}

impl Symbol {
    /// Create (or fetch) the symbol with the given name.
    pub fn new(name: &str) -> Self {
        Symbol { name: intern(name) }
    }

    /// The symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the `&` marker that introduces a rest parameter.
    pub fn is_rest_marker(&self) -> bool {
        &*self.name == "&"
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.name) as *const u8 as usize).hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}
