// dlisp-parser - Printer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Renders values back to text.
//!
//! In readable mode strings are quoted and escaped so that reading the output
//! reproduces the value. Display mode writes string contents raw.

use std::fmt::Write;

use crate::stack::ensure_sufficient_stack;
use crate::value::{DlispAtom, DlispVal};

/// Render `val` as text. `readably` selects the round-trippable mode.
pub fn pr_str(val: &DlispVal, readably: bool) -> String {
    let mut printer = Printer::new(readably);
    printer.write_val(val);
    printer.out
}

/// Render several values separated by `sep`, as `pr-str`/`str` do.
pub fn pr_seq<'a>(
    vals: impl IntoIterator<Item = &'a DlispVal>,
    readably: bool,
    sep: &str,
) -> String {
    let mut printer = Printer::new(readably);
    for (i, val) in vals.into_iter().enumerate() {
        if i > 0 {
            printer.out.push_str(sep);
        }
        printer.write_val(val);
    }
    printer.out
}

struct Printer {
    out: String,
    readably: bool,
    /// Atoms whose contents are being printed; an atom that reaches
    /// itself prints as a placeholder.
    open_atoms: Vec<DlispAtom>,
}

impl Printer {
    fn new(readably: bool) -> Self {
        Printer {
            out: String::new(),
            readably,
            open_atoms: Vec::new(),
        }
    }

    fn write_val(&mut self, val: &DlispVal) {
        match val {
            DlispVal::Nil => self.out.push_str("nil"),
            DlispVal::Bool(b) => {
                let _ = write!(self.out, "{}", b);
            }
            DlispVal::Int(n) => {
                let _ = write!(self.out, "{}", n);
            }
            DlispVal::Symbol(sym) => self.out.push_str(sym.name()),
            DlispVal::Keyword(name) => {
                self.out.push(':');
                self.out.push_str(name);
            }
            DlispVal::String(s) => {
                if self.readably {
                    self.out.push('"');
                    self.out.push_str(&escape_string(s));
                    self.out.push('"');
                } else {
                    self.out.push_str(s);
                }
            }
            DlispVal::List(items) => self.write_seq(items.iter(), "(", ")"),
            DlispVal::Vector(items) => self.write_seq(items.iter(), "[", "]"),
            DlispVal::HashMap(items) => self.write_seq(items.iter(), "{", "}"),
            DlispVal::Fn(_) => self.out.push_str("#<function>"),
            DlispVal::Macro(_) => self.out.push_str("#<macro>"),
            DlispVal::NativeFn(nf) => {
                let _ = write!(self.out, "#<native-fn {}>", nf.name());
            }
            DlispVal::Atom(a) => self.write_atom(a),
        }
    }

    fn write_seq<'a>(
        &mut self,
        items: impl Iterator<Item = &'a DlispVal>,
        open: &str,
        close: &str,
    ) {
        self.out.push_str(open);
        ensure_sufficient_stack(|| {
            for (i, item) in items.enumerate() {
                if i > 0 {
                    self.out.push(' ');
                }
                self.write_val(item);
            }
        });
        self.out.push_str(close);
    }

    fn write_atom(&mut self, atom: &DlispAtom) {
        if self.open_atoms.contains(atom) {
            self.out.push_str("(atom #<self>)");
            return;
        }
        self.out.push_str("(atom ");
        self.open_atoms.push(atom.clone());
        ensure_sufficient_stack(|| self.write_val(&atom.deref()));
        self.open_atoms.pop();
        self.out.push(')');
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}
