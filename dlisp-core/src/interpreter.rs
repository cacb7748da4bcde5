// dlisp-core - Interpreter state
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `Interpreter` struct - one root environment plus everything bound
//! into it at startup.

use dlisp_parser::{DlispVal, Parser, Symbol, pr_str};

use crate::builtins::register_builtins;
use crate::env::Env;
use crate::error::{Error, Result, check_arity};
use crate::eval::{apply, eval, make_native_fn};
use crate::init_prelude;

/// A dlisp interpreter.
///
/// Holds the root environment: primitives, `eval`, `*ARGV*` and the
/// prelude (`not`, `load-file`, `cond`). Separate interpreters share
/// nothing.
///
/// **Not thread-safe.** Values and environments use `Rc` and `RefCell`.
///
/// # Example
///
/// ```rust
/// use dlisp_core::Interpreter;
///
/// let interp = Interpreter::new().unwrap();
/// assert_eq!(interp.rep("(+ 1 2 3)").unwrap(), "6");
/// ```
pub struct Interpreter {
    env: Env,
}

impl Interpreter {
    /// Create an interpreter with an empty `*ARGV*`.
    pub fn new() -> Result<Self> {
        Self::with_args(Vec::<String>::new())
    }

    /// Create an interpreter with `*ARGV*` bound to `args` as strings.
    pub fn with_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let env = Env::new();
        register_builtins(&env);

        // Held weakly: the primitive lives in the frame it points at.
        let root = env.downgrade();
        let eval_fn = make_native_fn("eval", move |args| {
            check_arity("eval", args, 1)?;
            let env = root
                .upgrade()
                .ok_or_else(|| Error::Internal("root environment was dropped".into()))?;
            eval(&args[0], &env)
        });
        env.define(Symbol::new("eval"), DlispVal::NativeFn(eval_fn));

        let argv = args
            .into_iter()
            .map(|a| DlispVal::string(a.as_ref()))
            .collect();
        env.define(Symbol::new("*ARGV*"), DlispVal::list(argv));

        init_prelude(&env)?;
        Ok(Interpreter { env })
    }

    /// The root environment.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluate every form in `code`, returning the last result (nil for
    /// empty input).
    pub fn eval_str(&self, code: &str) -> Result<DlispVal> {
        let mut parser = Parser::new(code)?;
        let mut result = DlispVal::Nil;
        while let Some(expr) = parser.parse()? {
            result = eval(&expr, &self.env)?;
        }
        Ok(result)
    }

    /// Read, evaluate and print: the REPL step. The result is rendered
    /// readably.
    pub fn rep(&self, line: &str) -> Result<String> {
        self.eval_str(line).map(|val| pr_str(&val, true))
    }

    /// Evaluate a source file through the prelude's `load-file`.
    pub fn load_file(&self, path: &str) -> Result<DlispVal> {
        self.call("load-file", &[DlispVal::string(path)])
    }

    /// Look up a root binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<DlispVal> {
        self.env.get(&Symbol::new(name))
    }

    /// Bind `value` to `name` in the root environment.
    pub fn set(&self, name: &str, value: DlispVal) {
        self.env.define(Symbol::new(name), value);
    }

    /// Call the function bound to `name` with evaluated arguments.
    pub fn call(&self, name: &str, args: &[DlispVal]) -> Result<DlispVal> {
        let func = self.env.lookup(&Symbol::new(name))?;
        apply(&func, args)
    }

    /// Register a native Rust function in the root environment.
    pub fn register_native(
        &self,
        name: &'static str,
        func: impl Fn(&[DlispVal]) -> Result<DlispVal> + 'static,
    ) {
        let native = make_native_fn(name, func);
        self.env.define(Symbol::new(name), DlispVal::NativeFn(native));
    }
}
