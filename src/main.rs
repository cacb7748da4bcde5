// dlisp - A small Lisp interpreter with macros and tail calls
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::io::{self, Write};
use std::process;

use dlisp_core::Interpreter;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: dlisp [FILE [ARGS...]]

With FILE, evaluates it with *ARGV* bound to ARGS and exits.
Without arguments, starts an interactive REPL.

Options:
  -h, --help       Print this help
  -v, --version    Print the version

Set DLISP_LOG (e.g. DLISP_LOG=debug) to control diagnostic output.";

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--help" | "-h") => println!("{}", USAGE),
        Some("--version" | "-v") => println!("dlisp v{}", VERSION),
        Some(file) => run_file(file, &args[1..]),
        None => run_repl(),
    }
}

/// Diagnostics go to stderr so program output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DLISP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn new_interpreter(argv: &[String]) -> Interpreter {
    match Interpreter::with_args(argv) {
        Ok(interp) => interp,
        Err(e) => {
            eprintln!("Failed to load prelude: {}", e);
            process::exit(1);
        }
    }
}

/// Evaluate a source file through `load-file`
fn run_file(path: &str, argv: &[String]) {
    let interp = new_interpreter(argv);
    debug!(file = path, args = argv.len(), "running file");
    if let Err(e) = interp.load_file(path) {
        eprintln!("Error in '{}': {}", path, e);
        process::exit(1);
    }
}

/// Run the interactive REPL
fn run_repl() {
    let interp = new_interpreter(&[]);

    loop {
        print!("user> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }
                match interp.rep(input) {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}
