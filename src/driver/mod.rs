//! Execution driver: file interpretation and the REPL.
//!
//! The driver owns the orchestration around the core pipeline
//! (lex → parse → evaluate): reading source files, deciding whether to
//! evaluate at all (parser errors short-circuit), rendering results, and
//! mapping outcomes to process exit codes. The interpreter library stays
//! I/O-free; everything user-facing lives here and in
//! [`crate::diagnostics`].

use std::io::{self, BufRead, Write};

use kea::eval::{self, Environment};
use kea::lexer::Lexer;
use kea::parser::{ParseError, Parser};

use crate::diagnostics;

/// The interactive prompt.
const PROMPT: &str = ">> ";

/// A driver-level failure, before the interpreter even runs.
pub(crate) enum DriverError {
    /// Failed to read a source file.
    FileRead {
        path: String,
        source: io::Error,
    },
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::FileRead { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
        }
    }
}

/// Interprets a source file and returns the process exit code.
///
/// Parser errors are rendered with full source context and prevent
/// evaluation entirely; the partial program is never run. Otherwise the
/// final value is printed in its inspected form; a runtime error prints
/// like any other value (`ERROR: ...`) and yields a non-zero exit code.
pub(crate) fn run_file(path: &str) -> Result<i32, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|e| DriverError::FileRead {
        path: path.to_string(),
        source: e,
    })?;

    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            diagnostics::report_parse_error(path, &source, error);
        }
        return Ok(1);
    }

    let env = Environment::new();
    let result = eval::eval(&program, &env);
    let exit_code = if result.is_error() { 1 } else { 0 };
    println!("{}", result.inspect());

    Ok(exit_code)
}

/// Runs the interactive read-eval-print loop.
///
/// The environment persists across lines, so bindings from one input are
/// visible in the next. Parser errors are listed as a plain banner (the
/// line is not evaluated); otherwise the result of each line is printed
/// in its inspected form.
pub(crate) fn repl() -> i32 {
    println!("Hello! This is the Kea programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return 1;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return 0,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Failed to read input: {}", error);
                return 1;
            }
        }

        let lexer = Lexer::new(&line);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parse_errors(parser.errors());
            continue;
        }

        let result = eval::eval(&program, &env);
        println!("{}", result.inspect());
    }
}

/// Prints REPL parser errors as an indented list.
fn print_parse_errors(errors: &[ParseError]) {
    eprintln!("parser errors:");
    for error in errors {
        eprintln!("\t{}", error.message());
    }
}
