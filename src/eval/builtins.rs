//! Built-in functions.
//!
//! Builtins are consulted when an identifier misses the whole environment
//! chain, so a user `let` can shadow any of them. They receive their
//! arguments already evaluated and report failures as in-band error
//! values like every other runtime error.

use super::value::{NULL, Value};

/// A built-in function: a name plus a native implementation.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: fn(Vec<Value>) -> Value,
}

impl Builtin {
    /// Looks up a builtin by name.
    pub fn lookup(name: &str) -> Option<Builtin> {
        let (name, func): (&'static str, fn(Vec<Value>) -> Value) = match name {
            "len" => ("len", builtin_len),
            "first" => ("first", builtin_first),
            "last" => ("last", builtin_last),
            "rest" => ("rest", builtin_rest),
            "push" => ("push", builtin_push),
            "puts" => ("puts", builtin_puts),
            _ => return None,
        };
        Some(Builtin { name, func })
    }

    /// Returns the builtin's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the builtin with the given arguments.
    pub fn apply(&self, args: Vec<Value>) -> Value {
        (self.func)(args)
    }
}

fn wrong_argument_count(got: usize, want: usize) -> Value {
    Value::error(format!(
        "wrong number of arguments. got={}, want={}",
        got, want
    ))
}

/// `len(x)`: the length of a string (in bytes) or an array.
fn builtin_len(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_argument_count(args.len(), 1);
    }
    match &args[0] {
        Value::String(value) => Value::Integer(value.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!(
            "argument to \"len\" not supported, got {}",
            other.type_name()
        )),
    }
}

/// `first(xs)`: the first element of an array, or `null` when empty.
fn builtin_first(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_argument_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(NULL),
        other => Value::error(format!(
            "argument to \"first\" must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// `last(xs)`: the last element of an array, or `null` when empty.
fn builtin_last(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_argument_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(NULL),
        other => Value::error(format!(
            "argument to \"last\" must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// `rest(xs)`: a fresh array holding everything but the first element,
/// or `null` when the array is empty.
fn builtin_rest(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return wrong_argument_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                NULL
            } else {
                Value::Array(elements[1..].to_vec())
            }
        }
        other => Value::error(format!(
            "argument to \"rest\" must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// `push(xs, v)`: a fresh array with `v` appended. The original array
/// is unchanged.
fn builtin_push(mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return wrong_argument_count(args.len(), 2);
    }
    let value = args.remove(1);
    let target = args.remove(0);
    match target {
        Value::Array(mut elements) => {
            elements.push(value);
            Value::Array(elements)
        }
        other => Value::error(format!(
            "argument to \"push\" must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// `puts(...)`: prints each argument on its own line; returns `null`.
fn builtin_puts(args: Vec<Value>) -> Value {
    for arg in &args {
        println!("{}", arg.inspect());
    }
    NULL
}
