//! The runtime value domain.

use std::fmt;
use std::rc::Rc;

use crate::ast::{Block, Ident};

use super::builtins::Builtin;
use super::env::Env;

/// The canonical null value.
pub const NULL: Value = Value::Null;

/// The canonical `true` value.
pub const TRUE: Value = Value::Boolean(true);

/// The canonical `false` value.
pub const FALSE: Value = Value::Boolean(false);

/// A user-defined function value: a closure.
///
/// `env` is the environment that was current when the `fn` literal was
/// evaluated; free variables in `body` resolve against it. The body and
/// parameter list are shared, not copied, between clones of the value.
pub struct Function {
    /// The parameter list, possibly with duplicate names (last one wins).
    pub params: Vec<Ident>,
    /// The function body.
    pub body: Block,
    /// The captured defining environment.
    pub env: Env,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment is omitted: closures bound by `let`
        // sit inside the environment they capture, and following that
        // edge would recurse forever.
        f.debug_struct("Function")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// A runtime value.
///
/// `ReturnValue` and `Error` are in-band control markers, not values a
/// program can observe: `ReturnValue` unwraps at the nearest function
/// boundary (or the top of the program), and `Error` short-circuits
/// everything up to the driver.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An immutable string.
    String(String),
    /// An ordered, possibly heterogeneous sequence of values.
    Array(Vec<Value>),
    /// A user-defined function with its captured environment.
    Function(Rc<Function>),
    /// A built-in function.
    Builtin(Builtin),
    /// Wraps the operand of `return` while it unwinds to the nearest
    /// function boundary.
    ReturnValue(Box<Value>),
    /// A runtime error. Propagates all the way out of the evaluation.
    Error(String),
}

impl Value {
    /// Creates an error value from a message.
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    /// Returns `true` if this value is an error marker.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns the truthiness of this value.
    ///
    /// Only `false` and `null` are falsy; everything else is truthy,
    /// including `0` and the empty string.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// Returns the stable type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    /// Renders this value for display to the user.
    ///
    /// Strings render as their raw bytes without quoting; array elements
    /// render recursively; errors render with an `ERROR:` prefix.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::Null => "null".to_string(),
            Value::String(value) => value.clone(),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(Value::inspect).collect();
                format!("[{}]", rendered.join(", "))
            }
            Value::Function(function) => {
                let params: Vec<&str> =
                    function.params.iter().map(|p| p.name.as_str()).collect();
                format!("fn({}) {}", params.join(", "), function.body)
            }
            Value::Builtin(builtin) => format!("builtin function {}", builtin.name()),
            Value::ReturnValue(value) => value.inspect(),
            Value::Error(message) => format!("ERROR: {}", message),
        }
    }
}

impl PartialEq for Value {
    /// Compares by variant and payload.
    ///
    /// Functions compare by identity; the canonical TRUE/FALSE/NULL
    /// instances are an optimization, never the basis of equality.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            (Value::ReturnValue(a), Value::ReturnValue(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}
