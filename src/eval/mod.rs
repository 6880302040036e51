//! The evaluator for the Kea programming language.
//!
//! This module walks the AST produced by the [`crate::parser`] and
//! computes [`Value`]s against an [`Environment`] chain.
//!
//! # Overview
//!
//! Evaluation is a pure recursive dispatch: one `match` per node kind,
//! threading a shared environment handle. Two in-band markers steer
//! control flow:
//!
//! - [`Value::ReturnValue`] wraps the operand of `return` and unwinds
//!   through enclosing blocks WITHOUT unwrapping, so it reaches the
//!   nearest function boundary, where the call unwraps it. The program
//!   level also unwraps, so a top-level `return` ends the program.
//! - [`Value::Error`] propagates the same way but is never unwrapped:
//!   a runtime error bubbles out of every block and call to the driver.
//!
//! Truthiness is permissive: only `false` and `null` are falsy, every
//! other value (including `0` and `""`) is truthy.
//!
//! # Scoping
//!
//! Environments are created at program start and per function call; a
//! call's frame encloses the function's CAPTURED environment (lexical
//! scoping), not the caller's. Blocks do not open scopes.
//!
//! # Module Structure
//!
//! - [`value`] - The runtime value domain
//! - [`env`] - Environment frames and the shared-handle chain
//! - [`builtins`] - Built-in functions (`len`, `first`, `last`, `rest`,
//!   `push`, `puts`)
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The nodes being evaluated
//! * [`crate::parser`] - Produces the AST

mod builtins;
mod env;
mod value;

#[cfg(test)]
mod tests;

pub use builtins::Builtin;
pub use env::{Env, Environment};
pub use value::{FALSE, Function, NULL, TRUE, Value};

use std::rc::Rc;

use crate::ast::{Block, Expr, ExprKind, InfixOp, PrefixOp, Program, Stmt, StmtKind};

/// Evaluates a program against an environment.
///
/// Statements run in order; the last statement's value is the result. A
/// `return` at the top level ends the program early with its (unwrapped)
/// operand; an error ends it with the error value.
pub fn eval(program: &Program, env: &Env) -> Value {
    let mut result = NULL;

    for stmt in &program.statements {
        result = eval_stmt(stmt, env);
        match result {
            Value::ReturnValue(value) => return *value,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_stmt(stmt: &Stmt, env: &Env) -> Value {
    match &stmt.kind {
        StmtKind::Expr(expr) => eval_expr(expr, env),
        StmtKind::Let { name, value } => {
            let value = eval_expr(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.name.clone(), value);
            NULL
        }
        StmtKind::Return(value) => {
            let value = eval_expr(value, env);
            if value.is_error() {
                return value;
            }
            Value::ReturnValue(Box::new(value))
        }
    }
}

/// Evaluates a block, propagating `ReturnValue` and `Error` unwrapped so
/// they keep unwinding through enclosing blocks.
fn eval_block(block: &Block, env: &Env) -> Value {
    let mut result = NULL;

    for stmt in &block.statements {
        result = eval_stmt(stmt, env);
        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_expr(expr: &Expr, env: &Env) -> Value {
    match &expr.kind {
        ExprKind::IntLiteral(value) => Value::Integer(*value),
        ExprKind::BoolLiteral(value) => native_bool(*value),
        ExprKind::StringLiteral(value) => Value::String(value.clone()),
        ExprKind::Identifier(name) => eval_identifier(name, env),
        ExprKind::ArrayLiteral(elements) => match eval_expressions(elements, env) {
            Ok(elements) => Value::Array(elements),
            Err(error) => error,
        },
        ExprKind::Prefix { op, right } => {
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix(*op, right)
        }
        ExprKind::Infix { op, left, right } => {
            let left = eval_expr(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix(*op, left, right)
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expr(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                NULL
            }
        }
        ExprKind::FnLiteral { params, body } => Value::Function(Rc::new(Function {
            params: params.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        })),
        ExprKind::Call { callee, args } => {
            let callee = eval_expr(callee, env);
            if callee.is_error() {
                return callee;
            }
            match eval_expressions(args, env) {
                Ok(args) => apply_function(callee, args),
                Err(error) => error,
            }
        }
        ExprKind::Index { object, index } => {
            let object = eval_expr(object, env);
            if object.is_error() {
                return object;
            }
            let index = eval_expr(index, env);
            if index.is_error() {
                return index;
            }
            eval_index(object, index)
        }
    }
}

/// Evaluates an expression list left to right, stopping on the first
/// error.
fn eval_expressions(exprs: &[Expr], env: &Env) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        let value = eval_expr(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }

    Ok(values)
}

fn eval_identifier(name: &str, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = Builtin::lookup(name) {
        return Value::Builtin(builtin);
    }
    Value::error(format!("identifier not found: {}", name))
}

fn native_bool(value: bool) -> Value {
    if value { TRUE } else { FALSE }
}

fn eval_prefix(op: PrefixOp, right: Value) -> Value {
    match op {
        PrefixOp::Bang => eval_bang(right),
        PrefixOp::Neg => match right {
            Value::Integer(value) => Value::Integer(value.wrapping_neg()),
            other => Value::error(format!("unknown operator: -{}", other.type_name())),
        },
    }
}

/// `!true` is `false`, `!false` is `true`, `!null` is `true`, and any
/// other operand is truthy, so its negation is `false`.
fn eval_bang(value: Value) -> Value {
    native_bool(!value.is_truthy())
}

fn eval_infix(op: InfixOp, left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => eval_integer_infix(op, left, right),
        (Value::String(left), Value::String(right)) => eval_string_infix(op, left, right),
        (Value::Boolean(left), Value::Boolean(right)) => match op {
            InfixOp::Eq => native_bool(left == right),
            InfixOp::NotEq => native_bool(left != right),
            _ => Value::error(format!("unknown operator: BOOLEAN {} BOOLEAN", op)),
        },
        (Value::Null, Value::Null) => match op {
            InfixOp::Eq => TRUE,
            InfixOp::NotEq => FALSE,
            _ => Value::error(format!("unknown operator: NULL {} NULL", op)),
        },
        (left, right) if left.type_name() != right.type_name() => Value::error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        )),
        (left, right) => Value::error(format!(
            "unknown operator: {} {} {}",
            left.type_name(),
            op,
            right.type_name()
        )),
    }
}

fn eval_integer_infix(op: InfixOp, left: i64, right: i64) -> Value {
    match op {
        // Arithmetic wraps on overflow (two's complement).
        InfixOp::Add => Value::Integer(left.wrapping_add(right)),
        InfixOp::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOp::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOp::Div => {
            if right == 0 {
                Value::error("division by zero")
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        }
        InfixOp::Lt => native_bool(left < right),
        InfixOp::Gt => native_bool(left > right),
        InfixOp::Eq => native_bool(left == right),
        InfixOp::NotEq => native_bool(left != right),
    }
}

fn eval_string_infix(op: InfixOp, left: String, right: String) -> Value {
    match op {
        InfixOp::Add => Value::String(left + &right),
        _ => Value::error(format!("unknown operator: STRING {} STRING", op)),
    }
}

/// Applies a function or builtin to already-evaluated arguments.
///
/// For a user function the call frame encloses the CAPTURED environment;
/// parameters bind positionally into it (duplicates: last wins), and a
/// `ReturnValue` escaping the body unwraps here so returns never cross a
/// call boundary. Errors are not unwrapped and keep bubbling.
fn apply_function(callee: Value, args: Vec<Value>) -> Value {
    match callee {
        Value::Function(function) => {
            if args.len() != function.params.len() {
                return Value::error(format!(
                    "wrong number of arguments. got={}, want={}",
                    args.len(),
                    function.params.len()
                ));
            }

            let call_env = Environment::new_enclosed(Rc::clone(&function.env));
            for (param, arg) in function.params.iter().zip(args) {
                call_env.borrow_mut().set(param.name.clone(), arg);
            }

            match eval_block(&function.body, &call_env) {
                Value::ReturnValue(value) => *value,
                other => other,
            }
        }
        Value::Builtin(builtin) => builtin.apply(args),
        other => Value::error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_index(object: Value, index: Value) -> Value {
    match (object, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            if index < 0 || index as usize >= elements.len() {
                NULL
            } else {
                elements[index as usize].clone()
            }
        }
        (object, _) => Value::error(format!(
            "index operator not supported: {}",
            object.type_name()
        )),
    }
}
