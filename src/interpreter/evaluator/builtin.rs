use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::{BuiltinFn, Value},
    },
};

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin must receive `n` or more arguments.
/// - `Any` places no constraint on the argument count.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::Any => true,
        }
    }
}

/// Defines builtin procedures by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to populate the root environment),
/// - `BUILTIN_PROCEDURES` (public list of builtin names).
macro_rules! builtin_procedures {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_PROCEDURES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_procedures! {
    "+"             => { arity: Arity::Any,        func: add },
    "-"             => { arity: Arity::AtLeast(1), func: sub },
    "*"             => { arity: Arity::Any,        func: mul },
    "/"             => { arity: Arity::AtLeast(1), func: div },
    ">"             => { arity: Arity::Exact(2),   func: |i, args, line| compare(i, args, line, |a, b| a > b) },
    "<"             => { arity: Arity::Exact(2),   func: |i, args, line| compare(i, args, line, |a, b| a < b) },
    "="             => { arity: Arity::Exact(2),   func: |i, args, line| compare(i, args, line, |a, b| a == b) },
    "null?"         => { arity: Arity::Exact(1),   func: is_null },
    "car"           => { arity: Arity::Exact(1),   func: car },
    "cdr"           => { arity: Arity::Exact(1),   func: cdr },
    "cons"          => { arity: Arity::Exact(2),   func: cons },
    "list"          => { arity: Arity::Any,        func: list },
    "len"           => { arity: Arity::AtLeast(1), func: len },
    "apply"         => { arity: Arity::AtLeast(1), func: apply },
    "string-append" => { arity: Arity::Any,        func: string_append },
    "begin"         => { arity: Arity::AtLeast(1), func: begin },
}

/// Installs every builtin procedure into the given environment frame.
pub fn install(env: &mut Environment) {
    for def in BUILTIN_TABLE {
        env.define(def.name,
                   Value::Builtin { name:  def.name,
                                    arity: def.arity,
                                    func:  def.func, });
    }
}

/// Sums all arguments. With no arguments the result is `0`.
fn add(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut total = 0.0;

    for arg in args {
        total += arg.as_number(line)?;
    }

    Ok(Value::Number(total))
}

/// Subtracts each remaining argument from the first.
fn sub(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut total = args[0].as_number(line)?;

    for arg in &args[1..] {
        total -= arg.as_number(line)?;
    }

    Ok(Value::Number(total))
}

/// Multiplies all arguments. With no arguments the result is `1`.
fn mul(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut total = 1.0;

    for arg in args {
        total *= arg.as_number(line)?;
    }

    Ok(Value::Number(total))
}

/// Divides the first argument by each remaining argument in turn.
///
/// Division follows IEEE 754, so dividing a non-zero number by zero yields
/// an infinity rather than an error.
fn div(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut total = args[0].as_number(line)?;

    for arg in &args[1..] {
        total /= arg.as_number(line)?;
    }

    Ok(Value::Number(total))
}

fn compare(_: &Interpreter,
           args: &[Value],
           line: usize,
           op: fn(f64, f64) -> bool)
           -> EvalResult<Value> {
    let lhs = args[0].as_number(line)?;
    let rhs = args[1].as_number(line)?;

    Ok(Value::Bool(op(lhs, rhs)))
}

/// Tests whether the argument is the empty list.
fn is_null(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let items = args[0].as_list(line)?;

    Ok(Value::Bool(items.is_empty()))
}

/// Returns the first element of a list. Fails on the empty list.
fn car(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let items = args[0].as_list(line)?;

    items.first().cloned().ok_or_else(|| {
                               RuntimeError::InvalidArgument {
            details: "car of an empty list".to_string(),
            line,
        }
                           })
}

/// Returns a list of all elements after the first. The cdr of the empty
/// list is the empty list.
fn cdr(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let items = args[0].as_list(line)?;
    let rest = items.iter().skip(1).cloned().collect::<Vec<Value>>();

    Ok(Value::List(Rc::new(rest)))
}

/// Prepends the first argument to the second, which must be a list.
fn cons(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let tail = args[1].as_list(line)?;
    let mut items = Vec::with_capacity(tail.len() + 1);

    items.push(args[0].clone());
    items.extend_from_slice(tail);

    Ok(Value::List(Rc::new(items)))
}

/// Collects all arguments into a list.
fn list(_: &Interpreter, args: &[Value], _: usize) -> EvalResult<Value> {
    Ok(Value::List(Rc::new(args.to_vec())))
}

/// Returns the length of the first argument, which must be a list.
#[allow(clippy::cast_precision_loss)]
fn len(_: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    let items = args[0].as_list(line)?;

    Ok(Value::Number(items.len() as f64))
}

/// Invokes the first argument as a procedure on the remaining arguments.
fn apply(interpreter: &Interpreter, args: &[Value], line: usize) -> EvalResult<Value> {
    interpreter.apply(&args[0], &args[1..], line)
}

/// Concatenates the display form of every argument into a single string.
fn string_append(_: &Interpreter, args: &[Value], _: usize) -> EvalResult<Value> {
    let mut result = String::new();

    for arg in args {
        result.push_str(&arg.to_string());
    }

    Ok(Value::Str(result))
}

/// Returns its last argument.
///
/// Arguments arrive already evaluated in order, so sequencing side effects
/// such as `define` falls out of ordinary application.
fn begin(_: &Interpreter, args: &[Value], _: usize) -> EvalResult<Value> {
    // Arity is AtLeast(1), so the slice is never empty.
    Ok(args[args.len() - 1].clone())
}
