use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtin::Arity,
            core::{EvalResult, Interpreter},
        },
    },
};

/// Type alias for builtin procedure handlers.
///
/// A builtin receives the interpreter (so that procedures like `apply` can
/// call back into evaluation), the slice of already-evaluated argument
/// values, and the line number of the application. It returns a single value
/// wrapped in `EvalResult`.
pub type BuiltinFn = fn(&Interpreter, &[Value], usize) -> EvalResult<Value>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that evaluation can produce:
/// atoms, lists, and the two kinds of callable procedure. Composite values
/// are reference-shared through `Rc`, so returning or copying a list does not
/// clone its elements.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value: `#t` or `#f`. The only falsy value is `#f`; every
    /// other value, including `0` and the empty list, is truthy.
    Bool(bool),
    /// A string value.
    Str(String),
    /// An ordered sequence of values, produced by `list` and `quote`.
    List(Rc<Vec<Value>>),
    /// A primitive procedure installed in the root environment at startup.
    Builtin {
        /// The name the procedure is bound to, e.g. `"+"` or `"car"`.
        name:  &'static str,
        /// Allowed argument counts, checked before the handler runs.
        arity: Arity,
        /// The native handler.
        func:  BuiltinFn,
    },
    /// A user-defined procedure capturing its defining environment.
    Closure(Rc<Closure>),
    /// The result of forms that yield no value: `define`, `set!`, evaluating
    /// `()`, or an `if` with no taken branch.
    Unspecified,
}

/// A user-defined procedure value.
///
/// Captures the ordered parameter names, the single body expression, and the
/// defining environment by shared reference. Each invocation creates a fresh
/// child frame of the captured environment, so recursion and re-entrancy are
/// safe, while later mutations of the defining environment stay visible.
pub struct Closure {
    /// Parameter names, bound positionally at call time.
    pub params: Vec<String>,
    /// The body expression evaluated on invocation.
    pub body:   Expr,
    /// The environment the `lambda` form was evaluated in.
    pub env:    Rc<RefCell<Environment>>,
}

impl std::fmt::Debug for Closure {
    // The captured environment may transitively contain this closure, so it
    // is omitted from the debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
         .field("params", &self.params)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Builtin { name: a, .. }, Self::Builtin { name: b, .. }) => a == b,
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Unspecified, Self::Unspecified) => true,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use schemette::interpreter::value::Value;
    ///
    /// let x = Value::Number(10.0);
    /// assert_eq!(x.as_number(1).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_number(1).is_err());
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to a list, or returns an error if it is not one.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(&[Value])`: The list elements.
    /// - `Err(RuntimeError::ExpectedList)`: Otherwise.
    pub fn as_list(&self, line: usize) -> EvalResult<&[Self]> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(RuntimeError::ExpectedList { line }),
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Every value except the boolean `#f` is truthy; in particular `0`,
    /// `""`, and the empty list are all truthy.
    ///
    /// # Example
    /// ```
    /// use schemette::interpreter::value::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::List(vec![].into()).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "#t"),
            Self::Bool(false) => write!(f, "#f"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "(")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ")")
            },
            Self::Builtin { name, .. } => write!(f, "#<builtin {name}>"),
            Self::Closure(_) => write!(f, "#<closure>"),
            Self::Unspecified => write!(f, "#<unspecified>"),
        }
    }
}
