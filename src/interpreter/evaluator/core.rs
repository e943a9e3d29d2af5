use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{builtin, forms},
        value::Value,
    },
};

/// Type alias for evaluation results.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Represents the evaluator and its root environment.
///
/// A fresh interpreter carries only the builtin bindings; `define` at the
/// top level adds to the root frame, so a single interpreter can be reused
/// across multiple programs and accumulates their definitions.
#[derive(Debug)]
pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates a new interpreter with the builtin procedures installed.
    #[must_use]
    pub fn new() -> Self {
        let mut root = Environment::new();
        builtin::install(&mut root);

        Self { globals: Rc::new(RefCell::new(root)), }
    }

    /// Returns the root environment frame.
    #[must_use]
    pub fn globals(&self) -> Rc<RefCell<Environment>> {
        Rc::clone(&self.globals)
    }

    /// Evaluates a top-level expression in the root environment.
    ///
    /// # Parameters
    /// - `expr`: The expression to evaluate.
    ///
    /// # Returns
    /// - `Ok(Value)`: The result of evaluation. Forms that produce no value
    ///   yield [`Value::Unspecified`].
    /// - `Err(RuntimeError)`: If evaluation fails.
    ///
    /// # Example
    /// ```
    /// use schemette::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let interpreter = Interpreter::new();
    /// let expr = Expr::Number { value: 42.0, line: 1, };
    ///
    /// assert_eq!(interpreter.run(&expr).unwrap(), Value::Number(42.0));
    /// ```
    pub fn run(&self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr, &self.globals)
    }

    /// Evaluates an expression in the given environment.
    ///
    /// Literals evaluate to themselves, symbols to their binding, and lists
    /// to either a special form or a procedure application depending on
    /// their head.
    pub fn eval(&self, expr: &Expr, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Symbol { name, line } => env.borrow().lookup(name, *line),
            Expr::Error { message, line } => {
                Err(RuntimeError::MalformedExpression { message: message.clone(),
                                                        line:    *line, })
            },
            Expr::List { items, line } => self.eval_list(items, *line, env),
        }
    }

    fn eval_list(&self,
                 items: &[Expr],
                 line: usize,
                 env: &Rc<RefCell<Environment>>)
                 -> EvalResult<Value> {
        let Some(head) = items.first() else {
            return Ok(Value::Unspecified);
        };

        if let Expr::Symbol { name, .. } = head {
            match name.as_str() {
                "define" => return forms::eval_define(self, &items[1..], line, env),
                "if" => return forms::eval_if(self, &items[1..], line, env),
                "quote" => return forms::eval_quote(&items[1..], line),
                "set!" => return forms::eval_set(self, &items[1..], line, env),
                "lambda" => return forms::eval_lambda(&items[1..], line, env),
                _ => {},
            }
        }

        self.eval_application(head, &items[1..], line, env)
    }

    fn eval_application(&self,
                        head: &Expr,
                        operands: &[Expr],
                        line: usize,
                        env: &Rc<RefCell<Environment>>)
                        -> EvalResult<Value> {
        let callee = self.eval(head, env)?;
        let args = operands.iter()
                           .map(|operand| self.eval(operand, env))
                           .collect::<EvalResult<Vec<Value>>>()?;

        self.apply(&callee, &args, line)
    }

    /// Invokes a procedure value with already-evaluated arguments.
    ///
    /// Checks the arity first, then either runs the native handler or binds
    /// the closure's parameters in a fresh frame of its captured environment
    /// and evaluates the body there.
    ///
    /// # Parameters
    /// - `callee`: The value in operator position.
    /// - `args`: The evaluated arguments.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The procedure's result.
    /// - `Err(RuntimeError::NotCallable)`: If `callee` is not a procedure.
    /// - `Err(RuntimeError::ArgumentCountMismatch)`: If the argument count
    ///   does not satisfy the procedure's arity.
    pub fn apply(&self, callee: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
        match callee {
            Value::Builtin { arity, func, .. } => {
                if !arity.check(args.len()) {
                    return Err(RuntimeError::ArgumentCountMismatch { line });
                }

                func(self, args, line)
            },
            Value::Closure(closure) => {
                if args.len() != closure.params.len() {
                    return Err(RuntimeError::ArgumentCountMismatch { line });
                }

                let mut frame = Environment::with_outer(Rc::clone(&closure.env));

                for (param, arg) in closure.params.iter().zip(args) {
                    frame.define(param, arg.clone());
                }

                self.eval(&closure.body, &Rc::new(RefCell::new(frame)))
            },
            _ => Err(RuntimeError::NotCallable { line }),
        }
    }
}
