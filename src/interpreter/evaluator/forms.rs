use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::{Closure, Value},
    },
};

/// Evaluates a `(define name expr)` form.
///
/// Binds `name` in the current frame to the value of `expr`, shadowing any
/// outer binding of the same name. Produces no value.
pub fn eval_define(interpreter: &Interpreter,
                   operands: &[Expr],
                   line: usize,
                   env: &Rc<RefCell<Environment>>)
                   -> EvalResult<Value> {
    let [target, body] = operands else {
        return Err(RuntimeError::UnknownExpression { line });
    };

    let Expr::Symbol { name, .. } = target else {
        return Err(RuntimeError::ExpectedSymbol { line: target.line_number(), });
    };

    let value = interpreter.eval(body, env)?;
    env.borrow_mut().define(name, value);

    Ok(Value::Unspecified)
}

/// Evaluates an `(if cond then else?)` form.
///
/// Only the taken branch is evaluated. Every value except `#f` counts as
/// true; an untaken missing `else` yields no value.
pub fn eval_if(interpreter: &Interpreter,
               operands: &[Expr],
               line: usize,
               env: &Rc<RefCell<Environment>>)
               -> EvalResult<Value> {
    let (condition, then_branch, else_branch) = match operands {
        [condition, then_branch] => (condition, then_branch, None),
        [condition, then_branch, else_branch] => (condition, then_branch, Some(else_branch)),
        _ => return Err(RuntimeError::UnknownExpression { line }),
    };

    if interpreter.eval(condition, env)?.is_truthy() {
        interpreter.eval(then_branch, env)
    } else {
        match else_branch {
            Some(branch) => interpreter.eval(branch, env),
            None => Ok(Value::Unspecified),
        }
    }
}

/// Evaluates a `(quote expr)` form.
///
/// Returns the operand as a value without evaluating it. Symbols become
/// strings of their name and lists quote recursively.
pub fn eval_quote(operands: &[Expr], line: usize) -> EvalResult<Value> {
    let [operand] = operands else {
        return Err(RuntimeError::UnknownExpression { line });
    };

    quote_expr(operand)
}

fn quote_expr(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(Value::Number(*value)),
        Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
        Expr::Str { value, .. } | Expr::Symbol { name: value, .. } => {
            Ok(Value::Str(value.clone()))
        },
        Expr::Error { message, line } => {
            Err(RuntimeError::MalformedExpression { message: message.clone(),
                                                    line:    *line, })
        },
        Expr::List { items, .. } => {
            let values = items.iter()
                              .map(quote_expr)
                              .collect::<EvalResult<Vec<Value>>>()?;

            Ok(Value::List(Rc::new(values)))
        },
    }
}

/// Evaluates a `(set! name expr)` form.
///
/// Mutates the nearest existing binding of `name`; fails if no enclosing
/// frame binds it. Produces no value.
pub fn eval_set(interpreter: &Interpreter,
                operands: &[Expr],
                line: usize,
                env: &Rc<RefCell<Environment>>)
                -> EvalResult<Value> {
    let [target, body] = operands else {
        return Err(RuntimeError::UnknownExpression { line });
    };

    let Expr::Symbol { name, line: name_line, } = target else {
        return Err(RuntimeError::ExpectedSymbol { line: target.line_number(), });
    };

    let value = interpreter.eval(body, env)?;
    env.borrow_mut().assign(name, value, *name_line)?;

    Ok(Value::Unspecified)
}

/// Evaluates a `(lambda (params...) body)` form.
///
/// Builds a closure capturing the current environment by shared reference.
/// The parameter list must contain only symbols.
pub fn eval_lambda(operands: &[Expr],
                   line: usize,
                   env: &Rc<RefCell<Environment>>)
                   -> EvalResult<Value> {
    let [params, body] = operands else {
        return Err(RuntimeError::UnknownExpression { line });
    };

    let Expr::List { items, .. } = params else {
        return Err(RuntimeError::ExpectedList { line: params.line_number(), });
    };

    let params = items.iter()
                      .map(|item| match item {
                          Expr::Symbol { name, .. } => Ok(name.clone()),
                          other => {
                              Err(RuntimeError::ExpectedSymbol { line: other.line_number(), })
                          },
                      })
                      .collect::<EvalResult<Vec<String>>>()?;

    Ok(Value::Closure(Rc::new(Closure { params,
                                        body: body.clone(),
                                        env: Rc::clone(env) })))
}
