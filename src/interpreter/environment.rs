use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Represents a single lexical scope frame.
///
/// Frames form a chain through the `outer` link: the root frame holds the
/// builtin bindings and has no outer, while each procedure invocation pushes
/// a fresh frame whose outer is the procedure's defining environment. Lookup
/// and assignment walk outward through the chain; definition always targets
/// the local frame.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    outer:    Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty root frame with no outer environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame chained to the given outer environment.
    ///
    /// # Parameters
    /// - `outer`: The enclosing environment, shared by reference.
    #[must_use]
    pub fn with_outer(outer: Rc<RefCell<Self>>) -> Self {
        Self { bindings: HashMap::new(),
               outer:    Some(outer), }
    }

    /// Resolves a name, searching this frame and then each outer frame.
    ///
    /// # Parameters
    /// - `name`: The symbol to resolve.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: A clone of the nearest binding.
    /// - `Err(RuntimeError::UnboundVariable)`: If no frame binds `name`.
    ///
    /// # Example
    /// ```
    /// use schemette::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(3.0));
    ///
    /// assert_eq!(env.lookup("x", 1).unwrap(), Value::Number(3.0));
    /// assert!(env.lookup("y", 1).is_err());
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Ok(value.clone());
        }

        match &self.outer {
            Some(outer) => outer.borrow().lookup(name, line),
            None => Err(RuntimeError::UnboundVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Binds a name in this frame, shadowing any outer binding.
    ///
    /// Redefining an existing local name replaces its value.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Mutates the nearest existing binding of a name.
    ///
    /// Walks outward through the chain and replaces the value in the first
    /// frame that binds `name`. Unlike [`define`], this never creates a new
    /// binding.
    ///
    /// # Parameters
    /// - `name`: The symbol to reassign.
    /// - `value`: The replacement value.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(())`: If some frame bound `name`.
    /// - `Err(RuntimeError::UnboundVariable)`: Otherwise. No frame is
    ///   modified in this case.
    ///
    /// [`define`]: Environment::define
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;

            return Ok(());
        }

        match &self.outer {
            Some(outer) => outer.borrow_mut().assign(name, value, line),
            None => Err(RuntimeError::UnboundVariable { name: name.to_string(),
                                                        line }),
        }
    }
}
