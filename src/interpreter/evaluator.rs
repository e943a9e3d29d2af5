/// Builtin procedures installed in the root environment.
///
/// # Responsibilities
/// - Define the table of builtin procedures and their arities.
/// - Implement the native handlers for arithmetic, comparison, list
///   operations, and the remaining primitives.
/// - Install the table into a root environment frame.
pub mod builtin;
/// The heart of evaluation.
///
/// # Responsibilities
/// - Own the root environment and drive evaluation of expressions.
/// - Dispatch special forms and procedure applications.
/// - Invoke builtin and user-defined procedures with arity checking.
pub mod core;
/// Special form evaluation.
///
/// # Responsibilities
/// - Implement `define`, `if`, `quote`, `set!`, and `lambda`, which control
///   whether and how their operands are evaluated.
pub mod forms;
