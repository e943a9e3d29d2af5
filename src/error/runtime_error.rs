#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to look up or `set!` a variable that no frame defines.
    UnboundVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Applied a value that is neither a builtin procedure nor a closure.
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a procedure.
    ArgumentCountMismatch {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A list value was expected, but not found.
    ExpectedList {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A symbol was expected, but not found (e.g. `(define 1 2)`).
    ExpectedSymbol {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Encountered a form whose shape the evaluator does not recognize.
    UnknownExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Evaluated a structural error marker left behind by the parser.
    MalformedExpression {
        /// Description of the structural problem.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, line } => {
                write!(f, "Error on line {line}: Unbound variable '{name}'.")
            },
            Self::NotCallable { line } => write!(f,
                                                 "Error on line {line}: Tried to call a value that is not a procedure."),
            Self::ArgumentCountMismatch { line } => {
                write!(f, "Error on line {line}: Argument count mismatch.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ExpectedList { line } => write!(f, "Error on line {line}: Expected list."),
            Self::ExpectedSymbol { line } => write!(f, "Error on line {line}: Expected symbol."),
            Self::UnknownExpression { line } => {
                write!(f, "Error on line {line}: Expression is unknown.")
            },
            Self::MalformedExpression { message, line } => {
                write!(f, "Error on line {line}: Malformed expression: {message}.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
