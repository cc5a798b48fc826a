#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is not in the environment.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not on the whitelist.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Attempted division or modulo with a zero right-hand operand.
    DivisionByZero,
    /// An operator or function received input outside its domain, for cases
    /// that cannot be widened to a complex result (bitwise operators on
    /// non-integers, `factorial` of a negative number, overflow, and so on).
    DomainError {
        /// Details about the domain violation.
        details: String,
    },
    /// The evaluator reached a state the parser contract rules out.
    Internal {
        /// Details about the inconsistency.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{name}'.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Unknown function '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::DomainError { details } => {
                write!(f, "Domain error: {details}.")
            },
            Self::Internal { details } => {
                write!(f, "Internal evaluator error: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
