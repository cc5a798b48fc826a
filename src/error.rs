/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// text. Parse errors cover syntax mistakes, unexpected tokens, grammar
/// constructs outside the whitelist, and malformed block structure.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, division by zero, domain violations, and unknown functions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unified error value returned by the public entry points.
///
/// Both entry points return errors as values; nothing in the crate panics on
/// bad input, and a failing line never aborts the rest of a script.
pub enum Error {
    /// The text did not match the supported grammar.
    Parse(ParseError),
    /// The expression parsed but failed to evaluate.
    Runtime(RuntimeError),
    /// A failure on the right-hand side of an assignment line, annotated
    /// with the offending source line. The target variable is left
    /// untouched when this is produced.
    Equation {
        /// The full trimmed source line of the failed assignment.
        line:   String,
        /// The underlying parse or runtime failure.
        source: Box<Error>,
    },
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
            Self::Equation { line, source } => {
                write!(f, "Error in equation '{line}': {source}")
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
            Self::Equation { source, .. } => Some(source.as_ref()),
        }
    }
}
