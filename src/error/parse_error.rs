#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant is a syntax error in the sense of the language contract:
/// the offending text does not belong to the supported grammar, and no AST
/// is produced for it.
pub enum ParseError {
    /// Found a token (or raw character) outside the grammar.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// A bare `=` appeared inside an expression. Assignment is a statement
    /// form, never part of an expression.
    AssignmentInExpression,
    /// A function call supplied more than one argument.
    MultiArgumentCall {
        /// The name of the called function.
        function: String,
    },
    /// A control-flow header (`if`/`while`) had no indented block after it.
    MissingBlock {
        /// The offending header line.
        header: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input.")
            },

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Extra tokens after expression. Check your input: {token}")
            },

            Self::AssignmentInExpression => {
                write!(f, "Assignment '=' is not allowed inside an expression.")
            },

            Self::MultiArgumentCall { function } => {
                write!(f, "Function '{function}' takes exactly one argument.")
            },

            Self::MissingBlock { header } => {
                write!(f, "Control line '{header}' has no indented block after it.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
