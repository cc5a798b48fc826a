/// Tokenization of expression text.
pub mod lexer;

/// Recursive-descent parsing of tokens into ASTs.
pub mod parser;

/// Whitelist evaluation of ASTs against an environment.
pub mod evaluator;

/// Runtime value types.
pub mod value;

/// The variable environment and its seeded constants.
pub mod environment;

/// The line-oriented script processor with blocks, conditionals and loops.
pub mod script;
