/// Evaluation entry points.
///
/// Contains the `eval` function that walks an AST against an environment,
/// plus boolean operator handling.
pub mod core;

/// Binary arithmetic, comparison, bitwise and exponentiation semantics.
pub mod binary;

/// The built-in mathematical function table.
pub mod function;
