/// Parser entry points.
///
/// Contains the `parse` function that turns one line of expression text
/// into an AST, plus the shared `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for boolean, comparison, bitwise,
/// shift, additive and multiplicative operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus, exponentiation, literals, names, function calls and
/// parenthesized groupings.
pub mod unary;
