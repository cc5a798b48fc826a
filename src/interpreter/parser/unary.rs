use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is numeric negation. It is right-associative
/// (`--x` parses as `-(-x)`) and binds looser than exponentiation on its
/// right, so `-2 ** 2` is `-(2 ** 2)`.
///
/// Negation desugars to `0 - operand` at parse time. The AST node set is
/// closed over exactly the variants the evaluator whitelists, and
/// subtraction already covers negation for every value shape.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { op:    BinaryOperator::Sub,
                                   left:  Box::new(Expr::Literal { value: LiteralValue::Integer(0), }),
                                   right: Box::new(operand), });
    }

    parse_power(tokens)
}

/// Parses exponentiation expressions.
///
/// `**` is right-associative and its right operand is a full unary
/// expression, so `2 ** 3 ** 2` is `2 ** (3 ** 2)` and `2 ** -1` parses.
///
/// Grammar: `power := primary ("**" unary)?`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_primary(tokens)?;

    if let Some(Token::StarStar) = tokens.peek() {
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { op:    BinaryOperator::Pow,
                                   left:  Box::new(left),
                                   right: Box::new(right), });
    }

    Ok(left)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals
/// - variable names
/// - single-argument function calls `name(expr)`
/// - parenthesized expressions
///
/// There is deliberately nothing else: no attribute access, no collection
/// literals, no multi-argument calls. A bare `=` gets its own error so a
/// misplaced assignment reads as what it is.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | identifier "(" expression ")"
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Integer(n)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n), }),
        Some(Token::Real(r)) => Ok(Expr::Literal { value: LiteralValue::Real(*r), }),

        Some(Token::Identifier(name)) => {
            if let Some(Token::LParen) = tokens.peek() {
                tokens.next();
                parse_call(tokens, name)
            } else {
                Ok(Expr::Name { name: name.clone(), })
            }
        },

        Some(Token::LParen) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen),
            }
        },

        Some(Token::Equals) => Err(ParseError::AssignmentInExpression),

        Some(token) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"), }),

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the argument list of a function call, positioned just after the
/// opening parenthesis.
///
/// Exactly one argument is allowed; a comma is called out specifically so
/// a two-argument call fails with a useful message instead of a generic
/// token error.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, function: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let argument = parse_expression(tokens)?;

    match tokens.next() {
        Some(Token::RParen) => Ok(Expr::Call { function: function.to_string(),
                                               argument: Box::new(argument), }),
        Some(Token::Comma) => Err(ParseError::MultiArgumentCall { function: function.to_string(), }),
        _ => Err(ParseError::ExpectedClosingParen),
    }
}
