use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_bool_or,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one line of expression text into an AST.
///
/// Parsing is total and side-effect-free: it never touches the environment
/// and never invokes host functionality. Text that does not match the
/// grammar fails here, which is what makes the evaluator's whitelist
/// enforceable — nothing outside the fixed node set can ever reach
/// evaluation.
///
/// # Errors
/// Returns a [`ParseError`] for empty input, lexically invalid characters,
/// grammar violations, a bare `=`, or trailing tokens after a complete
/// expression.
///
/// # Example
/// ```
/// use numera::interpreter::parser::core::parse;
///
/// assert!(parse("3 + 5 * 2").is_ok());
/// assert!(parse("x = 3").is_err());
/// assert!(parse("3 +").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        None => Ok(expr),
        Some(Token::Equals) => Err(ParseError::AssignmentInExpression),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"), }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, boolean OR, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := bool_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_bool_or(tokens)
}
