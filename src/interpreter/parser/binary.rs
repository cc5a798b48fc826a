use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, BoolOperator, CompareOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses boolean OR expressions.
///
/// Consecutive `or` operands collect into a single `BoolOp` node with the
/// full operand list, so `a or b or c` is one node with three operands.
/// This is the loosest-binding level of the grammar.
///
/// Grammar: `bool_or := bool_and ("or" bool_and)*`
pub fn parse_bool_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let first = parse_bool_and(tokens)?;

    if !matches!(tokens.peek(), Some(Token::Or)) {
        return Ok(first);
    }

    let mut operands = vec![first];
    while let Some(Token::Or) = tokens.peek() {
        tokens.next();
        operands.push(parse_bool_and(tokens)?);
    }

    Ok(Expr::BoolOp { op: BoolOperator::Or,
                      operands })
}

/// Parses boolean AND expressions.
///
/// Like [`parse_bool_or`], consecutive `and` operands collect into one
/// `BoolOp` node.
///
/// Grammar: `bool_and := comparison ("and" comparison)*`
pub fn parse_bool_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let first = parse_comparison(tokens)?;

    if !matches!(tokens.peek(), Some(Token::And)) {
        return Ok(first);
    }

    let mut operands = vec![first];
    while let Some(Token::And) = tokens.peek() {
        tokens.next();
        operands.push(parse_comparison(tokens)?);
    }

    Ok(Expr::BoolOp { op: BoolOperator::And,
                      operands })
}

/// Parses a comparison.
///
/// Handles `<`, `>`, `<=`, `>=`, `==` and `!=`. Comparisons are
/// non-associative here: a chained `a < b < c` is rejected rather than
/// silently re-grouped.
///
/// Grammar: `comparison := bitor (compare_op bitor)?`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_bitor(tokens)?;

    let Some(op) = tokens.peek().and_then(|&token| token_to_compare_operator(token)) else {
        return Ok(left);
    };
    tokens.next();

    let right = parse_bitor(tokens)?;

    if let Some(chained) = tokens.peek().and_then(|&token| token_to_compare_operator(token)) {
        return Err(ParseError::UnexpectedToken { token: format!("chained comparison '{chained}'"), });
    }

    Ok(Expr::Compare { op,
                       left: Box::new(left),
                       right: Box::new(right) })
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bitor := bitxor ("|" bitxor)*`
pub fn parse_bitor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_bitxor(tokens)?;
    while let Some(Token::Pipe) = tokens.peek() {
        tokens.next();
        let right = parse_bitxor(tokens)?;
        left = Expr::BinaryOp { op:    BinaryOperator::BitOr,
                                left:  Box::new(left),
                                right: Box::new(right), };
    }
    Ok(left)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bitxor := bitand ("^" bitand)*`
pub fn parse_bitxor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_bitand(tokens)?;
    while let Some(Token::Caret) = tokens.peek() {
        tokens.next();
        let right = parse_bitand(tokens)?;
        left = Expr::BinaryOp { op:    BinaryOperator::BitXor,
                                left:  Box::new(left),
                                right: Box::new(right), };
    }
    Ok(left)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bitand := shift ("&" shift)*`
pub fn parse_bitand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_shift(tokens)?;
    while let Some(Token::Ampersand) = tokens.peek() {
        tokens.next();
        let right = parse_shift(tokens)?;
        left = Expr::BinaryOp { op:    BinaryOperator::BitAnd,
                                left:  Box::new(left),
                                right: Box::new(right), };
    }
    Ok(left)
}

/// Parses shift expressions.
///
/// Shifts bind looser than addition, so `1 << 2 + 3` shifts by five.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_additive(tokens)?;
    loop {
        let op = match tokens.peek() {
            Some(Token::ShlOp) => BinaryOperator::Shl,
            Some(Token::ShrOp) => BinaryOperator::Shr,
            _ => break,
        };
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        let op = match tokens.peek() {
            Some(Token::Plus) => BinaryOperator::Add,
            Some(Token::Minus) => BinaryOperator::Sub,
            _ => break,
        };
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        let op = match tokens.peek() {
            Some(Token::Star) => BinaryOperator::Mul,
            Some(Token::Slash) => BinaryOperator::Div,
            Some(Token::Percent) => BinaryOperator::Mod,
            _ => break,
        };
        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
pub const fn token_to_compare_operator(token: &Token) -> Option<CompareOperator> {
    match token {
        Token::Less => Some(CompareOperator::Lt),
        Token::Greater => Some(CompareOperator::Gt),
        Token::LessEqual => Some(CompareOperator::Le),
        Token::GreaterEqual => Some(CompareOperator::Ge),
        Token::EqualEqual => Some(CompareOperator::Eq),
        Token::BangEqual => Some(CompareOperator::Ne),
        _ => None,
    }
}
