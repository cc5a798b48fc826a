use crate::{
    ast::{BinaryOperator, CompareOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Applies a binary operator to two already-evaluated values.
///
/// Numeric promotion is contagious upward (integer < real < complex) and
/// results collapse back down where they can: a complex intermediate with a
/// zero imaginary part comes out as a real.
///
/// # Errors
/// `DivisionByZero` for zero divisors, `DomainError` for operand shapes an
/// operator does not accept (bitwise on reals, modulo on complex) and for
/// integer overflow.
pub fn eval_binary(op: BinaryOperator, lhs: Value, rhs: Value) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add
        | BinaryOperator::Sub
        | BinaryOperator::Mul
        | BinaryOperator::Div
        | BinaryOperator::Mod => eval_arithmetic(op, lhs, rhs),
        BinaryOperator::Pow => eval_pow(lhs, rhs),
        BinaryOperator::BitAnd
        | BinaryOperator::BitOr
        | BinaryOperator::BitXor
        | BinaryOperator::Shl
        | BinaryOperator::Shr => eval_bitwise(op, lhs, rhs),
    }
}

/// Evaluates the five arithmetic operators with numeric promotion.
///
/// Division is always true division: `7 / 2` is `3.5` even for integer
/// operands. Integer modulo follows the sign of the divisor, matching the
/// mathematical convention where `-7 % 3` is `2`.
fn eval_arithmetic(op: BinaryOperator, lhs: Value, rhs: Value) -> EvalResult<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs) {
        return eval_integer_arithmetic(op, a, b);
    }

    if matches!(lhs, Value::Complex(_)) || matches!(rhs, Value::Complex(_)) {
        return eval_complex_arithmetic(op, lhs.as_complex()?, rhs.as_complex()?);
    }

    eval_real_arithmetic(op, lhs.as_real()?, rhs.as_real()?)
}

fn eval_integer_arithmetic(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
    let overflow = |operation: &str| RuntimeError::DomainError { details: format!("integer overflow in {a} {operation} {b}"), };

    match op {
        BinaryOperator::Add => a.checked_add(b)
                                .map(Value::Integer)
                                .ok_or_else(|| overflow("+")),
        BinaryOperator::Sub => a.checked_sub(b)
                                .map(Value::Integer)
                                .ok_or_else(|| overflow("-")),
        BinaryOperator::Mul => a.checked_mul(b)
                                .map(Value::Integer)
                                .ok_or_else(|| overflow("*")),
        BinaryOperator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            eval_real_arithmetic(op, Value::Integer(a).as_real()?, Value::Integer(b).as_real()?)
        },
        BinaryOperator::Mod => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            let r = a % b;
            let result = if r != 0 && (r < 0) != (b < 0) { r + b } else { r };
            Ok(Value::Integer(result))
        },
        _ => Err(RuntimeError::Internal { details: format!("operator '{op}' routed to arithmetic evaluation"), }),
    }
}

fn eval_real_arithmetic(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Real(a + b)),
        BinaryOperator::Sub => Ok(Value::Real(a - b)),
        BinaryOperator::Mul => Ok(Value::Real(a * b)),
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Real(a / b))
        },
        BinaryOperator::Mod => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            let r = a % b;
            let result = if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r };
            Ok(Value::Real(result))
        },
        _ => Err(RuntimeError::Internal { details: format!("operator '{op}' routed to arithmetic evaluation"), }),
    }
}

fn eval_complex_arithmetic(op: BinaryOperator, a: ComplexNumber, b: ComplexNumber) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok((a + b).checked_as_real()),
        BinaryOperator::Sub => Ok((a - b).checked_as_real()),
        BinaryOperator::Mul => Ok((a * b).checked_as_real()),
        BinaryOperator::Div => {
            if b.real == 0.0 && b.imaginary == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok((a / b).checked_as_real())
        },
        BinaryOperator::Mod => {
            Err(RuntimeError::DomainError { details: "modulo is not defined for complex numbers".to_string(), })
        },
        _ => Err(RuntimeError::Internal { details: format!("operator '{op}' routed to arithmetic evaluation"), }),
    }
}

/// Evaluates exponentiation.
///
/// Non-negative integer powers of integers stay exact; a negative real
/// base raised to a fractional power widens to the complex plane instead
/// of producing NaN.
fn eval_pow(lhs: Value, rhs: Value) -> EvalResult<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs) {
        if b >= 0 {
            let exp = u32::try_from(b).map_err(|_| RuntimeError::DomainError { details: format!("exponent {b} is too large"), })?;
            return a.checked_pow(exp)
                    .map(Value::Integer)
                    .ok_or_else(|| RuntimeError::DomainError { details: format!("integer overflow in {a} ** {b}"), });
        }
        if a == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        return eval_pow(Value::Real(lhs.as_real()?), Value::Real(rhs.as_real()?));
    }

    if matches!(lhs, Value::Complex(_)) || matches!(rhs, Value::Complex(_)) {
        return eval_complex_pow(lhs.as_complex()?, rhs.as_complex()?);
    }

    let base = lhs.as_real()?;
    let exp = rhs.as_real()?;

    if base == 0.0 && exp < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exp.fract() != 0.0 {
        return Ok(ComplexNumber::from(base).powf(exp).checked_as_real());
    }
    Ok(Value::Real(base.powf(exp)))
}

fn eval_complex_pow(base: ComplexNumber, exp: ComplexNumber) -> EvalResult<Value> {
    if base.real == 0.0 && base.imaginary == 0.0 {
        if exp.real == 0.0 && exp.imaginary == 0.0 {
            return Ok(Value::Integer(1));
        }
        if exp.real > 0.0 && exp.imaginary == 0.0 {
            return Ok(Value::Real(0.0));
        }
        return Err(RuntimeError::DivisionByZero);
    }

    if exp.imaginary == 0.0 {
        return Ok(base.powf(exp.real).checked_as_real());
    }
    Ok(base.powc(exp).checked_as_real())
}

/// Evaluates the bitwise and shift operators.
///
/// These are integer-only; a real or complex operand is a domain error
/// rather than an implicit truncation. Shift counts must be in `0..64`.
fn eval_bitwise(op: BinaryOperator, lhs: Value, rhs: Value) -> EvalResult<Value> {
    let a = lhs.as_integer()?;
    let b = rhs.as_integer()?;

    match op {
        BinaryOperator::BitAnd => Ok(Value::Integer(a & b)),
        BinaryOperator::BitOr => Ok(Value::Integer(a | b)),
        BinaryOperator::BitXor => Ok(Value::Integer(a ^ b)),
        BinaryOperator::Shl | BinaryOperator::Shr => {
            let count = u32::try_from(b).map_err(|_| RuntimeError::DomainError { details: format!("invalid shift count {b}"), })?;
            let shifted = match op {
                BinaryOperator::Shl => a.checked_shl(count),
                _ => a.checked_shr(count),
            };
            shifted.map(Value::Integer)
                   .ok_or_else(|| RuntimeError::DomainError { details: format!("invalid shift count {b}"), })
        },
        _ => Err(RuntimeError::Internal { details: format!("operator '{op}' routed to bitwise evaluation"), }),
    }
}

/// Applies a comparison operator, producing the canonical `0`/`1` integer.
///
/// Integer pairs compare exactly. Complex values support only equality and
/// inequality; asking for an ordering on them is a domain error.
///
/// # Errors
/// `DomainError` for an ordering comparison involving a complex value.
pub fn eval_compare(op: CompareOperator, lhs: Value, rhs: Value) -> EvalResult<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs) {
        let truth = match op {
            CompareOperator::Lt => a < b,
            CompareOperator::Gt => a > b,
            CompareOperator::Le => a <= b,
            CompareOperator::Ge => a >= b,
            CompareOperator::Eq => a == b,
            CompareOperator::Ne => a != b,
        };
        return Ok(Value::from_bool(truth));
    }

    if matches!(lhs, Value::Complex(_)) || matches!(rhs, Value::Complex(_)) {
        let a = lhs.as_complex()?;
        let b = rhs.as_complex()?;
        return match op {
            CompareOperator::Eq => Ok(Value::from_bool(a == b)),
            CompareOperator::Ne => Ok(Value::from_bool(a != b)),
            _ => Err(RuntimeError::DomainError { details: format!("complex numbers have no ordering for '{op}'"), }),
        };
    }

    let a = lhs.as_real()?;
    let b = rhs.as_real()?;
    let truth = match op {
        CompareOperator::Lt => a < b,
        CompareOperator::Gt => a > b,
        CompareOperator::Le => a <= b,
        CompareOperator::Ge => a >= b,
        CompareOperator::Eq => a == b,
        CompareOperator::Ne => a != b,
    };
    Ok(Value::from_bool(truth))
}
