use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::f64_to_i64_checked,
};

/// The signature shared by every built-in function.
///
/// All built-ins take exactly one argument; the single-argument shape is
/// enforced at parse time, so the evaluator only ever hands one value here.
pub type BuiltinFn = fn(Value) -> EvalResult<Value>;

/// Defines the built-in functions by generating a lookup table and a name
/// list.
///
/// Each entry pairs a callable name with the function pointer implementing
/// it. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of built-in names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => sin,
    "cos"       => cos,
    "tan"       => tan,
    "exp"       => exp,
    "sqrt"      => sqrt,
    "log"       => log,
    "abs"       => abs,
    "floor"     => |value| unary_round("floor", value),
    "ceil"      => |value| unary_round("ceil", value),
    "round"     => |value| unary_round("round", value),
    "deg"       => deg,
    "rad"       => rad,
    "factorial" => factorial,
    "complex"   => complex_of,
}

/// Looks up `name` in the built-in table and applies it to `argument`.
///
/// This is the only call path out of the evaluator. There is no fallback:
/// a name outside [`BUILTIN_FUNCTIONS`] is an error, never a host call.
///
/// # Errors
/// `UnknownFunction` for names outside the table, plus whatever domain
/// errors the built-in itself raises.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::function::eval_call, value::core::Value};
///
/// assert_eq!(eval_call("abs", Value::Integer(-3)).unwrap(), Value::Integer(3));
/// assert!(eval_call("eval", Value::Integer(1)).is_err());
/// ```
pub fn eval_call(name: &str, argument: Value) -> EvalResult<Value> {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
        return Err(RuntimeError::UnknownFunction { name: name.to_string(), });
    };
    (builtin.func)(argument)
}

/// Implements a built-in that applies a real function to integer and real
/// arguments and the matching complex method to complex arguments.
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:ident, $complex_fn:ident) => {
        pub fn $fname(value: Value) -> EvalResult<Value> {
            match value {
                Value::Integer(_) | Value::Real(_) => Ok(Value::Real(value.as_real()?.$real_fn())),
                Value::Complex(c) => Ok(ComplexNumber::$complex_fn(c).checked_as_real()),
            }
        }
    };
}

real_complex_builtin!(sin, sin, sin);
real_complex_builtin!(cos, cos, cos);
real_complex_builtin!(tan, tan, tan);
real_complex_builtin!(exp, exp, exp);

/// Returns the square root, widening to the complex plane for negative
/// arguments instead of producing NaN.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::function::sqrt,
///                           value::{complex::ComplexNumber, core::Value}};
///
/// assert_eq!(sqrt(Value::Real(9.0)).unwrap(), Value::Real(3.0));
/// assert_eq!(sqrt(Value::Integer(-4)).unwrap(),
///            Value::Complex(ComplexNumber::new(0.0, 2.0)));
/// ```
pub fn sqrt(value: Value) -> EvalResult<Value> {
    match value {
        Value::Integer(_) | Value::Real(_) => {
            let r = value.as_real()?;
            if r < 0.0 {
                return Ok(Value::Complex(ComplexNumber::new(0.0, (-r).sqrt())));
            }
            Ok(Value::Real(r.sqrt()))
        },
        Value::Complex(c) => Ok(c.sqrt().checked_as_real()),
    }
}

/// Returns the natural logarithm, widening to the complex plane for
/// negative arguments. Zero has no logarithm in either plane.
pub fn log(value: Value) -> EvalResult<Value> {
    match value {
        Value::Integer(_) | Value::Real(_) => {
            let r = value.as_real()?;
            if r == 0.0 {
                return Err(RuntimeError::DomainError { details: "log(0) is undefined".to_string(), });
            }
            if r < 0.0 {
                return Ok(ComplexNumber::from(r).ln().checked_as_real());
            }
            Ok(Value::Real(r.ln()))
        },
        Value::Complex(c) => Ok(c.ln().checked_as_real()),
    }
}

/// Returns the absolute value. Integers stay integers; for a complex
/// argument this is the magnitude, which is real.
pub fn abs(value: Value) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => {
            n.checked_abs()
             .map(Value::Integer)
             .ok_or_else(|| RuntimeError::DomainError { details: format!("integer overflow in abs({n})"), })
        },
        Value::Real(r) => Ok(Value::Real(r.abs())),
        Value::Complex(c) => Ok(Value::Real(c.abs())),
    }
}

/// Implements `floor`, `ceil` and `round`, all of which produce an integer.
///
/// Rounding uses banker's rounding (ties to even), so `round(2.5)` is `2`
/// and `round(3.5)` is `4`. Integers pass through unchanged.
pub fn unary_round(name: &str, value: Value) -> EvalResult<Value> {
    if let Value::Integer(_) = value {
        return Ok(value);
    }

    let r = value.as_real()?;
    let rounded = match name {
        "floor" => r.floor(),
        "ceil" => r.ceil(),
        "round" => r.round_ties_even(),
        _ => unreachable!("unary_round called with '{name}'"),
    };
    Ok(Value::Integer(f64_to_i64_checked(rounded)?))
}

/// Converts radians to degrees. Complex angles have no degree form.
pub fn deg(value: Value) -> EvalResult<Value> {
    Ok(Value::Real(value.as_real()?.to_degrees()))
}

/// Converts degrees to radians. Complex angles have no radian form.
pub fn rad(value: Value) -> EvalResult<Value> {
    Ok(Value::Real(value.as_real()?.to_radians()))
}

/// Returns the factorial of a non-negative integer.
///
/// Real arguments must be whole; there is no gamma-function extension.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::function::factorial, value::core::Value};
///
/// assert_eq!(factorial(Value::Integer(5)).unwrap(), Value::Integer(120));
/// assert!(factorial(Value::Real(1.5)).is_err());
/// assert!(factorial(Value::Integer(-1)).is_err());
/// ```
pub fn factorial(value: Value) -> EvalResult<Value> {
    let n = match value {
        Value::Integer(n) => n,
        Value::Real(_) => f64_to_i64_checked(value.as_real()?)?,
        Value::Complex(_) => {
            return Err(RuntimeError::DomainError { details: "factorial is not defined for complex numbers".to_string(), });
        },
    };

    if n < 0 {
        return Err(RuntimeError::DomainError { details: format!("factorial of negative number {n}"), });
    }

    let mut result: i64 = 1;
    for k in 2..=n {
        result = result.checked_mul(k)
                       .ok_or_else(|| RuntimeError::DomainError { details: format!("integer overflow in factorial({n})"), })?;
    }
    Ok(Value::Integer(result))
}

/// Lifts a real number onto the real axis of the complex plane.
///
/// Unlike the arithmetic collapse rule, the result stays complex even with
/// a zero imaginary part; this is how a script opts in to complex
/// arithmetic explicitly.
pub fn complex_of(value: Value) -> EvalResult<Value> {
    Ok(Value::Complex(value.as_complex()?))
}
