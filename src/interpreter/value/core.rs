use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::value::complex::ComplexNumber,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these three numeric shapes. There is
/// no boolean variant: comparisons and boolean operators produce
/// `Integer(0)` or `Integer(1)`, so the result of `x > 1` is an ordinary
/// number that can be assigned and computed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision floating-point number.
    Real(f64),
    /// A complex number, produced by `complex()` or by domain widening.
    Complex(ComplexNumber),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is complex
    /// or an integer too large to represent exactly.
    ///
    /// # Errors
    /// `DomainError` for complex values and for integers outside `±2^53`.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// ```
    pub fn as_real(&self) -> Result<f64, RuntimeError> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n),
            Self::Complex(_) => {
                Err(RuntimeError::DomainError { details: format!("expected a real number, found the complex value {self}"), })
            },
        }
    }

    /// Converts the value to a [`ComplexNumber`].
    ///
    /// # Errors
    /// `DomainError` if an integer operand is too large to represent as
    /// `f64` exactly.
    pub fn as_complex(&self) -> Result<ComplexNumber, RuntimeError> {
        match self {
            Self::Complex(c) => Ok(*c),
            Self::Real(r) => Ok(ComplexNumber::from(*r)),
            Self::Integer(n) => Ok(ComplexNumber::from(i64_to_f64_checked(*n)?)),
        }
    }

    /// Returns the underlying integer, or an error for real and complex
    /// values. Bitwise and shift operators go through this.
    ///
    /// # Errors
    /// `DomainError` if the value is not an integer.
    pub fn as_integer(&self) -> Result<i64, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(_) | Self::Complex(_) => {
                Err(RuntimeError::DomainError { details: format!("expected an integer, found {self}"), })
            },
        }
    }

    /// Coerces the value to a truth value: zero is falsy, everything else
    /// is truthy. This is the single truthiness rule shared by boolean
    /// operators, `if` conditions, and `while` conditions.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Complex(c) => c.real != 0.0 || c.imaginary != 0.0,
        }
    }

    /// Builds the canonical `0`/`1` integer from a truth value.
    #[must_use]
    pub const fn from_bool(truth: bool) -> Self {
        if truth { Self::Integer(1) } else { Self::Integer(0) }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}
