use std::{fmt::Display, ops};

use crate::interpreter::value::core::Value;

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Converts to a `Value::Real` if the imaginary part is zero, otherwise
    /// returns `Value::Complex`.
    ///
    /// This is the collapse half of the widening policy: operations that
    /// stray into the complex plane and come back out land on the real line
    /// again.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::{complex::ComplexNumber, core::Value};
    /// let real = ComplexNumber::new(3.0, 0.0);
    /// assert_eq!(real.checked_as_real(), Value::Real(3.0));
    ///
    /// let complex = ComplexNumber::new(2.0, 1.0);
    /// assert!(matches!(complex.checked_as_real(), Value::Complex(_)));
    /// ```
    #[must_use]
    pub const fn checked_as_real(&self) -> Value {
        if self.imaginary == 0.0 {
            Value::Real(self.real)
        } else {
            Value::Complex(*self)
        }
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Raises the complex number to a floating-point power using the polar
    /// form.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(4.0, 0.0);
    /// let res = c.powf(0.5);
    /// assert!((res.real - 2.0).abs() < 1e-10);
    /// assert!(res.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        let r = self.abs();
        let theta = self.arg();

        let new_r = r.powf(exp);
        let new_theta = theta * exp;

        Self { real:      new_r * new_theta.cos(),
               imaginary: new_r * new_theta.sin(), }
    }

    /// Raises the complex number to a complex power via `exp(w * ln(z))`.
    ///
    /// The caller is responsible for rejecting a zero base.
    #[must_use]
    pub fn powc(self, exp: Self) -> Self {
        (self.ln() * exp).exp()
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(9.0, 0.0);
    /// let s = c.sqrt();
    /// assert!((s.real - 3.0).abs() < 1e-10);
    /// assert!(s.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let a = self.real;
        let b = self.imaginary;
        let r = a.hypot(b);

        let real = f64::midpoint(r, a).sqrt();
        let imaginary = ((r - a) / 2.0).sqrt().copysign(b); // preserve sign of b

        Self { real, imaginary }
    }

    /// Returns the sine of the complex number.
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the complex number.
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent of the complex number.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!((z.exp().real - 1.0).abs() < 1e-10);
    /// assert!(z.exp().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the natural logarithm of the complex number.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(1.0, 0.0);
    /// let ln = z.ln();
    /// assert!(ln.real.abs() < 1e-10); // ln(1) == 0
    /// assert!(ln.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self { real,
               imaginary: 0.0, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denominator = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        Self { real:      (self.real * rhs.real + self.imaginary * rhs.imaginary) / denominator,
               imaginary: (self.imaginary * rhs.real - self.real * rhs.imaginary) / denominator, }
    }
}
