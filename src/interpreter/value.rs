/// Runtime value representation.
///
/// Declares the `Value` enum (integer, real, complex) together with the
/// promotion and coercion helpers the evaluator relies on.
pub mod core;

/// Complex number arithmetic.
///
/// Complex values are how this language answers real-domain violations:
/// instead of failing, `sqrt`/`log`/`**` widen their result into the complex
/// plane.
pub mod complex;
