/// Safe numeric conversion helpers.
///
/// Conversions between `i64` and `f64` silently lose precision outside
/// `±2^53`; everything in this crate that crosses the integer/real boundary
/// goes through these checked helpers instead.
pub mod num;
