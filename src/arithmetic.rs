//! Pure arithmetic over `f64`.
//!
//! Every function is total: overflow yields an infinity and NaN propagates,
//! exactly as IEEE-754 prescribes. Nothing here can fail.

use serde::Serialize;
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

/// Add two numbers.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// A binary operation exposed by the API.
///
/// The lowercase tag (`sum`, `subtract`, `multiply`) is what clients see in
/// the `operation` field and what metrics are labelled with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    ToSchema,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// `a + b`.
    Sum,
    /// `a - b`.
    Subtract,
    /// `a * b`.
    Multiply,
}

impl Operation {
    /// Run the operation on two operands.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Sum => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 8] = [0.0, 1.0, -1.0, 2.5, -7.25, 1e-9, 1e15, f64::MAX];

    #[test]
    fn matches_native_operators() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b), a + b);
                assert_eq!(subtract(a, b), a - b);
                assert_eq!(multiply(a, b), a * b);
            }
        }
    }

    #[test]
    fn add_and_multiply_commute() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b), add(b, a));
                assert_eq!(multiply(a, b), multiply(b, a));
            }
        }
    }

    #[test]
    fn identities_hold() {
        for &a in &SAMPLES {
            assert_eq!(add(a, 0.0), a);
            assert_eq!(subtract(a, 0.0), a);
            assert_eq!(multiply(a, 0.0), 0.0);
        }
    }

    #[test]
    fn basic_values() {
        assert_eq!(add(5.0, 3.0), 8.0);
        assert_eq!(subtract(10.0, 4.0), 6.0);
        assert_eq!(multiply(3.0, 7.0), 21.0);
        assert_eq!(add(0.1, 0.2), 0.1 + 0.2);
    }

    #[test]
    fn overflow_and_nan_follow_ieee() {
        assert_eq!(multiply(f64::MAX, 2.0), f64::INFINITY);
        assert_eq!(add(f64::MAX, f64::MAX), f64::INFINITY);
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(subtract(1.0, f64::NAN).is_nan());
        assert!(multiply(f64::INFINITY, 0.0).is_nan());
    }

    #[test]
    fn operation_dispatch() {
        assert_eq!(Operation::Sum.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(Operation::Multiply.apply(5.0, 0.0), 0.0);
    }

    #[test]
    fn operation_tags() {
        assert_eq!(Operation::Sum.to_string(), "sum");
        assert_eq!(Operation::Subtract.as_ref(), "subtract");
        assert_eq!(Operation::Multiply.to_string(), "multiply");
        assert_eq!(
            serde_json::to_value(Operation::Subtract).unwrap(),
            serde_json::json!("subtract")
        );
    }
}
