//! Number and boolean checks
//!
//! Numbers default to the range `[0, +inf]`. Pass an explicit lower bound
//! to accept negative values.

use super::combinators::{Check, Predicate};
use crate::Value;

/// Predicate that accepts non-NaN numbers within inclusive bounds.
#[derive(Clone, Copy, Debug)]
pub struct NumberRange {
    min: f64,
    max: f64,
}

impl Predicate for NumberRange {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value {
            Value::Number(n) => !n.is_nan() && *n >= self.min && *n <= self.max,
            _ => false,
        }
    }
}

/// Accept numbers in `[0, +inf]`.
///
/// # Example
///
/// ```rust
/// use want::{number, Value};
///
/// assert!(number().accepts(&Value::from(10.5)));
/// assert!(number().accepts(&Value::from(f64::INFINITY)));
/// assert!(!number().accepts(&Value::from(-1)));
/// assert!(!number().accepts(&Value::from(f64::NAN)));
/// assert!(!number().accepts(&Value::from(true)));
/// ```
pub fn number() -> Check {
    number_between(0.0, f64::INFINITY)
}

/// Accept numbers of at least `min`.
///
/// # Example
///
/// ```rust
/// use want::{number_min, Value};
///
/// assert!(number_min(-273.15).accepts(&Value::from(-16.5)));
/// assert!(!number_min(-99.5).accepts(&Value::from(-100)));
/// ```
pub fn number_min(min: f64) -> Check {
    number_between(min, f64::INFINITY)
}

/// Accept numbers in `[min, max]`.
///
/// # Example
///
/// ```rust
/// use want::{number_between, Value};
///
/// let age = number_between(0.0, 130.0);
/// assert!(age.accepts(&Value::from(25)));
/// assert!(!age.accepts(&Value::from(131)));
/// ```
pub fn number_between(min: f64, max: f64) -> Check {
    Check::new("Number", NumberRange { min, max })
}

/// Predicate that accepts booleans only.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBoolean;

impl Predicate for IsBoolean {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }
}

/// Accept `true` or `false`, with no truthiness coercion.
///
/// # Example
///
/// ```rust
/// use want::{boolean, Value};
///
/// assert!(boolean().accepts(&Value::from(false)));
/// assert!(!boolean().accepts(&Value::from(0)));
/// assert!(!boolean().accepts(&Value::from("true")));
/// ```
pub fn boolean() -> Check {
    Check::new("Boolean", IsBoolean)
}
