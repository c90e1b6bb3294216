//! String checks
//!
//! Lengths are counted in UTF-16 code units, so `"é"` has length 1 and an
//! emoji outside the Basic Multilingual Plane has length 2.

use super::combinators::{Check, Predicate};
use crate::Value;

/// Predicate that accepts strings whose length is in range.
#[derive(Clone, Copy, Debug)]
pub struct StringLen {
    min: usize,
    max: usize,
}

impl Predicate for StringLen {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => {
                let len = s.encode_utf16().count();
                len >= self.min && len <= self.max
            }
            _ => false,
        }
    }
}

/// Accept any string, including the empty one.
///
/// # Example
///
/// ```rust
/// use want::{string, Value};
///
/// assert!(string().accepts(&Value::from("")));
/// assert!(!string().accepts(&Value::from(1)));
/// assert!(!string().accepts(&Value::Null));
/// ```
pub fn string() -> Check {
    string_between(0, usize::MAX)
}

/// Accept strings of at least `min` code units.
///
/// # Example
///
/// ```rust
/// use want::{string_min, Value};
///
/// assert!(string_min(1).accepts(&Value::from("swordfish")));
/// assert!(!string_min(1).accepts(&Value::from("")));
/// ```
pub fn string_min(min: usize) -> Check {
    string_between(min, usize::MAX)
}

/// Accept strings whose length lies in `[min, max]`.
///
/// # Example
///
/// ```rust
/// use want::{string_between, Value};
///
/// let password = string_between(8, 16);
/// assert_eq!(password.label(), "String");
/// assert!(password.accepts(&Value::from("swordfish")));
/// assert!(!string_between(20, 70).accepts(&Value::from("swordfish")));
/// ```
pub fn string_between(min: usize, max: usize) -> Check {
    Check::new("String", StringLen { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accepts_only_strings() {
        let p = string();
        assert!(p.accepts(&Value::from("user1")));
        assert!(p.accepts(&Value::from("")));
        assert!(!p.accepts(&Value::Null));
        assert!(!p.accepts(&Value::Absent));
        assert!(!p.accepts(&Value::from(1)));
        assert!(!p.accepts(&Value::from(vec!["a"])));
    }

    #[test]
    fn test_string_bounds_are_inclusive() {
        let p = string_between(2, 2);
        assert!(!p.accepts(&Value::from("V")));
        assert!(p.accepts(&Value::from("VL")));
        assert!(!p.accepts(&Value::from("VALIDLAND")));
    }

    #[test]
    fn test_string_min() {
        assert!(string_min(1).accepts(&Value::from("swordfish")));
        assert!(!string_min(1).accepts(&Value::from("")));
    }

    #[test]
    fn test_length_counts_utf16_code_units() {
        let p = string_between(1, 1);
        assert!(p.accepts(&Value::from("é")));
        assert!(!p.accepts(&Value::from("😀")));
        assert!(string_between(2, 2).accepts(&Value::from("😀")));
    }

    #[test]
    fn test_label() {
        assert_eq!(string().label(), "String");
        assert_eq!(string_between(1, 5).label(), "String");
    }
}
