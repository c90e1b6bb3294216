//! The assertion entry point
//!
//! [`want`] hands the value to the check and turns a rejection into a
//! [`ValidationError`]. It holds no validation logic of its own beyond
//! refusing unlabeled checks.

use crate::error::{MisuseError, ValidationError, WantError};
use crate::predicate::Check;
use crate::Value;

/// Assert that `value`, named `name`, passes `check`.
///
/// Returns `Ok(())` when the check accepts the value. Otherwise returns
/// [`WantError::Validation`] carrying the name, a copy of the value and the
/// check's label. A check with an empty label yields [`WantError::Misuse`]
/// without being evaluated.
///
/// # Example
///
/// ```rust
/// use want::{want, array_between, number_between, string, string_between, Value};
///
/// assert!(want("age", &Value::from(25), &number_between(0.0, 130.0)).is_ok());
///
/// let tags = array_between(string(), 1, 5);
/// assert!(want("tags", &Value::from(vec!["a", "b"]), &tags).is_ok());
/// assert!(want("tags", &Value::Array(vec![]), &tags).is_err());
///
/// let err = want("country", &Value::from("VALIDLAND"), &string_between(2, 2)).unwrap_err();
/// assert_eq!(err.to_string(), r#"Input variable "country" fails type check: String"#);
/// ```
pub fn want(name: &str, value: &Value, check: &Check) -> Result<(), WantError> {
    if !check.is_labeled() {
        return Err(MisuseError::new(name).into());
    }
    if check.accepts(value) {
        Ok(())
    } else {
        Err(ValidationError::new(name, value.clone(), check.label()).into())
    }
}

/// Like [`want`], taking any value convertible into a [`Value`].
///
/// # Example
///
/// ```rust
/// use want::{want_value, array, boolean, string};
///
/// assert!(want_value("flag", true, &boolean()).is_ok());
/// assert!(want_value("emails", vec!["amy@example.org"], &array(string())).is_ok());
/// assert!(want_value("flag", "true", &boolean()).is_err());
/// ```
pub fn want_value(name: &str, value: impl Into<Value>, check: &Check) -> Result<(), WantError> {
    want(name, &value.into(), check)
}
