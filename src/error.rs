//! Errors returned by [`want`](crate::want)
//!
//! Two kinds of failure are kept apart:
//!
//! - [`ValidationError`]: the value does not satisfy the check. This is bad
//!   input and the only error a caller should handle as such.
//! - [`MisuseError`]: the check carries no label. This is a bug at the call
//!   site; let it surface rather than reporting it to the user.
//!
//! [`WantError`] is the union returned by `want`.
//!
//! # Example
//!
//! ```rust
//! use want::{want, number_between, Value, WantError};
//!
//! let err = want("age", &Value::from(-1), &number_between(0.0, 130.0)).unwrap_err();
//! match err {
//!     WantError::Validation(invalid) => {
//!         assert_eq!(invalid.name(), "age");
//!         assert_eq!(invalid.label(), "Number");
//!         assert_eq!(invalid.value(), &Value::from(-1));
//!     }
//!     WantError::Misuse(misuse) => panic!("bug: {}", misuse),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Value;

/// A value failed its check.
///
/// Created once per failed assertion and never modified afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    name: String,
    value: Value,
    label: String,
}

impl ValidationError {
    /// Create a validation error for field `name`.
    pub fn new(name: impl Into<String>, value: Value, label: impl Into<String>) -> Self {
        ValidationError {
            name: name.into(),
            value,
            label: label.into(),
        }
    }

    /// The name of the checked field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The offending value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The label of the check that rejected the value.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The human-readable message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use want::{ValidationError, Value};
    ///
    /// let err = ValidationError::new("country", Value::from("VALIDLAND"), "String");
    /// assert_eq!(err.message(), r#"Input variable "country" fails type check: String"#);
    /// ```
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Consume the error and return the offending value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Input variable \"{}\" fails type check: {}",
            self.name, self.label
        )
    }
}

impl StdError for ValidationError {}

/// A check without a label was handed to `want`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisuseError {
    name: String,
}

impl MisuseError {
    /// Create a misuse error for field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        MisuseError { name: name.into() }
    }

    /// The name of the field whose check was unlabeled.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MisuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "want() checks need a non-empty label (field \"{}\")",
            self.name
        )
    }
}

impl StdError for MisuseError {}

/// Error returned by [`want`](crate::want).
#[derive(Debug, Clone, PartialEq)]
pub enum WantError {
    /// The value failed its check.
    Validation(ValidationError),
    /// The check was built incorrectly.
    Misuse(MisuseError),
}

impl WantError {
    /// Whether this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, WantError::Validation(_))
    }

    /// Whether this is a builder misuse.
    pub fn is_misuse(&self) -> bool {
        matches!(self, WantError::Misuse(_))
    }

    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            WantError::Validation(e) => Some(e),
            WantError::Misuse(_) => None,
        }
    }

    /// Convert into the validation failure, if this is one.
    pub fn into_validation(self) -> Option<ValidationError> {
        match self {
            WantError::Validation(e) => Some(e),
            WantError::Misuse(_) => None,
        }
    }

    /// Name of the field involved.
    pub fn name(&self) -> &str {
        match self {
            WantError::Validation(e) => e.name(),
            WantError::Misuse(e) => e.name(),
        }
    }
}

impl fmt::Display for WantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WantError::Validation(e) => fmt::Display::fmt(e, f),
            WantError::Misuse(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl StdError for WantError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            WantError::Validation(e) => Some(e),
            WantError::Misuse(e) => Some(e),
        }
    }
}

impl From<ValidationError> for WantError {
    fn from(e: ValidationError) -> Self {
        WantError::Validation(e)
    }
}

impl From<MisuseError> for WantError {
    fn from(e: MisuseError) -> Self {
        WantError::Misuse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new("country", Value::from("VALIDLAND"), "String");
        assert_eq!(
            err.to_string(),
            "Input variable \"country\" fails type check: String"
        );
        assert_eq!(err.message(), err.to_string());
        assert_eq!(err.name(), "country");
        assert_eq!(err.label(), "String");
        assert_eq!(err.clone().into_value(), Value::from("VALIDLAND"));
    }

    #[test]
    fn test_misuse_error_message() {
        let err = MisuseError::new("age");
        assert_eq!(
            err.to_string(),
            "want() checks need a non-empty label (field \"age\")"
        );
    }

    #[test]
    fn test_want_error_kinds() {
        let invalid: WantError = ValidationError::new("a", Value::Null, "Number").into();
        assert!(invalid.is_validation());
        assert!(!invalid.is_misuse());
        assert_eq!(invalid.as_validation().map(|e| e.label()), Some("Number"));
        assert_eq!(invalid.name(), "a");

        let misuse: WantError = MisuseError::new("b").into();
        assert!(misuse.is_misuse());
        assert!(misuse.as_validation().is_none());
        assert!(misuse.clone().into_validation().is_none());
        assert_eq!(misuse.name(), "b");
    }

    #[test]
    fn test_want_error_display_and_source() {
        let inner = ValidationError::new("tags", Value::Array(vec![]), "Array(String)");
        let err = WantError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source, Some(inner.to_string()));
    }
}
