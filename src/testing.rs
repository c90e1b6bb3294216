//! Testing utilities for code that uses `want`
//!
//! This module provides assertion macros for checks and `want` results, and
//! (with the `proptest` feature) [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementations for [`Value`](crate::Value) and
//! [`Timestamp`](crate::Timestamp).
//!
//! # Examples
//!
//! ```rust
//! use want::{assert_accepts, assert_rejects, assert_invalid_field};
//! use want::{want, number, string, Value};
//!
//! assert_accepts!(string(), Value::from("ok"));
//! assert_rejects!(number(), Value::from(-1));
//! assert_invalid_field!(want("age", &Value::from(-1), &number()), "age");
//! ```

/// Assert that a check accepts a value.
///
/// # Example
///
/// ```rust
/// use want::{assert_accepts, boolean, Value};
///
/// assert_accepts!(boolean(), Value::from(true));
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($check:expr, $value:expr) => {{
        let check: $crate::Check = $check;
        let value: $crate::Value = ::std::convert::Into::into($value);
        if !check.accepts(&value) {
            panic!("Expected {} to accept {}", check.label(), value);
        }
    }};
}

/// Assert that a check rejects a value.
///
/// # Example
///
/// ```rust
/// use want::{assert_rejects, boolean, Value};
///
/// assert_rejects!(boolean(), Value::from(0));
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($check:expr, $value:expr) => {{
        let check: $crate::Check = $check;
        let value: $crate::Value = ::std::convert::Into::into($value);
        if check.accepts(&value) {
            panic!("Expected {} to reject {}", check.label(), value);
        }
    }};
}

/// Assert that a `want` result is a validation failure for the given field.
///
/// # Example
///
/// ```rust
/// use want::{assert_invalid_field, want, string_between, Value};
///
/// let result = want("country", &Value::from("VALIDLAND"), &string_between(2, 2));
/// assert_invalid_field!(result, "country");
/// ```
#[macro_export]
macro_rules! assert_invalid_field {
    ($result:expr, $name:expr) => {
        match $result {
            ::std::result::Result::Err($crate::WantError::Validation(e)) => {
                assert_eq!(e.name(), $name);
            }
            ::std::result::Result::Err($crate::WantError::Misuse(e)) => {
                panic!("Expected validation failure, got misuse: {}", e);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected validation failure for {:?}, got Ok", $name);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Timestamp, Value};

#[cfg(feature = "proptest")]
impl Arbitrary for Timestamp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            9 => (-1.0e13..1.0e13f64).prop_map(Timestamp::from_millis),
            1 => Just(Timestamp::INVALID),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Absent),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            ".{0,12}".prop_map(Value::String),
            any::<Timestamp>().prop_map(Value::Date),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}
