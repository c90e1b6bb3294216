//! Predicate prelude for convenient imports
//!
//! This module re-exports the check constructors and core types.
//!
//! # Example
//!
//! ```rust
//! use want::predicate::prelude::*;
//! use want::Value;
//!
//! let score = nullable(number_between(0.0, 100.0));
//! assert!(score.accepts(&Value::Null));
//! ```

// Core types
pub use super::combinators::{Check, Predicate};

// Wrappers
pub use super::combinators::{nullable, optional};

// Leaf checks
pub use super::date::{date, date_between, date_min};
pub use super::number::{boolean, number, number_between, number_min};
pub use super::string::{string, string_between, string_min};

// Composite checks
pub use super::collection::{
    array, array_between, array_min, object, object_of, object_with, strict_object_of, FieldTests,
};
