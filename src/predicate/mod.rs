//! Labeled checks for dynamic values
//!
//! Every constructor in this module returns a [`Check`]: a predicate over
//! [`Value`](crate::Value) paired with a label describing what it checks.
//! Leaf checks inspect a single value; composite checks wrap other checks
//! and derive their label from them.
//!
//! | constructor                          | label                 |
//! |--------------------------------------|-----------------------|
//! | [`string`], [`string_between`]       | `String`              |
//! | [`number`], [`number_between`]       | `Number`              |
//! | [`date`], [`date_min`], [`date_between`] | `Date`              |
//! | [`boolean`]                          | `Boolean`             |
//! | [`object`]                           | `Object(+)`           |
//! | [`object_of`]                        | `Object(:+)`          |
//! | [`strict_object_of`]                 | `Object(:)`           |
//! | [`array`], [`array_between`]         | `Array(<element>)`    |
//! | [`nullable`]                         | `Nullable(<inner>)`   |
//! | [`optional`]                         | `Optional(<inner>)`   |
//!
//! # Example
//!
//! ```rust
//! use want::predicate::*;
//! use want::Value;
//!
//! let user = object_of([
//!     ("name", string_between(1, 64)),
//!     ("age", optional(number_between(0.0, 130.0))),
//!     ("emails", array_between(string(), 1, 5)),
//! ]);
//!
//! let input = Value::object([
//!     ("name", Value::from("Amy")),
//!     ("emails", Value::from(vec!["amy@example.org"])),
//! ]);
//! assert!(user.accepts(&input));
//! ```

mod collection;
mod combinators;
mod date;
mod number;
mod string;

pub mod prelude;

// Re-export core types
pub use combinators::{Check, Predicate};

// Re-export wrappers
pub use combinators::{nullable, optional, Nullable, Optional};

// Re-export leaf checks
pub use date::{date, date_between, date_min, DateRange};
pub use number::{boolean, number, number_between, number_min, IsBoolean, NumberRange};
pub use string::{string, string_between, string_min, StringLen};

// Re-export composite checks
pub use collection::{
    array, array_between, array_min, object, object_of, object_with, strict_object_of, ArrayOf,
    FieldTests, ObjectShape,
};
