//! # want
//!
//! Lightweight runtime input validation.
//!
//! Build a [`Check`] out of small, labeled pieces, then assert that a named
//! value passes it with [`want`]. A failure comes back as a
//! [`ValidationError`] naming the field, the offending value and the label of
//! the check that rejected it.
//!
//! `want` only inspects: it never converts or mutates the value, and it stops
//! at the first failure.
//!
//! ## Quick Example
//!
//! ```rust
//! use want::prelude::*;
//!
//! let address = object_of([
//!     ("streetAddress", string_between(5, 100)),
//!     ("city", string_between(1, 100)),
//!     ("country", string_between(2, 2)),
//!     ("apartment", optional(nullable(string_between(1, 50)))),
//! ]);
//!
//! let input = Value::object([
//!     ("streetAddress", "Main Street 1"),
//!     ("city", "Validipolis"),
//!     ("country", "VALIDLAND"),
//! ]);
//!
//! match want("address", &input, &address) {
//!     Ok(()) => println!("valid"),
//!     Err(WantError::Validation(e)) => {
//!         assert_eq!(e.name(), "address");
//!         assert_eq!(e.label(), "Object(:+)");
//!     }
//!     Err(WantError::Misuse(e)) => panic!("{}", e),
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Value`], so decoded payloads
//!   can be checked directly.
//! - `tracing`: trace events naming the array element or object field that
//!   caused a composite check to fail.
//! - `proptest`: `Arbitrary` for [`Value`] and [`Timestamp`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

mod assertion;
pub mod error;
pub mod predicate;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
pub mod value;

// Re-exports
pub use assertion::{want, want_value};
pub use error::{MisuseError, ValidationError, WantError};
pub use predicate::{
    array, array_between, array_min, boolean, date, date_between, date_min, nullable, number,
    number_between, number_min, object, object_of, object_with, optional, strict_object_of,
    string, string_between, string_min, Check, FieldTests, Predicate,
};
pub use value::{Timestamp, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertion::{want, want_value};
    pub use crate::error::{MisuseError, ValidationError, WantError};
    pub use crate::predicate::prelude::*;
    pub use crate::value::{Timestamp, Value};
}
