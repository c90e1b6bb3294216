//! Core predicate trait, labeled checks and wrapping combinators
//!
//! This module provides the foundational [`Predicate`] trait, the [`Check`]
//! type pairing a predicate with its diagnostic label, and the `nullable` /
//! `optional` wrappers.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A predicate over dynamic values.
///
/// Predicates are pure: they read their construction-time configuration and
/// the value, nothing else. Closures taking `&Value` implement this trait.
///
/// # Example
///
/// ```rust
/// use want::{Predicate, Value};
///
/// let is_even = |v: &Value| matches!(v, Value::Number(n) if n % 2.0 == 0.0);
/// assert!(is_even.check(&Value::from(4)));
/// assert!(!is_even.check(&Value::from(3)));
/// ```
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A predicate paired with a human-readable label.
///
/// The label is fixed when the check is built and is only used for
/// diagnostics; it never changes what the check accepts. Cloning is cheap,
/// the predicate is shared.
///
/// # Example
///
/// ```rust
/// use want::{Check, Value};
///
/// let even = Check::new("Even", |v: &Value| {
///     matches!(v, Value::Number(n) if n % 2.0 == 0.0)
/// });
/// assert_eq!(even.label(), "Even");
/// assert!(even.accepts(&Value::from(2)));
/// ```
#[derive(Clone)]
pub struct Check {
    label: Arc<str>,
    predicate: Arc<dyn Predicate>,
}

impl Check {
    /// Pair a predicate with a label.
    ///
    /// An empty label is accepted here but rejected by [`want`](crate::want)
    /// as a misuse.
    pub fn new<P>(label: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Check {
            label: Arc::from(label.into()),
            predicate: Arc::new(predicate),
        }
    }

    /// The diagnostic label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the check carries a non-empty label.
    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }

    /// Evaluate the check against a value.
    #[inline]
    pub fn accepts(&self, value: &Value) -> bool {
        self.predicate.check(value)
    }
}

impl Predicate for Check {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.accepts(value)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Check").field(&self.label()).finish()
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts an explicit null, or whatever the inner check accepts.
#[derive(Clone, Debug)]
pub struct Nullable(pub Check);

impl Predicate for Nullable {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_null() || self.0.accepts(value)
    }
}

/// Allow an explicit null in addition to what `check` accepts.
///
/// Absent values are not covered; see [`optional`].
///
/// # Example
///
/// ```rust
/// use want::{nullable, string, Value};
///
/// let real_name = nullable(string());
/// assert_eq!(real_name.label(), "Nullable(String)");
/// assert!(real_name.accepts(&Value::Null));
/// assert!(real_name.accepts(&Value::from("")));
/// assert!(!real_name.accepts(&Value::Absent));
/// ```
pub fn nullable(check: Check) -> Check {
    Check::new(format!("Nullable({})", check.label()), Nullable(check))
}

/// Accepts an absent value, or whatever the inner check accepts.
#[derive(Clone, Debug)]
pub struct Optional(pub Check);

impl Predicate for Optional {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_absent() || self.0.accepts(value)
    }
}

/// Allow an absent value in addition to what `check` accepts.
///
/// Null is not covered; wrap as `optional(nullable(check))` to accept absent,
/// null and valid values alike.
///
/// # Example
///
/// ```rust
/// use want::{nullable, optional, string, Value};
///
/// let nickname = optional(string());
/// assert!(nickname.accepts(&Value::Absent));
/// assert!(!nickname.accepts(&Value::Null));
///
/// let either = optional(nullable(string()));
/// assert_eq!(either.label(), "Optional(Nullable(String))");
/// assert!(either.accepts(&Value::Null));
/// ```
pub fn optional(check: Check) -> Check {
    Check::new(format!("Optional({})", check.label()), Optional(check))
}
