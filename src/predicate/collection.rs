//! Array and object checks
//!
//! Both evaluate eagerly and stop at the first element or field that fails.
//! With the `tracing` feature enabled, the rejecting element index or field
//! name is reported as a `trace` event.

use super::combinators::{Check, Predicate};
use crate::Value;

/// Predicate that accepts arrays of bounded length whose elements all pass.
#[derive(Clone, Debug)]
pub struct ArrayOf {
    element: Check,
    min: usize,
    max: usize,
}

impl Predicate for ArrayOf {
    fn check(&self, value: &Value) -> bool {
        let Value::Array(items) = value else {
            return false;
        };
        let elements_ok = items.iter().enumerate().all(|(_index, item)| {
            let ok = self.element.accepts(item);
            if !ok {
                trace_event!(index = _index, check = %self.element, "array element rejected");
            }
            ok
        });
        elements_ok && items.len() >= self.min && items.len() <= self.max
    }
}

/// Accept arrays of any length whose elements all pass `element`.
///
/// # Example
///
/// ```rust
/// use want::{array, string, Value};
///
/// let emails = array(string());
/// assert_eq!(emails.label(), "Array(String)");
/// assert!(emails.accepts(&Value::from(Vec::<String>::new())));
/// assert!(emails.accepts(&Value::from(vec!["amy@example.org"])));
/// assert!(!emails.accepts(&Value::from(vec![1])));
/// ```
pub fn array(element: Check) -> Check {
    array_between(element, 0, usize::MAX)
}

/// Accept arrays of at least `min` passing elements.
pub fn array_min(element: Check, min: usize) -> Check {
    array_between(element, min, usize::MAX)
}

/// Accept arrays with `[min, max]` elements, all passing `element`.
///
/// # Example
///
/// ```rust
/// use want::{array_between, string, Value};
///
/// let tags = array_between(string(), 1, 5);
/// assert!(tags.accepts(&Value::from(vec!["a", "b"])));
/// assert!(!tags.accepts(&Value::from(Vec::<&str>::new())));
/// ```
pub fn array_between(element: Check, min: usize, max: usize) -> Check {
    let label = format!("Array({})", element.label());
    Check::new(label, ArrayOf { element, min, max })
}

/// Ordered mapping from field key to the check its value must pass.
///
/// Fields are checked in declaration order. Declaring the same key twice
/// replaces the earlier check in place.
///
/// # Example
///
/// ```rust
/// use want::{number, string, FieldTests};
///
/// let fields = FieldTests::new()
///     .field("name", string())
///     .field("age", number());
/// assert_eq!(fields.keys().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldTests {
    fields: Vec<(String, Check)>,
}

impl FieldTests {
    /// An empty set of field tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field and the check its value must pass.
    pub fn field(mut self, key: impl Into<String>, check: Check) -> Self {
        self.insert(key, check);
        self
    }

    /// Declare a field in place.
    pub fn insert(&mut self, key: impl Into<String>, check: Check) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = check,
            None => self.fields.push((key, check)),
        }
    }

    /// Whether `key` is declared.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Declared keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Declared fields and their checks in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Check)> {
        self.fields.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Check)> for FieldTests {
    fn from_iter<I: IntoIterator<Item = (K, Check)>>(iter: I) -> Self {
        let mut fields = FieldTests::new();
        for (key, check) in iter {
            fields.insert(key, check);
        }
        fields
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Check); N]> for FieldTests {
    fn from(pairs: [(K, Check); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>> From<Vec<(K, Check)>> for FieldTests {
    fn from(pairs: Vec<(K, Check)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// Predicate that accepts objects whose declared fields all pass.
#[derive(Clone, Debug)]
pub struct ObjectShape {
    fields: Option<FieldTests>,
    extra_fields: bool,
}

impl Predicate for ObjectShape {
    fn check(&self, value: &Value) -> bool {
        let Value::Object(input) = value else {
            return false;
        };
        let Some(fields) = &self.fields else {
            return self.extra_fields || input.is_empty();
        };

        // Missing keys are handed to the field check as `Value::Absent`.
        let declared_ok = fields.iter().all(|(key, check)| {
            let ok = check.accepts(value.get(key));
            if !ok {
                trace_event!(field = key, check = %check, "object field rejected");
            }
            ok
        });
        if !declared_ok {
            return false;
        }

        if !self.extra_fields {
            if let Some(_extra) = input.keys().find(|k| !fields.contains(k)) {
                trace_event!(field = %_extra, "undeclared object field");
                return false;
            }
        }
        true
    }
}

fn object_label(has_fields: bool, extra_fields: bool) -> String {
    format!(
        "Object({}{})",
        if has_fields { ":" } else { "" },
        if extra_fields { "+" } else { "" }
    )
}

/// Accept any object, with any fields.
///
/// Only [`Value::Object`] counts as an object; arrays and dates are
/// rejected even though they are structured values.
///
/// # Example
///
/// ```rust
/// use want::{object, Value};
///
/// assert_eq!(object().label(), "Object(+)");
/// assert!(object().accepts(&Value::object([("someKey", "someValue")])));
/// assert!(!object().accepts(&Value::Null));
/// assert!(!object().accepts(&Value::from(vec![1])));
/// assert!(!object().accepts(&Value::from(want::Timestamp::EPOCH)));
/// ```
pub fn object() -> Check {
    object_with(None, true)
}

/// Accept objects whose declared fields pass; undeclared fields are allowed.
///
/// Every declared field is required unless its check is wrapped in
/// [`optional`](crate::optional).
///
/// # Example
///
/// ```rust
/// use want::{object_of, optional, string, string_between, Value};
///
/// let address = object_of([
///     ("city", string_between(1, 100)),
///     ("country", string_between(2, 2)),
///     ("apartment", optional(string())),
/// ]);
/// assert_eq!(address.label(), "Object(:+)");
/// assert!(address.accepts(&Value::object([("city", "Validipolis"), ("country", "VL")])));
/// assert!(!address.accepts(&Value::object([("city", "Validipolis"), ("country", "VALIDLAND")])));
/// ```
pub fn object_of(fields: impl Into<FieldTests>) -> Check {
    object_with(Some(fields.into()), true)
}

/// Accept objects whose declared fields pass and which have no other fields.
///
/// # Example
///
/// ```rust
/// use want::{strict_object_of, string, Value};
///
/// let p = strict_object_of([("someKey", string())]);
/// assert_eq!(p.label(), "Object(:)");
/// assert!(p.accepts(&Value::object([("someKey", "someValue")])));
/// assert!(!p.accepts(&Value::object([("someKey", "a"), ("other", "b")])));
/// ```
pub fn strict_object_of(fields: impl Into<FieldTests>) -> Check {
    object_with(Some(fields.into()), false)
}

/// Accept objects, optionally checking declared fields and rejecting extras.
///
/// With `fields` set to `None` no field is checked; combined with
/// `extra_fields == false` only the empty object passes.
///
/// # Example
///
/// ```rust
/// use want::{object_with, Value};
///
/// let empty = object_with(None, false);
/// assert_eq!(empty.label(), "Object()");
/// assert!(empty.accepts(&Value::object(Vec::<(String, Value)>::new())));
/// assert!(!empty.accepts(&Value::object([("someKey", "someValue")])));
/// ```
pub fn object_with(fields: Option<FieldTests>, extra_fields: bool) -> Check {
    Check::new(
        object_label(fields.is_some(), extra_fields),
        ObjectShape {
            fields,
            extra_fields,
        },
    )
}
