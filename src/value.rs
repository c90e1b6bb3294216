//! Dynamic values inspected by checks
//!
//! `want` validates data whose shape is only known at runtime: decoded request
//! bodies, loosely typed arguments, configuration blobs. [`Value`] models that
//! data explicitly. It keeps "absent" and "null" apart, since an object field
//! that was never sent is not the same thing as one sent as `null`.
//!
//! # Example
//!
//! ```rust
//! use want::Value;
//!
//! let tags = Value::from(vec!["a", "b"]);
//! assert_eq!(tags.len(), Some(2));
//!
//! let address = Value::object([("city", "Validipolis"), ("country", "VL")]);
//! assert_eq!(address.get("city"), &Value::from("Validipolis"));
//! assert_eq!(address.get("street"), &Value::Absent);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A dynamically shaped value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value was supplied at all (a missing field, an omitted argument).
    #[default]
    Absent,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. May hold NaN or infinities.
    Number(f64),
    /// A string.
    String(String),
    /// A point in time.
    Date(Timestamp),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A map of own fields.
    Object(BTreeMap<String, Value>),
}

static ABSENT: Value = Value::Absent;

impl Value {
    /// Build an object value from key/value pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key.
    pub fn object<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array value from anything convertible into values.
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Look up an own field of an object.
    ///
    /// Returns [`Value::Absent`] when the key is missing or when `self` is not
    /// an object, which is exactly what a field check sees for a missing field.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Object(fields) => fields.get(key).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// Number of elements of an array, or fields of an object.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(fields) => Some(fields.len()),
            _ => None,
        }
    }

    /// Whether this is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "<absent>"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Date(ts) => write!(f, "{}", ts),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Date(ts)
    }
}

impl From<SystemTime> for Value {
    fn from(time: SystemTime) -> Self {
        Value::Date(time.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(fields: BTreeMap<K, V>) -> Self {
        Value::object(fields)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::array(iter)
    }
}

/// Milliseconds since the Unix epoch.
///
/// A NaN timestamp stands for an invalid date; date checks always reject it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(f64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Timestamp = Timestamp(0.0);

    /// An invalid date.
    pub const INVALID: Timestamp = Timestamp(f64::NAN);

    /// Create a timestamp from milliseconds since the epoch.
    pub const fn from_millis(millis: f64) -> Self {
        Timestamp(millis)
    }

    /// Milliseconds since the epoch.
    pub const fn as_millis(self) -> f64 {
        self.0
    }

    /// Whether the timestamp denotes a real instant.
    pub fn is_valid(self) -> bool {
        !self.0.is_nan()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "@{}ms", self.0)
        } else {
            write!(f, "<invalid date>")
        }
    }
}

impl From<f64> for Timestamp {
    fn from(millis: f64) -> Self {
        Timestamp(millis)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis as f64)
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Timestamp(millis as f64)
    }
}

impl From<i32> for Timestamp {
    fn from(millis: i32) -> Self {
        Timestamp(f64::from(millis))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Timestamp(millis_of(after)),
            Err(before) => Timestamp(-millis_of(before.duration())),
        }
    }
}

fn millis_of(duration: Duration) -> f64 {
    duration.as_secs() as f64 * 1000.0 + f64::from(duration.subsec_nanos()) / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_field_is_absent() {
        let v = Value::object([("a", 1)]);
        assert_eq!(v.get("a"), &Value::Number(1.0));
        assert_eq!(v.get("b"), &Value::Absent);
        assert_eq!(Value::Null.get("a"), &Value::Absent);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(25), Value::Number(25.0));
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
        let collected: Value = (1..=3).collect();
        assert_eq!(collected.len(), Some(3));
    }

    #[test]
    fn test_absent_is_default_and_distinct_from_null() {
        assert_eq!(Value::default(), Value::Absent);
        assert_ne!(Value::Absent, Value::Null);
        assert!(Value::Absent.is_absent());
        assert!(Value::Null.is_null());
        assert!(!Value::Null.is_absent());
    }

    #[test]
    fn test_timestamp_from_system_time() {
        let after = UNIX_EPOCH + Duration::from_secs(2);
        assert_eq!(Timestamp::from(after).as_millis(), 2000.0);

        let before = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(Timestamp::from(before).as_millis(), -1500.0);
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(!Timestamp::INVALID.is_valid());
        assert!(Timestamp::EPOCH.is_valid());
        assert_eq!(Timestamp::INVALID.to_string(), "<invalid date>");
    }

    #[test]
    fn test_display() {
        let v = Value::object([("tags", Value::from(vec!["a"])), ("n", Value::Null)]);
        assert_eq!(v.to_string(), r#"{"n": null, "tags": ["a"]}"#);
        assert_eq!(Value::Absent.to_string(), "<absent>");
        assert_eq!(Value::from(1.5).kind(), "number");
    }
}
