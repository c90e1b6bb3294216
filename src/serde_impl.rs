//! Serde support for values and errors (feature-gated)
//!
//! Decoding into [`Value`] lets payloads be checked as they arrive:
//!
//! ```rust,ignore
//! use want::{want, object_of, nullable, string, Value};
//!
//! let body: Value = serde_json::from_str(r#"{"name": "Amy", "nickname": null}"#)?;
//! want("body", &body, &object_of([
//!     ("name", string()),
//!     ("nickname", nullable(string())),
//! ]))?;
//! ```
//!
//! Decoding never yields [`Value::Absent`] or [`Value::Date`]: a missing
//! field is absent simply because the key is not in the object, and dates
//! arrive as numbers or strings. Encoding writes absent and null alike as
//! the format's null, and a date as its millisecond timestamp.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, SerializeStruct, Serializer};

use crate::error::ValidationError;
use crate::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_none(),
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(ts) => serializer.serialize_f64(ts.as_millis()),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any self-describing value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            fields.insert(key, value);
        }
        Ok(Value::Object(fields))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Timestamp;

    #[test]
    fn test_deserialize_json_kinds() {
        let v: Value = serde_json::from_str(
            r#"{"s": "x", "n": 1.5, "i": -2, "b": true, "z": null, "a": [1, "two"]}"#,
        )
        .unwrap();
        assert_eq!(v.get("s"), &Value::from("x"));
        assert_eq!(v.get("n"), &Value::from(1.5));
        assert_eq!(v.get("i"), &Value::from(-2));
        assert_eq!(v.get("b"), &Value::from(true));
        assert_eq!(v.get("z"), &Value::Null);
        assert_eq!(v.get("missing"), &Value::Absent);
        assert_eq!(
            v.get("a"),
            &Value::Array(vec![Value::from(1), Value::from("two")])
        );
    }

    #[test]
    fn test_serialize_json() {
        let v = Value::object([
            ("absent", Value::Absent),
            ("date", Value::from(Timestamp::from_millis(1000.0))),
            ("tags", Value::from(vec!["a"])),
        ]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"absent": null, "date": 1000.0, "tags": ["a"]})
        );
    }

    #[test]
    fn test_from_json_value() {
        let json = serde_json::json!({"tags": ["a", "b"]});
        let v = Value::deserialize(json).unwrap();
        assert_eq!(v.get("tags").len(), Some(2));
    }

    #[test]
    fn test_serialize_validation_error() {
        let err = ValidationError::new("age", Value::from(-1), "Number");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["name"], "age");
        assert_eq!(json["value"], -1.0);
        assert_eq!(json["label"], "Number");
        assert_eq!(
            json["message"],
            "Input variable \"age\" fails type check: Number"
        );
    }
}
