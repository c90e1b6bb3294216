//! Property-based tests for the built-in checks

use proptest::prelude::*;
use want::prelude::*;

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn sentinel() -> impl Strategy<Value = Value> {
    prop_oneof![Just(Value::Absent), Just(Value::Null)]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        ".{0,10}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn prop_string_accepts_exactly_lengths_in_range(
        s in ".{0,20}",
        min in 0usize..10,
        span in 0usize..10,
    ) {
        let max = min + span;
        let len = utf16_len(&s);
        let expected = len >= min && len <= max;
        prop_assert_eq!(string_between(min, max).accepts(&Value::from(s)), expected);
    }

    #[test]
    fn prop_string_rejects_non_strings(n in any::<f64>(), b in any::<bool>()) {
        prop_assert!(!string().accepts(&Value::from(n)));
        prop_assert!(!string().accepts(&Value::from(b)));
    }

    #[test]
    fn prop_number_accepts_exactly_values_in_range(
        n in -1.0e6..1.0e6f64,
        min in -1.0e6..1.0e6f64,
        span in 0.0..1.0e6f64,
    ) {
        let max = min + span;
        let expected = n >= min && n <= max;
        prop_assert_eq!(number_between(min, max).accepts(&Value::from(n)), expected);
    }

    #[test]
    fn prop_number_rejects_nan_and_booleans(min in -1.0e6..0.0f64, b in any::<bool>()) {
        let p = number_between(min, f64::INFINITY);
        prop_assert!(!p.accepts(&Value::from(f64::NAN)));
        prop_assert!(!p.accepts(&Value::from(b)));
    }

    #[test]
    fn prop_nullable_accepts_null_for_any_check(
        min in 0usize..5,
    ) {
        prop_assert!(nullable(string_min(min)).accepts(&Value::Null));
        prop_assert!(nullable(number()).accepts(&Value::Null));
        prop_assert!(!nullable(string_min(min)).accepts(&Value::Absent));
    }

    #[test]
    fn prop_optional_nullable_accepts_sentinels_and_valid(
        v in prop_oneof![sentinel(), scalar()],
    ) {
        let inner = string();
        let expected = v.is_absent() || v.is_null() || inner.accepts(&v);
        prop_assert_eq!(optional(nullable(inner)).accepts(&v), expected);
    }

    #[test]
    fn prop_optional_rejects_null_unless_inner_accepts_it(v in scalar()) {
        prop_assert!(optional(boolean()).accepts(&Value::Absent));
        prop_assert!(!optional(boolean()).accepts(&Value::Null));
        prop_assert_eq!(optional(boolean()).accepts(&v), boolean().accepts(&v));
    }

    #[test]
    fn prop_single_element_string_array(items in prop::collection::vec(".{0,5}", 0..4)) {
        let expected = items.len() == 1;
        prop_assert_eq!(array_between(string(), 1, 1).accepts(&Value::from(items)), expected);
    }

    #[test]
    fn prop_array_rejects_any_non_string_element(
        items in prop::collection::vec(".{0,5}", 0..4),
        position in 0usize..4,
        n in any::<f64>(),
    ) {
        let mut values: Vec<Value> = items.into_iter().map(Value::from).collect();
        let position = position.min(values.len());
        values.insert(position, Value::from(n));
        prop_assert!(!array(string()).accepts(&Value::Array(values)));
    }

    #[test]
    fn prop_strict_object_rejects_unknown_keys(key in "[a-z]{1,8}") {
        let input = Value::object([("k", "v"), (key.as_str(), "w")]);
        let strict = strict_object_of([("k", string())]);
        let loose = object_of([("k", string())]);
        prop_assert_eq!(strict.accepts(&input), key == "k");
        prop_assert!(loose.accepts(&input));
    }

    #[test]
    fn prop_optional_field_may_be_missing(key in "[a-z]{1,8}") {
        let input = Value::object([(key.as_str(), "v")]);
        let missing = if key == "k" { "j" } else { "k" };
        prop_assert!(object_of([(missing, optional(number()))]).accepts(&input));
        prop_assert!(!object_of([(missing, number())]).accepts(&input));
    }

    #[test]
    fn prop_label_does_not_depend_on_value(v in scalar()) {
        let check = array(nullable(string()));
        let before = check.label().to_string();
        let _ = check.accepts(&v);
        prop_assert_eq!(check.label(), before.as_str());
    }
}
