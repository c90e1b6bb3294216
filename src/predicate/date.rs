//! Date checks

use super::combinators::{Check, Predicate};
use crate::value::Timestamp;
use crate::Value;

/// Predicate that accepts valid dates within inclusive bounds.
///
/// Bounds are kept as plain milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct DateRange {
    min: f64,
    max: f64,
}

impl Predicate for DateRange {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value {
            Value::Date(ts) => {
                let millis = ts.as_millis();
                !millis.is_nan() && millis >= self.min && millis <= self.max
            }
            _ => false,
        }
    }
}

/// Accept valid dates from the Unix epoch onward.
///
/// # Example
///
/// ```rust
/// use want::{date, Timestamp, Value};
/// use std::time::SystemTime;
///
/// assert!(date().accepts(&Value::from(SystemTime::now())));
/// assert!(!date().accepts(&Value::from(Timestamp::INVALID)));
/// assert!(!date().accepts(&Value::from(1_700_000_000_000i64)));
/// ```
pub fn date() -> Check {
    date_between(Timestamp::EPOCH, f64::INFINITY)
}

/// Accept valid dates from `min` onward.
///
/// # Example
///
/// ```rust
/// use want::{date_min, Value};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let recent = date_min(UNIX_EPOCH + Duration::from_secs(60));
/// assert!(recent.accepts(&Value::from(UNIX_EPOCH + Duration::from_secs(61))));
/// assert!(!recent.accepts(&Value::from(UNIX_EPOCH)));
/// ```
pub fn date_min(min: impl Into<Timestamp>) -> Check {
    date_between(min, f64::INFINITY)
}

/// Accept valid dates in `[min, max]`.
///
/// Bounds may be anything convertible to a [`Timestamp`]: another timestamp,
/// a [`SystemTime`](std::time::SystemTime), or milliseconds since the epoch.
///
/// # Example
///
/// ```rust
/// use want::{date_between, Timestamp, Value};
///
/// let in_2024 = date_between(1_704_067_200_000i64, 1_735_689_599_999i64);
/// assert!(in_2024.accepts(&Value::from(Timestamp::from_millis(1_718_000_000_000.0))));
/// assert!(!in_2024.accepts(&Value::from(Timestamp::EPOCH)));
/// ```
pub fn date_between(min: impl Into<Timestamp>, max: impl Into<Timestamp>) -> Check {
    Check::new(
        "Date",
        DateRange {
            min: min.into().as_millis(),
            max: max.into().as_millis(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_date_accepts_dates_only() {
        let p = date();
        assert!(p.accepts(&Value::from(Timestamp::EPOCH)));
        assert!(p.accepts(&Value::from(UNIX_EPOCH + Duration::from_secs(86_400))));
        assert!(!p.accepts(&Value::from(0)));
        assert!(!p.accepts(&Value::from("1970-01-01")));
        assert!(!p.accepts(&Value::Null));
        assert!(!p.accepts(&Value::Absent));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(!date().accepts(&Value::from(Timestamp::INVALID)));
        assert!(!date_between(f64::NEG_INFINITY, f64::INFINITY)
            .accepts(&Value::from(Timestamp::INVALID)));
    }

    #[test]
    fn test_pre_epoch_needs_explicit_min() {
        let before = Value::from(UNIX_EPOCH - Duration::from_secs(1));
        assert!(!date().accepts(&before));
        assert!(date_between(f64::NEG_INFINITY, f64::INFINITY).accepts(&before));
    }

    #[test]
    fn test_bounds_from_system_time() {
        let start = UNIX_EPOCH + Duration::from_secs(10);
        let end = UNIX_EPOCH + Duration::from_secs(20);
        let p = date_between(start, end);
        assert!(p.accepts(&Value::from(start)));
        assert!(p.accepts(&Value::from(end)));
        assert!(!p.accepts(&Value::from(end + Duration::from_millis(1))));
        assert!(!p.accepts(&Value::from(UNIX_EPOCH)));
    }

    #[test]
    fn test_date_min() {
        let p = date_min(-1000i64);
        let before = Value::from(UNIX_EPOCH - Duration::from_millis(500));
        assert!(p.accepts(&before));
        assert!(p.accepts(&Value::from(Timestamp::from_millis(1.0e15))));
        assert!(!p.accepts(&Value::from(Timestamp::from_millis(-1001.0))));
        assert!(!p.accepts(&Value::from(Timestamp::INVALID)));
        assert_eq!(p.label(), "Date");
    }

    #[test]
    fn test_label() {
        assert_eq!(date().label(), "Date");
    }
}
