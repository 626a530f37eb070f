//! Unix epoch-seconds coercion.
//!
//! Mux reports timestamps as seconds since the epoch, usually as a decimal
//! string (`"1616000000"`) and occasionally as a bare integer.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::NormalizeError;

const EXPECTED: &str = "epoch seconds as integer or decimal string";

/// Convert an epoch-seconds value into a UTC date-time.
///
/// Accepts a JSON integer or a string holding an optionally signed decimal
/// integer. Floats, RFC 3339 strings, booleans, null and containers are
/// rejected, as are values outside chrono's representable range.
pub fn coerce_epoch(value: &Value) -> Result<DateTime<Utc>, NormalizeError> {
    let seconds = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_seconds(s),
        _ => None,
    };

    seconds
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| NormalizeError::type_coercion("value", EXPECTED, value))
}

fn parse_seconds(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_integer_and_string_agree() {
        for e in [0_i64, 1, 59, 1_616_000_000, 4_102_444_800] {
            let from_int = coerce_epoch(&json!(e)).unwrap();
            let from_str = coerce_epoch(&json!(e.to_string())).unwrap();
            assert_eq!(from_int, from_str, "epoch {}", e);
            assert_eq!(from_int.timestamp(), e);
        }
    }

    proptest! {
        #[test]
        fn test_integer_and_string_agree_for_any_epoch(
            e in 0i64..=DateTime::<Utc>::MAX_UTC.timestamp()
        ) {
            let from_int = coerce_epoch(&json!(e)).unwrap();
            let from_str = coerce_epoch(&json!(e.to_string())).unwrap();
            prop_assert_eq!(from_int, from_str);
            prop_assert_eq!(from_int.timestamp(), e);
            prop_assert_eq!(coerce_epoch(&json!(e)).unwrap(), from_int);
        }
    }

    #[test]
    fn test_coercion_is_deterministic() {
        let value = json!("1616000000");
        let first = coerce_epoch(&value).unwrap();
        let second = coerce_epoch(&value).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Utc.with_ymd_and_hms(2021, 3, 17, 16, 53, 20).unwrap());
    }

    #[test]
    fn test_epoch_zero_is_unix_origin() {
        let dt = coerce_epoch(&json!(0)).unwrap();
        assert_eq!(dt.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_signed_strings() {
        assert_eq!(coerce_epoch(&json!("-60")).unwrap().timestamp(), -60);
        assert_eq!(coerce_epoch(&json!("+60")).unwrap().timestamp(), 60);
    }

    #[test]
    fn test_rejects_non_integer_inputs() {
        for bad in [
            json!("abc"),
            json!(3.14),
            json!(null),
            json!(true),
            json!(""),
            json!("-"),
            json!(" 1616000000"),
            json!("1616000000.5"),
            json!("2021-03-17T16:53:20Z"),
            json!([1616000000]),
            json!({"seconds": 1616000000}),
        ] {
            let err = coerce_epoch(&bad).unwrap_err();
            assert!(err.is_type_coercion(), "expected coercion failure for {}", bad);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = coerce_epoch(&json!(i64::MAX)).unwrap_err();
        assert!(err.is_type_coercion());
        let err = coerce_epoch(&json!(u64::MAX)).unwrap_err();
        assert!(err.is_type_coercion());
    }
}
