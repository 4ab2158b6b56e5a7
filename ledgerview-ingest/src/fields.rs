//! Lenient field readers shared by the per-entity coercers.
//!
//! The backend sends numbers as strings, booleans as strings or 0/1, and
//! switches between camelCase and snake_case. Every reader here is total:
//! a malformed value becomes the documented default, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Round money to 2 places, midpoints away from zero
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// First present, non-null candidate field wins
pub fn pick<'a>(record: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|name| record.get(*name).filter(|v| !v.is_null()))
}

/// Read a string-ish field: strings pass through, numbers are rendered.
/// Empty strings count as absent.
pub fn string_field(record: &Value, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|name| {
        let s = match record.get(*name)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!s.is_empty()).then_some(s)
    })
}

/// Truthiness ladder for a single value: bool passes through, "true"/"1"
/// strings (case-insensitive) are true, the number 1 is true, all else false.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        Value::Number(n) => n.as_i64() == Some(1) || n.as_f64() == Some(1.0),
        _ => false,
    }
}

/// Activity/enabled flag: the first present candidate wins and is read via
/// [`truthy`]; if none is present, a string `status_candidate` field equal to
/// "active" (case-insensitive) counts as true. Absence of everything is false.
pub fn active_flag(record: &Value, candidates: &[&str], status_candidate: Option<&str>) -> bool {
    if let Some(v) = pick(record, candidates) {
        return truthy(v);
    }
    if let Some(name) = status_candidate {
        if let Some(Value::String(s)) = record.get(name) {
            return s.trim().eq_ignore_ascii_case("active");
        }
    }
    false
}

/// Parse a decimal out of a JSON number or numeric string (commas tolerated)
pub fn parse_decimal(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => s.trim().replace(',', "").parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Monetary amount: non-negative, 2-place. Negative input keeps its
/// magnitude (the sign belongs to the direction field); parse failure is 0.
pub fn amount_field(record: &Value, candidates: &[&str]) -> Decimal {
    pick(record, candidates)
        .and_then(parse_decimal)
        .map(|d| round_money(d.abs()))
        .unwrap_or(Decimal::ZERO)
}

/// Balance: non-negative, 2-place. A negative balance is clamped to 0 rather
/// than flipped; parse failure is 0.
pub fn balance_field(record: &Value, candidates: &[&str]) -> Decimal {
    pick(record, candidates)
        .and_then(parse_decimal)
        .map(|d| round_money(d.max(Decimal::ZERO)))
        .unwrap_or(Decimal::ZERO)
}

/// Optional signed decimal (running balances); unparsable becomes None
pub fn optional_decimal(record: &Value, candidates: &[&str]) -> Option<Decimal> {
    pick(record, candidates)
        .and_then(parse_decimal)
        .map(round_money)
}

/// Lenient unsigned count: numbers or numeric strings, negatives clamp to 0
pub fn lenient_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|i| i.max(0) as u64))
            .or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse::<i64>().ok().map(|i| i.max(0) as u64),
        _ => None,
    }
}

/// Parse a timestamp string (RFC 3339, naive ISO, date-only) or epoch millis
pub fn parse_timestamp(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(ndt.and_utc());
            }
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
                return Some(ndt.and_utc());
            }
            if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Some(d.and_time(NaiveTime::MIN).and_utc());
            }
            None
        }
        Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    }
}

/// Timestamp field with a fallback instant for absent/unparsable values
pub fn timestamp_or(record: &Value, candidates: &[&str], fallback: DateTime<Utc>) -> DateTime<Utc> {
    pick(record, candidates)
        .and_then(parse_timestamp)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_truthy_table() {
        for v in [json!(true), json!("true"), json!("TRUE"), json!("1"), json!(1)] {
            assert!(truthy(&v), "{v}");
        }
        for v in [
            json!(false),
            json!("false"),
            json!("0"),
            json!(0),
            json!(null),
            json!("yes"),
            json!(2),
            json!([1]),
        ] {
            assert!(!truthy(&v), "{v}");
        }
    }

    #[test]
    fn test_active_flag_candidate_order() {
        // isActive wins over a contradicting `active`
        let record = json!({"isActive": false, "active": true});
        assert!(!active_flag(&record, &["isActive", "active", "is_active"], Some("status")));

        let record = json!({"status": "ACTIVE"});
        assert!(active_flag(&record, &["isActive", "active", "is_active"], Some("status")));

        let record = json!({"status": "SUSPENDED"});
        assert!(!active_flag(&record, &["isActive", "active", "is_active"], Some("status")));

        let record = json!({});
        assert!(!active_flag(&record, &["isActive", "active", "is_active"], Some("status")));
    }

    #[test]
    fn test_amount_and_balance_defaults() {
        assert_eq!(amount_field(&json!({"amount": "500.5"}), &["amount"]), dec!(500.50));
        assert_eq!(amount_field(&json!({"amount": "-12.345"}), &["amount"]), dec!(12.35));
        assert_eq!(amount_field(&json!({"amount": "garbage"}), &["amount"]), Decimal::ZERO);
        assert_eq!(amount_field(&json!({}), &["amount"]), Decimal::ZERO);
        assert_eq!(amount_field(&json!({"amount": "1,500.00"}), &["amount"]), dec!(1500.00));

        assert_eq!(balance_field(&json!({"balance": -3.0}), &["balance"]), Decimal::ZERO);
        assert_eq!(balance_field(&json!({"balance": 10.5}), &["balance"]), dec!(10.50));
    }

    #[test]
    fn test_timestamp_formats() {
        let rfc = parse_timestamp(&json!("2024-01-07T23:59:00Z")).unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-01-07T23:59:00+00:00");

        let naive = parse_timestamp(&json!("2024-01-07T23:59:00")).unwrap();
        assert_eq!(naive, rfc);

        let date_only = parse_timestamp(&json!("2024-01-07")).unwrap();
        assert_eq!(date_only.to_rfc3339(), "2024-01-07T00:00:00+00:00");

        assert!(parse_timestamp(&json!("not a date")).is_none());

        let fallback = Utc::now();
        assert_eq!(timestamp_or(&json!({}), &["createdAt"], fallback), fallback);
    }

    #[test]
    fn test_string_field_accepts_numbers() {
        let record = json!({"id": 42, "reference": "  REF-1  ", "blank": ""});
        assert_eq!(string_field(&record, &["id"]), Some("42".to_string()));
        assert_eq!(string_field(&record, &["reference"]), Some("REF-1".to_string()));
        assert_eq!(string_field(&record, &["blank", "id"]), Some("42".to_string()));
        assert_eq!(string_field(&record, &["missing"]), None);
    }
}
