//! Transaction lifecycle inference.
//!
//! The backend is inconsistent about status: sometimes a canonical value,
//! sometimes a synonym ("SUCCESSFUL", "QUEUED", ...), sometimes nothing at
//! all. This module turns whatever arrived into exactly one of
//! COMPLETED/PENDING/FAILED via an ordered rule cascade.
//!
//! `now` is always injected by the caller. Reading a clock in here would make
//! the classification irreproducible.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::transaction::TransactionStatus;

/// Transactions older than this with no status signal at all are assumed to
/// have settled.
const SETTLED_AFTER_MINUTES: i64 = 60;

/// Classify a transaction's lifecycle status.
///
/// Ordered rules, first hit wins:
/// 1. `secondary` (the backend's "actualStatus") via the short synonym table
/// 2. `primary` (the plain "status" field) via the full synonym table
/// 3. a present `balance_after` means the ledger moved, so COMPLETED
/// 4. no signal but older than an hour: COMPLETED
/// 5. otherwise PENDING
///
/// Unrecognized strings fall through to the next rule rather than erroring;
/// no value other than the three canonical ones can escape.
pub fn infer_status(
    primary: Option<&str>,
    secondary: Option<&str>,
    balance_after: Option<Decimal>,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> TransactionStatus {
    if let Some(status) = secondary.and_then(map_secondary) {
        return status;
    }
    if let Some(status) = primary.and_then(map_primary) {
        return status;
    }
    if balance_after.is_some() {
        return TransactionStatus::Completed;
    }
    if now - created_at > Duration::minutes(SETTLED_AFTER_MINUTES) {
        return TransactionStatus::Completed;
    }
    TransactionStatus::Pending
}

/// Short table for the secondary ("actualStatus") field
fn map_secondary(raw: &str) -> Option<TransactionStatus> {
    match raw.trim().to_uppercase().as_str() {
        "SUCCESS" | "SUCCESSFUL" => Some(TransactionStatus::Completed),
        "PROCESSING" | "IN_PROGRESS" => Some(TransactionStatus::Pending),
        "FAILED" | "ERROR" | "CANCELLED" => Some(TransactionStatus::Failed),
        _ => None,
    }
}

/// Full synonym table for the primary status field
fn map_primary(raw: &str) -> Option<TransactionStatus> {
    match raw.trim().to_uppercase().as_str() {
        "COMPLETED" | "SUCCESS" | "SUCCESSFUL" | "COMPLETE" | "DONE" | "CONFIRMED"
        | "PROCESSED" => Some(TransactionStatus::Completed),
        "PENDING" | "PROCESSING" | "IN_PROGRESS" | "WAITING" | "SUBMITTED" | "QUEUED"
        | "INITIATED" => Some(TransactionStatus::Pending),
        "FAILED" | "ERROR" | "CANCELLED" | "REJECTED" | "DECLINED" | "TIMEOUT" | "ABORTED" => {
            Some(TransactionStatus::Failed)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, h, m, 0).unwrap()
    }

    #[test]
    fn test_secondary_wins_over_primary() {
        let t = at(12, 0);
        let status = infer_status(Some("FAILED"), Some("SUCCESSFUL"), None, t, t);
        assert_eq!(status, TransactionStatus::Completed);
    }

    #[test]
    fn test_unrecognized_secondary_falls_through() {
        let t = at(12, 0);
        let status = infer_status(Some("REJECTED"), Some("WEIRD"), None, t, t);
        assert_eq!(status, TransactionStatus::Failed);
    }

    #[test]
    fn test_primary_synonyms() {
        let t = at(12, 0);
        for raw in ["SUCCESS", "done", "Confirmed", "processed", "COMPLETE"] {
            assert_eq!(
                infer_status(Some(raw), None, None, t, t),
                TransactionStatus::Completed,
                "{raw}"
            );
        }
        for raw in ["WAITING", "submitted", "QUEUED", "initiated", "in_progress"] {
            assert_eq!(
                infer_status(Some(raw), None, None, t, t),
                TransactionStatus::Pending,
                "{raw}"
            );
        }
        for raw in ["REJECTED", "declined", "TIMEOUT", "Aborted", "cancelled"] {
            assert_eq!(
                infer_status(Some(raw), None, None, t, t),
                TransactionStatus::Failed,
                "{raw}"
            );
        }
    }

    #[test]
    fn test_balance_after_implies_completed() {
        let t = at(12, 0);
        let status = infer_status(None, None, Some(dec!(5000)), t, t);
        assert_eq!(status, TransactionStatus::Completed);
    }

    #[test]
    fn test_age_heuristic() {
        let created = at(12, 0);
        // 30 minutes old: still pending
        assert_eq!(
            infer_status(None, None, None, created, at(12, 30)),
            TransactionStatus::Pending
        );
        // exactly 60 minutes: boundary is strict, still pending
        assert_eq!(
            infer_status(None, None, None, created, at(13, 0)),
            TransactionStatus::Pending
        );
        // 90 minutes old: assumed settled
        assert_eq!(
            infer_status(None, None, None, created, at(13, 30)),
            TransactionStatus::Completed
        );
    }

    #[test]
    fn test_deterministic() {
        let t = at(12, 0);
        let a = infer_status(Some("pending"), None, Some(dec!(1)), t, t);
        let b = infer_status(Some("pending"), None, Some(dec!(1)), t, t);
        assert_eq!(a, b);
        assert_eq!(a, TransactionStatus::Pending);
    }
}
