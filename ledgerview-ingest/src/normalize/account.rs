//! Account record coercion.

use chrono::{DateTime, Utc};
use ledgerview_core::{Account, AccountType, OwnerSummary};
use serde_json::Value;

use crate::fields;
use crate::normalize::user::person_name;

/// Coerce one raw account record into the canonical model.
///
/// Field rules (first satisfied candidate wins):
/// - `accountNumber` | `account_number`, default empty (empty marks the
///   record invalid for per-user counting, it is not dropped here)
/// - `accountType` | `account_type`, uppercased, default UNKNOWN
/// - `balance` parsed leniently, negative clamps to 0, failure is 0
/// - `isActive` | `active` | `is_active`, then a string `status` equal to
///   "active"; absence is false
/// - timestamps fall back to `now`
pub fn account_from_value(raw: &Value, now: DateTime<Utc>) -> Account {
    let account_type = fields::string_field(raw, &["accountType", "account_type"])
        .map(|s| AccountType::from_raw(&s.to_uppercase()))
        .unwrap_or_default();

    let owner = raw
        .get("owner")
        .or_else(|| raw.get("user"))
        .filter(|v| v.is_object())
        .map(|v| OwnerSummary {
            id: fields::string_field(v, &["id", "userId", "user_id"]).unwrap_or_default(),
            name: person_name(v),
        });

    let transaction_count = fields::pick(
        raw,
        &["totalTransactions", "total_transactions", "transactionCount", "transaction_count"],
    )
    .and_then(fields::lenient_u64);

    Account {
        id: fields::string_field(raw, &["id", "accountId", "account_id"]).unwrap_or_default(),
        account_number: fields::string_field(raw, &["accountNumber", "account_number"])
            .unwrap_or_default(),
        account_type,
        balance: fields::balance_field(raw, &["balance"]),
        is_active: fields::active_flag(raw, &["isActive", "active", "is_active"], Some("status")),
        created_at: fields::timestamp_or(raw, &["createdAt", "created_at"], now),
        updated_at: fields::timestamp_or(raw, &["updatedAt", "updated_at"], now),
        owner,
        transaction_count,
    }
}
