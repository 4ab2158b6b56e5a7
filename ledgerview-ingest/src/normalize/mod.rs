//! Per-entity coercers: one raw record in, one canonical entity out.
//!
//! Every coercer is a total function. The `now` argument is the instant used
//! for timestamp fallbacks and status inference; callers pass it in once per
//! fetch so re-normalizing the same payload stays deterministic.

pub mod account;
pub mod stats;
pub mod transaction;
pub mod user;

pub use account::account_from_value;
pub use stats::{admin_stats_from_value, stat_scalars, StatScalars};
pub use transaction::transaction_from_value;
pub use user::user_from_value;

use chrono::{DateTime, Utc};
use ledgerview_core::{Account, Transaction, UserSummary};
use serde_json::Value;

use crate::extract::{resolve_list, EntityKind};

/// Resolve and coerce an accounts collection response
pub fn accounts_from_response(raw: &Value, now: DateTime<Utc>) -> Vec<Account> {
    resolve_list(raw, EntityKind::Account)
        .iter()
        .map(|r| account_from_value(r, now))
        .collect()
}

/// Resolve and coerce a transactions collection response
pub fn transactions_from_response(raw: &Value, now: DateTime<Utc>) -> Vec<Transaction> {
    resolve_list(raw, EntityKind::Transaction)
        .iter()
        .map(|r| transaction_from_value(r, now))
        .collect()
}

/// Resolve and coerce a users collection response
pub fn users_from_response(raw: &Value, now: DateTime<Utc>) -> Vec<UserSummary> {
    resolve_list(raw, EntityKind::User)
        .iter()
        .map(|r| user_from_value(r, now))
        .collect()
}
