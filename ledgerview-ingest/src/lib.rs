//! ledgerview-ingest: turns raw backend JSON into canonical entities.
//!
//! The backend wraps collections in inconsistent envelopes and is loose about
//! field names, casing, and types (string-typed numbers and booleans, missing
//! fields). This crate resolves the envelope (`extract`), then coerces each
//! record into the `ledgerview-core` model (`normalize`). Both stages are
//! total: malformed input degrades to documented defaults, never to an error.

pub mod extract;
pub mod fields;
pub mod normalize;

pub use extract::{resolve_list, EntityKind, ExtractionPath};
pub use normalize::{
    account_from_value, accounts_from_response, admin_stats_from_value, stat_scalars,
    transaction_from_value, transactions_from_response, user_from_value, users_from_response,
    StatScalars,
};
