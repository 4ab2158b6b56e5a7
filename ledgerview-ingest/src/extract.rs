//! Envelope resolution: find the record array inside whatever wrapper the
//! backend chose this time.
//!
//! Each entity kind has an ordered table of extraction paths. The first path
//! whose target exists and is an array wins, even when that array is empty;
//! later paths are never consulted after a match. The tables are plain data
//! so the priority order is inspectable and testable on its own.

use serde_json::Value;
use tracing::warn;

/// Which entity a collection response is expected to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Transaction,
    User,
}

/// A named rule describing where, inside an envelope, the record array lives
#[derive(Debug, Clone, Copy)]
pub struct ExtractionPath {
    pub name: &'static str,
    /// Object keys walked from the envelope root; empty means the root itself
    pub steps: &'static [&'static str],
}

const ACCOUNT_PATHS: &[ExtractionPath] = &[
    ExtractionPath { name: "root", steps: &[] },
    ExtractionPath { name: "accounts", steps: &["accounts"] },
    ExtractionPath { name: "data", steps: &["data"] },
    ExtractionPath { name: "data.accounts", steps: &["data", "accounts"] },
];

const TRANSACTION_PATHS: &[ExtractionPath] = &[
    ExtractionPath { name: "transactionDetails", steps: &["transactionDetails"] },
    ExtractionPath { name: "data.transactions", steps: &["data", "transactions"] },
    ExtractionPath { name: "transactions", steps: &["transactions"] },
    ExtractionPath { name: "root", steps: &[] },
];

const USER_PATHS: &[ExtractionPath] = &[
    ExtractionPath { name: "data.users", steps: &["data", "users"] },
    ExtractionPath { name: "users", steps: &["users"] },
    ExtractionPath { name: "content", steps: &["content"] },
    ExtractionPath { name: "data.content", steps: &["data", "content"] },
    ExtractionPath { name: "root", steps: &[] },
    ExtractionPath { name: "data", steps: &["data"] },
];

/// The ordered extraction table for one entity kind
pub fn paths_for(kind: EntityKind) -> &'static [ExtractionPath] {
    match kind {
        EntityKind::Account => ACCOUNT_PATHS,
        EntityKind::Transaction => TRANSACTION_PATHS,
        EntityKind::User => USER_PATHS,
    }
}

fn walk<'a>(root: &'a Value, steps: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for step in steps {
        current = current.get(step)?;
    }
    Some(current)
}

/// Resolve the raw record list out of an arbitrary collection response.
///
/// Never fails: when no path targets an array the result is empty and a
/// warning is logged. Callers handling stats-shaped responses fall back to
/// scalar fields (`scalar_u64` / `scalar_decimal`) after an empty resolve.
pub fn resolve_list(raw: &Value, kind: EntityKind) -> Vec<Value> {
    for path in paths_for(kind) {
        if let Some(Value::Array(records)) = walk(raw, path.steps) {
            return records.clone();
        }
    }
    warn!(kind = ?kind, "no extraction path matched a record array");
    Vec::new()
}

/// Read a scalar count out of a stats-shaped response: first candidate found
/// at the root or under `data` wins. Accepts numbers and numeric strings.
pub fn scalar_u64(raw: &Value, candidates: &[&str]) -> Option<u64> {
    scalar(raw, candidates).and_then(crate::fields::lenient_u64)
}

/// Like [`scalar_u64`] but for monetary scalars.
pub fn scalar_decimal(raw: &Value, candidates: &[&str]) -> Option<rust_decimal::Decimal> {
    scalar(raw, candidates).and_then(crate::fields::parse_decimal)
}

fn scalar<'a>(raw: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    for name in candidates {
        if let Some(v) = raw.get(name).filter(|v| !v.is_null()) {
            return Some(v);
        }
        if let Some(v) = raw.get("data").and_then(|d| d.get(name)).filter(|v| !v.is_null()) {
            return Some(v);
        }
    }
    None
}
