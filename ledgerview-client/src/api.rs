//! The network seam: every fetch goes through [`BankApi`].
//!
//! The core never performs I/O directly; it asks this trait for parsed JSON
//! and reconciles whatever comes back. Tests substitute a scripted fake.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport-level failure. No retry happens at this layer; callers may
/// re-trigger a whole view build.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed (connect/timeout/decode)
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// A client that returns already-parsed JSON for an endpoint.
///
/// Read-only on purpose: every view build is a fresh set of GETs, and
/// writes (transfers, account changes) live outside this layer.
#[async_trait]
pub trait BankApi: Send + Sync {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, ApiError>;
}

/// Endpoint paths used by the view builders
pub mod endpoints {
    pub const ACCOUNTS: &str = "/api/accounts";
    pub const RECENT_TRANSACTIONS: &str = "/api/transactions/recent";
    pub const ADMIN_USERS: &str = "/api/admin/users";
    pub const ADMIN_TRANSACTIONS: &str = "/api/admin/transactions";

    /// Per-account enrichment fetch (transaction count)
    pub fn account_transactions(account_id: &str) -> String {
        format!("/api/accounts/{account_id}/transactions")
    }
}
