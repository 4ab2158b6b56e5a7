//! Canonical account model and the low-balance advisory flag.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balances strictly below this are highlighted as "at risk" in the UI.
/// Advisory only; nothing is ever blocked on it.
pub const AT_RISK_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Account product type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountType {
    #[serde(rename = "SAVINGS")]
    Savings,
    #[serde(rename = "CHECKING")]
    Checking,
    #[serde(rename = "BUSINESS")]
    Business,
    #[serde(rename = "UNKNOWN")]
    #[default]
    Unknown,
}

impl AccountType {
    /// Parse an already-uppercased raw value; anything unrecognized is UNKNOWN
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "SAVINGS" => AccountType::Savings,
            "CHECKING" => AccountType::Checking,
            "BUSINESS" => AccountType::Business,
            _ => AccountType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "SAVINGS",
            AccountType::Checking => "CHECKING",
            AccountType::Business => "BUSINESS",
            AccountType::Unknown => "UNKNOWN",
        }
    }
}

/// Embedded owner summary, present on admin-facing account records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    pub name: String,
}

/// A fully normalized account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    /// Unique per owner; empty means the record failed validation upstream
    pub account_number: String,
    pub account_type: AccountType,
    /// Never negative after coercion
    pub balance: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: Option<OwnerSummary>,
    /// Filled in by per-account enrichment; None until then
    pub transaction_count: Option<u64>,
}

impl Account {
    /// An account is valid iff it carries a non-empty account number
    pub fn is_valid(&self) -> bool {
        !self.account_number.is_empty()
    }

    /// True when the balance is strictly below the low-balance threshold
    pub fn is_at_risk(&self) -> bool {
        is_at_risk(self.balance)
    }
}

/// Low-balance check shared by account and per-user aggregate views
pub fn is_at_risk(balance: Decimal) -> bool {
    balance < AT_RISK_THRESHOLD
}
