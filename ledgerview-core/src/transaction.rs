//! Canonical transaction model: type, direction, and lifecycle status.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of movement a transaction represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "DEPOSIT")]
    Deposit,
    #[serde(rename = "WITHDRAWAL")]
    Withdrawal,
    #[serde(rename = "TRANSFER")]
    Transfer,
}

impl TransactionType {
    /// Wire name as the backend spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Transfer => "TRANSFER",
        }
    }

    /// All types in canonical display order
    pub fn all() -> [TransactionType; 3] {
        [
            TransactionType::Deposit,
            TransactionType::Withdrawal,
            TransactionType::Transfer,
        ]
    }
}

/// Which side of the ledger the amount lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "CREDIT")]
    Credit,
    #[serde(rename = "DEBIT")]
    Debit,
}

impl Direction {
    /// Sign applied in net computations: CREDIT adds, DEBIT subtracts
    pub fn sign(&self) -> Decimal {
        match self {
            Direction::Credit => Decimal::ONE,
            Direction::Debit => Decimal::NEGATIVE_ONE,
        }
    }
}

/// Lifecycle status. Only these three values ever escape normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Which account a transaction belongs to, as embedded in the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountRef {
    pub account_number: String,
    pub account_type: String,
}

/// A fully normalized transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub reference_number: String,
    /// Always non-negative; the sign lives in `direction`
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub direction: Direction,
    pub status: TransactionStatus,
    /// Running balance after this transaction, when the backend sends one
    pub balance_after: Option<Decimal>,
    pub description: String,
    /// Marked for manual review by the backend
    pub flagged: bool,
    pub created_at: DateTime<Utc>,
    pub account: AccountRef,
}

impl Transaction {
    /// Amount with direction applied: positive for credits, negative for debits
    pub fn signed_amount(&self) -> Decimal {
        self.amount * self.direction.sign()
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }

    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn(amount: Decimal, direction: Direction) -> Transaction {
        Transaction {
            id: "t-1".to_string(),
            reference_number: "REF-1".to_string(),
            amount,
            transaction_type: TransactionType::Deposit,
            direction,
            status: TransactionStatus::Completed,
            balance_after: None,
            description: String::new(),
            flagged: false,
            created_at: Utc::now(),
            account: AccountRef::default(),
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(txn(dec!(25.00), Direction::Credit).signed_amount(), dec!(25.00));
        assert_eq!(txn(dec!(25.00), Direction::Debit).signed_amount(), dec!(-25.00));
    }

    #[test]
    fn test_status_wire_names() {
        let s = serde_json::to_string(&TransactionStatus::Completed).unwrap();
        assert_eq!(s, "\"COMPLETED\"");
        let t = serde_json::to_string(&TransactionType::Withdrawal).unwrap();
        assert_eq!(t, "\"WITHDRAWAL\"");
    }
}
