//! Transaction record coercion, including lifecycle status inference.

use chrono::{DateTime, Utc};
use ledgerview_core::{infer_status, AccountRef, Direction, Transaction, TransactionType};
use serde_json::Value;

use crate::fields;

/// Coerce one raw transaction record into the canonical model.
///
/// Type mapping: DEPOSIT/WITHDRAWAL/TRANSFER pass through; the backend
/// sometimes sends the direction vocabulary in the type field, so CREDIT
/// maps to DEPOSIT and DEBIT to WITHDRAWAL; anything else is TRANSFER.
/// Status comes from the inference cascade over `actualStatus`, `status`,
/// `balanceAfter`, and record age.
pub fn transaction_from_value(raw: &Value, now: DateTime<Utc>) -> Transaction {
    let created_at = fields::timestamp_or(raw, &["createdAt", "date", "created_at"], now);
    let transaction_type = coerce_type(fields::string_field(raw, &["transactionType", "type"]));
    let direction = coerce_direction(
        fields::string_field(raw, &["transactionDirection", "direction"]),
        transaction_type,
    );
    let balance_after = fields::optional_decimal(raw, &["balanceAfter", "balance_after"]);

    let primary = fields::string_field(raw, &["status"]);
    let secondary = fields::string_field(raw, &["actualStatus", "actual_status"]);
    let status = infer_status(
        primary.as_deref(),
        secondary.as_deref(),
        balance_after,
        created_at,
        now,
    );

    Transaction {
        id: fields::string_field(raw, &["id", "transactionId", "transaction_id"])
            .unwrap_or_default(),
        reference_number: fields::string_field(
            raw,
            &["referenceNumber", "reference", "transferReference"],
        )
        .unwrap_or_default(),
        amount: fields::amount_field(raw, &["amount"]),
        transaction_type,
        direction,
        status,
        balance_after,
        description: fields::string_field(raw, &["description"]).unwrap_or_default(),
        flagged: fields::pick(raw, &["flagged"]).map(fields::truthy).unwrap_or(false),
        created_at,
        account: account_ref(raw),
    }
}

fn coerce_type(raw: Option<String>) -> TransactionType {
    match raw.map(|s| s.to_uppercase()).as_deref() {
        Some("DEPOSIT") | Some("CREDIT") => TransactionType::Deposit,
        Some("WITHDRAWAL") | Some("DEBIT") => TransactionType::Withdrawal,
        _ => TransactionType::Transfer,
    }
}

fn coerce_direction(raw: Option<String>, transaction_type: TransactionType) -> Direction {
    match raw.map(|s| s.to_uppercase()).as_deref() {
        Some("CREDIT") => Direction::Credit,
        Some("DEBIT") => Direction::Debit,
        // absent or unrecognized: deposits credit the account, the rest debit it
        _ => match transaction_type {
            TransactionType::Deposit => Direction::Credit,
            _ => Direction::Debit,
        },
    }
}

fn account_ref(raw: &Value) -> AccountRef {
    let embedded = raw.get("account").filter(|v| v.is_object());
    let account_number = fields::string_field(raw, &["accountNumber", "account_number"])
        .or_else(|| {
            embedded.and_then(|a| fields::string_field(a, &["accountNumber", "account_number"]))
        })
        .unwrap_or_default();
    let account_type = embedded
        .and_then(|a| fields::string_field(a, &["accountType", "account_type"]))
        .map(|s| s.to_uppercase())
        .unwrap_or_default();
    AccountRef {
        account_number,
        account_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_core::TransactionStatus;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let now = Utc::now();
        let raw = json!({
            "id": 901,
            "referenceNumber": "TXN-901",
            "amount": "250.00",
            "transactionType": "WITHDRAWAL",
            "transactionDirection": "DEBIT",
            "status": "COMPLETED",
            "balanceAfter": 749.50,
            "description": "ATM withdrawal",
            "createdAt": "2024-01-07T10:30:00Z",
            "account": {"accountNumber": "1234567890", "accountType": "checking"}
        });
        let t = transaction_from_value(&raw, now);
        assert_eq!(t.id, "901");
        assert_eq!(t.reference_number, "TXN-901");
        assert_eq!(t.amount, dec!(250.00));
        assert_eq!(t.transaction_type, TransactionType::Withdrawal);
        assert_eq!(t.direction, Direction::Debit);
        assert_eq!(t.status, TransactionStatus::Completed);
        assert_eq!(t.balance_after, Some(dec!(749.50)));
        assert_eq!(t.account.account_number, "1234567890");
        assert_eq!(t.account.account_type, "CHECKING");
        assert_eq!(t.signed_amount(), dec!(-250.00));
    }

    #[test]
    fn test_direction_vocabulary_in_type_field() {
        let now = Utc::now();
        let credit = transaction_from_value(&json!({"type": "credit"}), now);
        assert_eq!(credit.transaction_type, TransactionType::Deposit);
        assert_eq!(credit.direction, Direction::Credit);

        let debit = transaction_from_value(&json!({"type": "DEBIT"}), now);
        assert_eq!(debit.transaction_type, TransactionType::Withdrawal);
        assert_eq!(debit.direction, Direction::Debit);

        let unknown = transaction_from_value(&json!({"type": "REVERSAL"}), now);
        assert_eq!(unknown.transaction_type, TransactionType::Transfer);
        assert_eq!(unknown.direction, Direction::Debit);
    }

    #[test]
    fn test_reference_fallbacks() {
        let now = Utc::now();
        let t = transaction_from_value(&json!({"transferReference": "TRF-7"}), now);
        assert_eq!(t.reference_number, "TRF-7");
        let t = transaction_from_value(&json!({"reference": "R-1", "transferReference": "TRF-7"}), now);
        assert_eq!(t.reference_number, "R-1");
    }

    #[test]
    fn test_status_inferred_from_balance_after() {
        let now = Utc::now();
        let raw = json!({"amount": 10, "balanceAfter": "90.00", "createdAt": now.to_rfc3339()});
        let t = transaction_from_value(&raw, now);
        assert_eq!(t.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_fresh_record_without_signals_is_pending() {
        let now = Utc::now();
        let raw = json!({"amount": 10, "createdAt": now.to_rfc3339()});
        let t = transaction_from_value(&raw, now);
        assert_eq!(t.status, TransactionStatus::Pending);
    }

    #[test]
    fn test_actual_status_overrides_status() {
        let now = Utc::now();
        let raw = json!({"status": "FAILED", "actualStatus": "SUCCESS"});
        let t = transaction_from_value(&raw, now);
        assert_eq!(t.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_negative_amount_keeps_magnitude() {
        let t = transaction_from_value(&json!({"amount": -42.5, "type": "WITHDRAWAL"}), Utc::now());
        assert_eq!(t.amount, dec!(42.50));
        assert_eq!(t.direction, Direction::Debit);
    }
}
