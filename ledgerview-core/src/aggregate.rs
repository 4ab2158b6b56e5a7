//! Rollups over canonical collections: totals, quick stats, day-bucketed
//! series, type distributions, and the admin review filter.
//!
//! Everything here is a pure function over slices. Nothing filters by
//! `is_active` on the caller's behalf: `total_balance` sums exactly what it
//! is given, and callers that want active-only numbers filter first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::transaction::{Transaction, TransactionStatus, TransactionType};

/// Transactions at or above this amount always qualify for admin review
const ADMIN_REVIEW_AMOUNT: i64 = 10_000;

/// The admin review list never shows more than this many rows
const ADMIN_REVIEW_CAP: usize = 10;

/// Sum of balances over the given accounts, no activity filtering
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

/// Headline numbers shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuickStats {
    /// Σ amount over completed deposits
    pub total_deposits: Decimal,
    /// Σ amount over completed withdrawals
    pub total_withdrawals: Decimal,
    /// Count of pending transactions of any type
    pub pending_count: u64,
    /// Σ amount over pending transactions of any type
    pub pending_amount: Decimal,
}

/// Compute dashboard quick stats over a transaction collection
pub fn quick_stats(transactions: &[Transaction]) -> QuickStats {
    let mut stats = QuickStats::default();
    for t in transactions {
        match t.status {
            TransactionStatus::Completed => match t.transaction_type {
                TransactionType::Deposit => stats.total_deposits += t.amount,
                TransactionType::Withdrawal => stats.total_withdrawals += t.amount,
                TransactionType::Transfer => {}
            },
            TransactionStatus::Pending => {
                stats.pending_count += 1;
                stats.pending_amount += t.amount;
            }
            TransactionStatus::Failed => {}
        }
    }
    stats
}

/// One calendar day in a trailing activity series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBucket {
    pub date: NaiveDate,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    /// deposits − withdrawals
    pub net: Decimal,
}

impl SeriesBucket {
    /// Bucket label as shown on the chart axis (YYYY-MM-DD)
    pub fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Day-bucketed deposit/withdrawal series for a trailing window of `days`
/// calendar days, inclusive of `today`, oldest bucket first.
///
/// Only COMPLETED transactions count. A transaction lands in exactly the
/// bucket matching its `created_at` calendar day; days with no activity
/// still get a zeroed bucket.
pub fn daily_series(transactions: &[Transaction], days: u32, today: NaiveDate) -> Vec<SeriesBucket> {
    let days = days.max(1);
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(chrono::Days::new(back as u64)))
        .map(|date| {
            let mut deposits = Decimal::ZERO;
            let mut withdrawals = Decimal::ZERO;
            for t in transactions {
                if !t.is_completed() || t.created_at.date_naive() != date {
                    continue;
                }
                match t.transaction_type {
                    TransactionType::Deposit => deposits += t.amount,
                    TransactionType::Withdrawal => withdrawals += t.amount,
                    TransactionType::Transfer => {}
                }
            }
            SeriesBucket {
                date,
                deposits,
                withdrawals,
                net: deposits - withdrawals,
            }
        })
        .collect()
}

/// Count and volume for one transaction type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub transaction_type: TransactionType,
    pub count: u64,
    pub total: Decimal,
}

/// Group COMPLETED transactions by type. Groups come back in canonical type
/// order; empty groups are omitted.
pub fn type_distribution(transactions: &[Transaction]) -> Vec<TypeBreakdown> {
    TransactionType::all()
        .into_iter()
        .filter_map(|tt| {
            let mut count = 0u64;
            let mut total = Decimal::ZERO;
            for t in transactions {
                if t.is_completed() && t.transaction_type == tt {
                    count += 1;
                    total += t.amount;
                }
            }
            (count > 0).then(|| TypeBreakdown {
                transaction_type: tt,
                count,
                total,
            })
        })
        .collect()
}

/// Transactions an administrator should look at: large, a deposit, failed,
/// or explicitly flagged. Input order (newest first) is preserved and the
/// result is capped.
pub fn admin_relevant(transactions: &[Transaction]) -> Vec<Transaction> {
    let threshold = Decimal::from(ADMIN_REVIEW_AMOUNT);
    transactions
        .iter()
        .filter(|t| {
            t.amount >= threshold
                || t.transaction_type == TransactionType::Deposit
                || t.status == TransactionStatus::Failed
                || t.flagged
        })
        .take(ADMIN_REVIEW_CAP)
        .cloned()
        .collect()
}
