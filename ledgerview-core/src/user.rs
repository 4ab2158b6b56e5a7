//! Canonical user summary as shown on the admin screens.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Access role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[serde(rename = "USER")]
    #[default]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

/// A user with their embedded accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_enabled: bool,
    pub accounts: Vec<Account>,
    /// Count of valid accounts (non-empty account number), not of all records
    pub total_accounts: usize,
}

impl UserSummary {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Combined balance across all of this user's accounts
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Recount valid accounts from the embedded list
    pub fn count_valid_accounts(accounts: &[Account]) -> usize {
        accounts.iter().filter(|a| a.is_valid()).count()
    }
}
