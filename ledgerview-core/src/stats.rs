//! System-wide statistics for the admin overview.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::user::UserSummary;

/// Admin dashboard headline numbers. All fields are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdminStats {
    pub total_system_balance: Decimal,
    pub total_active_accounts: u64,
    pub total_system_users: u64,
    pub total_admin_users: u64,
    pub pending_verifications: u64,
}

impl AdminStats {
    /// Derive stats from a user list when the backend sends no stats object.
    /// `pending_verifications` cannot be derived locally and stays at the
    /// value handed in (0 when the backend never reported one).
    pub fn from_users(users: &[UserSummary], pending_verifications: u64) -> Self {
        let accounts: Vec<&Account> = users.iter().flat_map(|u| u.accounts.iter()).collect();
        AdminStats {
            total_system_balance: accounts.iter().map(|a| a.balance).sum(),
            total_active_accounts: accounts.iter().filter(|a| a.is_active).count() as u64,
            total_system_users: users.len() as u64,
            total_admin_users: users.iter().filter(|u| u.is_admin()).count() as u64,
            pending_verifications,
        }
    }
}
