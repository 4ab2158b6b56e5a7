//! Admin statistics coercion.
//!
//! Stats arrive either as a dedicated stats object or as stray scalar fields
//! on a users envelope (`totalUsers`, `pendingVerifications`, ...). The
//! scalars are read here as present-or-absent so the reconciler can fill the
//! gaps from locally derived numbers; everything clamps below at zero.

use ledgerview_core::AdminStats;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::extract::{scalar_decimal, scalar_u64};

/// Stats scalars as they appeared (or did not) in a response
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatScalars {
    pub total_system_balance: Option<Decimal>,
    pub total_active_accounts: Option<u64>,
    pub total_system_users: Option<u64>,
    pub total_admin_users: Option<u64>,
    pub pending_verifications: Option<u64>,
}

impl StatScalars {
    /// Field-wise merge: a scalar the backend sent wins, anything absent
    /// comes from `derived`.
    pub fn merge_with(self, derived: AdminStats) -> AdminStats {
        AdminStats {
            total_system_balance: self
                .total_system_balance
                .unwrap_or(derived.total_system_balance),
            total_active_accounts: self
                .total_active_accounts
                .unwrap_or(derived.total_active_accounts),
            total_system_users: self.total_system_users.unwrap_or(derived.total_system_users),
            total_admin_users: self.total_admin_users.unwrap_or(derived.total_admin_users),
            pending_verifications: self
                .pending_verifications
                .unwrap_or(derived.pending_verifications),
        }
    }
}

/// Pull the known stats scalars out of a response (root or under `data`)
pub fn stat_scalars(raw: &Value) -> StatScalars {
    StatScalars {
        total_system_balance: scalar_decimal(raw, &["totalSystemBalance", "total_system_balance"])
            .map(|d| crate::fields::round_money(d.max(Decimal::ZERO))),
        total_active_accounts: scalar_u64(raw, &["totalActiveAccounts", "total_active_accounts"]),
        total_system_users: scalar_u64(
            raw,
            &[
                "totalSystemUsers",
                "total_system_users",
                "totalUsers",
                "total_users",
                "totalElements",
            ],
        ),
        total_admin_users: scalar_u64(raw, &["totalAdminUsers", "total_admin_users"]),
        pending_verifications: scalar_u64(raw, &["pendingVerifications", "pending_verifications"]),
    }
}

/// Coerce a stats-shaped response on its own; missing fields are zero
pub fn admin_stats_from_value(raw: &Value) -> AdminStats {
    stat_scalars(raw).merge_with(AdminStats::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_dedicated_stats_object() {
        let raw = json!({
            "totalSystemBalance": "125000.755",
            "totalActiveAccounts": 42,
            "totalSystemUsers": "120",
            "totalAdminUsers": 3,
            "pendingVerifications": 7
        });
        let stats = admin_stats_from_value(&raw);
        assert_eq!(stats.total_system_balance, dec!(125000.76));
        assert_eq!(stats.total_active_accounts, 42);
        assert_eq!(stats.total_system_users, 120);
        assert_eq!(stats.total_admin_users, 3);
        assert_eq!(stats.pending_verifications, 7);
    }

    #[test]
    fn test_scalars_buried_under_data() {
        let raw = json!({"data": {"totalUsers": 9, "pendingVerifications": "2"}});
        let scalars = stat_scalars(&raw);
        assert_eq!(scalars.total_system_users, Some(9));
        assert_eq!(scalars.pending_verifications, Some(2));
        assert_eq!(scalars.total_system_balance, None);
    }

    #[test]
    fn test_merge_prefers_backend_scalars() {
        let scalars = StatScalars {
            total_system_users: Some(200),
            ..Default::default()
        };
        let derived = AdminStats {
            total_system_users: 5,
            total_admin_users: 2,
            ..Default::default()
        };
        let merged = scalars.merge_with(derived);
        assert_eq!(merged.total_system_users, 200);
        assert_eq!(merged.total_admin_users, 2);
    }

    #[test]
    fn test_negative_values_clamp() {
        let raw = json!({"totalSystemBalance": -5, "totalUsers": "-3"});
        let stats = admin_stats_from_value(&raw);
        assert_eq!(stats.total_system_balance, Decimal::ZERO);
        assert_eq!(stats.total_system_users, 0);
    }
}
