//! User record coercion.

use chrono::{DateTime, Utc};
use ledgerview_core::{Role, UserSummary};
use serde_json::Value;

use crate::fields;
use crate::normalize::account::account_from_value;

/// Name out of a person-shaped record: first/last pair when present, a
/// single `name`/`fullName` otherwise.
pub(crate) fn person_name(raw: &Value) -> String {
    let first = fields::string_field(raw, &["firstName", "first_name"]);
    let last = fields::string_field(raw, &["lastName", "last_name"]);
    if first.is_some() || last.is_some() {
        return format!(
            "{} {}",
            first.unwrap_or_default(),
            last.unwrap_or_default()
        )
        .trim()
        .to_string();
    }
    fields::string_field(raw, &["name", "fullName", "full_name"]).unwrap_or_default()
}

/// Coerce one raw user record, recursively coercing any embedded accounts.
/// `total_accounts` counts only valid accounts (non-empty account number).
pub fn user_from_value(raw: &Value, now: DateTime<Utc>) -> UserSummary {
    let accounts: Vec<_> = raw
        .get("accounts")
        .and_then(Value::as_array)
        .map(|records| records.iter().map(|r| account_from_value(r, now)).collect())
        .unwrap_or_default();
    let total_accounts = UserSummary::count_valid_accounts(&accounts);

    let role = fields::string_field(raw, &["role"])
        .map(|s| {
            if s.eq_ignore_ascii_case("admin") {
                Role::Admin
            } else {
                Role::User
            }
        })
        .unwrap_or_default();

    let (first_name, last_name) = split_name(raw);

    UserSummary {
        id: fields::string_field(raw, &["id", "userId", "user_id"]).unwrap_or_default(),
        first_name,
        last_name,
        role,
        is_enabled: fields::active_flag(
            raw,
            &["isEnabled", "enabled", "is_enabled"],
            Some("status"),
        ),
        accounts,
        total_accounts,
    }
}

fn split_name(raw: &Value) -> (String, String) {
    let first = fields::string_field(raw, &["firstName", "first_name"]);
    let last = fields::string_field(raw, &["lastName", "last_name"]);
    if first.is_some() || last.is_some() {
        return (first.unwrap_or_default(), last.unwrap_or_default());
    }
    // single combined name: first word vs rest
    let full = fields::string_field(raw, &["name", "fullName", "full_name"]).unwrap_or_default();
    match full.split_once(' ') {
        Some((head, tail)) => (head.to_string(), tail.trim().to_string()),
        None => (full, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_user_with_embedded_accounts() {
        let raw = json!({
            "id": 5,
            "first_name": "Grace",
            "last_name": "Hopper",
            "role": "ADMIN",
            "enabled": "true",
            "accounts": [
                {"accountNumber": "111", "balance": "75.00"},
                {"accountNumber": "", "balance": "10.00"},
                {"account_number": "222", "balance": 25}
            ]
        });
        let user = user_from_value(&raw, Utc::now());
        assert_eq!(user.id, "5");
        assert_eq!(user.display_name(), "Grace Hopper");
        assert!(user.is_admin());
        assert!(user.is_enabled);
        assert_eq!(user.accounts.len(), 3);
        // the empty-numbered account is kept but not counted
        assert_eq!(user.total_accounts, 2);
        assert_eq!(user.total_balance(), dec!(110.00));
    }

    #[test]
    fn test_combined_name_splits() {
        let user = user_from_value(&json!({"name": "Alan Mathison Turing"}), Utc::now());
        assert_eq!(user.first_name, "Alan");
        assert_eq!(user.last_name, "Mathison Turing");
    }

    #[test]
    fn test_role_defaults_to_user() {
        let user = user_from_value(&json!({"role": "SUPERVISOR"}), Utc::now());
        assert_eq!(user.role, Role::User);
        let user = user_from_value(&json!({}), Utc::now());
        assert_eq!(user.role, Role::User);
        assert!(!user.is_enabled);
    }

    #[test]
    fn test_person_name_variants() {
        assert_eq!(person_name(&json!({"firstName": "Ada", "lastName": "Lovelace"})), "Ada Lovelace");
        assert_eq!(person_name(&json!({"firstName": "Ada"})), "Ada");
        assert_eq!(person_name(&json!({"fullName": "Ada Lovelace"})), "Ada Lovelace");
        assert_eq!(person_name(&json!({})), "");
    }
}
