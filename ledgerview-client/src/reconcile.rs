//! View reconciliation: concurrent fetches merged into one consistent
//! snapshot.
//!
//! A view build owns its own request-scoped results; nothing is cached
//! across builds and no partial snapshot is ever handed out. The accounts
//! fetch is the only required one: recent transactions degrade to an empty
//! list, and per-account enrichment is joined all-settled so one slow or
//! failing account never blocks the rest.

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

use ledgerview_core::{
    admin_relevant, daily_series, quick_stats, total_balance, type_distribution, Account,
    AdminStats, QuickStats, SeriesBucket, Transaction, TypeBreakdown, UserSummary,
};
use ledgerview_ingest::extract::{resolve_list, scalar_u64, EntityKind};
use ledgerview_ingest::{
    accounts_from_response, stat_scalars, transactions_from_response, users_from_response,
};

use crate::api::{endpoints, ApiError, BankApi};

/// How many trailing days the dashboard activity chart covers
const DASHBOARD_SERIES_DAYS: u32 = 7;

/// Everything the user dashboard needs, built fresh per fetch
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub accounts: Vec<Account>,
    pub recent_transactions: Vec<Transaction>,
    pub total_balance: Decimal,
    pub quick_stats: QuickStats,
    pub series: Vec<SeriesBucket>,
    pub type_distribution: Vec<TypeBreakdown>,
}

/// Everything the admin overview needs, built fresh per fetch
#[derive(Debug, Clone)]
pub struct AdminView {
    pub stats: AdminStats,
    pub users: Vec<UserSummary>,
    /// Transactions needing review, newest first, capped
    pub review_queue: Vec<Transaction>,
}

/// Build the user dashboard snapshot.
///
/// Accounts and recent transactions are fetched concurrently; only an
/// accounts failure fails the build. Each account then gets an independent
/// transaction-count enrichment fetch.
pub async fn build_dashboard(
    api: &dyn BankApi,
    now: DateTime<Utc>,
) -> Result<DashboardView, ApiError> {
    let (accounts_raw, recent_raw) = tokio::join!(
        api.fetch_json(endpoints::ACCOUNTS),
        api.fetch_json(endpoints::RECENT_TRANSACTIONS),
    );

    let mut accounts = accounts_from_response(&accounts_raw?, now);
    let recent_transactions = match recent_raw {
        Ok(raw) => transactions_from_response(&raw, now),
        Err(err) => {
            warn!(error = %err, "recent transactions fetch failed; dashboard shows none");
            Vec::new()
        }
    };

    enrich_transaction_counts(api, &mut accounts).await;

    let total = total_balance(&accounts);
    let stats = quick_stats(&recent_transactions);
    let series = daily_series(&recent_transactions, DASHBOARD_SERIES_DAYS, now.date_naive());
    let distribution = type_distribution(&recent_transactions);

    Ok(DashboardView {
        accounts,
        recent_transactions,
        total_balance: total,
        quick_stats: stats,
        series,
        type_distribution: distribution,
    })
}

/// Build the admin overview snapshot.
///
/// Users and system-wide transactions are fetched concurrently; only a users
/// failure fails the build. Stats scalars sent on the users envelope win;
/// anything missing is derived from the user list itself.
pub async fn build_admin(api: &dyn BankApi, now: DateTime<Utc>) -> Result<AdminView, ApiError> {
    let (users_raw, transactions_raw) = tokio::join!(
        api.fetch_json(endpoints::ADMIN_USERS),
        api.fetch_json(endpoints::ADMIN_TRANSACTIONS),
    );

    let users_raw = users_raw?;
    let users = users_from_response(&users_raw, now);
    let stats = stat_scalars(&users_raw).merge_with(AdminStats::from_users(&users, 0));

    let review_queue = match transactions_raw {
        Ok(raw) => admin_relevant(&transactions_from_response(&raw, now)),
        Err(err) => {
            warn!(error = %err, "admin transactions fetch failed; review queue empty");
            Vec::new()
        }
    };

    Ok(AdminView {
        stats,
        users,
        review_queue,
    })
}

/// Fan-out enrichment: one independent count fetch per account, joined
/// all-settled. A failed fetch falls back to the account's embedded count
/// (or 0) and never fails or delays the other accounts.
async fn enrich_transaction_counts(api: &dyn BankApi, accounts: &mut [Account]) {
    let fetches = accounts.iter().map(|account| {
        let endpoint = endpoints::account_transactions(&account.id);
        async move { api.fetch_json(&endpoint).await }
    });
    let results = join_all(fetches).await;

    for (account, result) in accounts.iter_mut().zip(results) {
        match result {
            Ok(raw) => account.transaction_count = Some(count_from_response(&raw)),
            Err(err) => {
                let fallback = account.transaction_count.unwrap_or(0);
                warn!(
                    account = %account.account_number,
                    error = %err,
                    fallback,
                    "transaction count fetch failed; using embedded count"
                );
                account.transaction_count = Some(fallback);
            }
        }
    }
}

/// A count response is either a scalar-bearing object or a plain
/// transactions envelope whose resolved length is the count.
fn count_from_response(raw: &Value) -> u64 {
    scalar_u64(raw, &["count", "totalElements", "total"])
        .unwrap_or_else(|| resolve_list(raw, EntityKind::Transaction).len() as u64)
}
