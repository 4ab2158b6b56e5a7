//! ledgerview-core: canonical banking domain model and pure computation.
//!
//! No I/O and no raw JSON in here. `ledgerview-ingest` builds these types
//! from backend responses; this crate owns what they mean.

pub mod account;
pub mod aggregate;
pub mod stats;
pub mod status;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountType, OwnerSummary, is_at_risk, AT_RISK_THRESHOLD};
pub use aggregate::{
    admin_relevant, daily_series, quick_stats, total_balance, type_distribution, QuickStats,
    SeriesBucket, TypeBreakdown,
};
pub use stats::AdminStats;
pub use status::infer_status;
pub use transaction::{
    AccountRef, Direction, Transaction, TransactionStatus, TransactionType,
};
pub use user::{Role, UserSummary};
