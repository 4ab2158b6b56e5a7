//! ledgerview-client: the network-facing layer.
//!
//! Owns the [`BankApi`] seam, its reqwest implementation, the transport
//! error taxonomy, and the view reconciler that merges concurrent fetches
//! into complete snapshots.

pub mod api;
pub mod http;
pub mod reconcile;

pub use api::{endpoints, ApiError, BankApi};
pub use http::HttpApi;
pub use reconcile::{build_admin, build_dashboard, AdminView, DashboardView};
