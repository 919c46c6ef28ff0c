//! ledger-core - Atomic money transfers over a relational ledger
//!
//! Accounts carry a running balance; entries record signed balance
//! adjustments; transfers link two accounts. The one hard operation is
//! [`Store::transfer_tx`]: create a transfer row, its two entries, and
//! both balance updates as a single all-or-nothing transaction, without
//! deadlocking when many transfers run concurrently in both directions
//! between the same pair of accounts.
//!
//! # Modules
//!
//! - [`ledger`] - Row types, single-row query primitives, error taxonomy
//! - [`store`] - Transactional transfer executor and unit-of-work helper
//! - [`db`] - Connection pool management and migrations
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod ledger;
pub mod logging;
pub mod store;

// Convenient re-exports at crate root
pub use config::{AppConfig, DbConfig};
pub use db::Database;
pub use ledger::error::LedgerError;
pub use ledger::models::{Account, Entry, Transfer};
pub use store::{Store, TransferTxParams, TransferTxResult};
